//! `NotOf`: negation of a single matcher

use crate::{Describe, DescriptionCache, MatchTrace, Matcher};
use std::fmt;

/// Negation: matches iff the inner matcher does not.
///
/// Described as `"not "` followed by the inner description, with no added
/// parentheses. Negation is never simplified: `!!m` is
/// `NotOf<NotOf<M>>`, described `"not not …"`.
///
/// # Example
///
/// ```
/// use verdict::prelude::*;
/// use verdict_test::Equals;
///
/// let m = !!Equals::new(4);
/// assert!(m.matches(&4));
/// assert_eq!(m.description(), "not not equals 4");
/// ```
pub struct NotOf<M> {
    inner: M,
    cache: DescriptionCache,
}

impl<M> NotOf<M> {
    /// Negate `inner`.
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            cache: DescriptionCache::new(),
        }
    }

    /// Returns the negated matcher.
    #[must_use]
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Consumes the negation, returning the inner matcher.
    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: Describe> Describe for NotOf<M> {
    fn describe(&self) -> String {
        format!("not {}", self.inner.description())
    }

    fn description_cache(&self) -> &DescriptionCache {
        &self.cache
    }
}

impl<M: Matcher> Matcher for NotOf<M> {
    type Arg = M::Arg;

    fn matches(&self, arg: &M::Arg) -> bool {
        !self.inner.matches(arg)
    }

    fn trace(&self, arg: &M::Arg) -> MatchTrace {
        let inner = self.inner.trace(arg);
        MatchTrace::NotOf {
            matched: !inner.matched(),
            description: self.description().to_string(),
            inner: Box::new(inner),
        }
    }
}

impl<M> fmt::Debug for NotOf<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NotOf").finish()
    }
}

impl<M: Describe> fmt::Display for NotOf<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
