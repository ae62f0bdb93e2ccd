//! `AllOf` / `AnyOf`: n-ary conjunction and disjunction
//!
//! Both combinators own an ordered list of boxed sub-matchers sharing one
//! argument type. Construction order is evaluation order and description
//! order.
//!
//! The lifetime `'a` bounds what the sub-matchers may borrow, so matchers
//! holding references to test-local values compose like owned ones.

use crate::{Describe, DescriptionCache, MatchTrace, Matcher};
use std::fmt;

/// Room reserved per sub-description when assembling combinator text.
const DESCRIPTION_CHARS_PER_MATCHER: usize = 32;

/// Conjunction: matches iff every sub-matcher matches.
///
/// Evaluation short-circuits at the first sub-matcher that does not match;
/// later sub-matchers are not invoked. An empty `AllOf` matches everything.
///
/// Described as `"( d1 and d2 and … and dn )"`, where each `di` is the
/// sub-matcher's cached [`description`](Describe::description).
///
/// # Flattening
///
/// Combining an `AllOf` through `&`, [`Matcher::and`], or [`all_of!`](crate::all_of)
/// splices its children into the result instead of nesting it.
/// [`AllOf::new`] never flattens, so explicit nesting stays possible.
///
/// Flattening follows the static type. Once an `AllOf` is erased into a
/// `Box<dyn Matcher>`, it is an opaque operand and stays nested as one child.
///
/// # Example
///
/// ```
/// use verdict::prelude::*;
/// use verdict_test::{Equals, LessThan};
///
/// let m = LessThan::new(10) & !Equals::new(5);
/// assert!(m.matches(&7));
/// assert!(!m.matches(&5));
/// assert_eq!(m.description(), "( is less than 10 and not equals 5 )");
/// ```
pub struct AllOf<'a, T: ?Sized> {
    matchers: Vec<Box<dyn Matcher<Arg = T> + 'a>>,
    cache: DescriptionCache,
}

impl<'a, T: ?Sized> AllOf<'a, T> {
    /// Create a conjunction over `matchers`, kept exactly as given.
    #[must_use]
    pub fn new(matchers: Vec<Box<dyn Matcher<Arg = T> + 'a>>) -> Self {
        Self {
            matchers,
            cache: DescriptionCache::new(),
        }
    }

    /// Create an empty conjunction (matches everything).
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns the number of sub-matchers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Returns `true` if there are no sub-matchers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Iterate over the sub-matchers in construction order.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn Matcher<Arg = T> + 'a)> + '_ {
        self.matchers.iter().map(|m| &**m)
    }
}

impl<'a, T: ?Sized> FromIterator<Box<dyn Matcher<Arg = T> + 'a>> for AllOf<'a, T> {
    fn from_iter<I: IntoIterator<Item = Box<dyn Matcher<Arg = T> + 'a>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: ?Sized> Describe for AllOf<'_, T> {
    fn describe(&self) -> String {
        describe_joined(&self.matchers, "and")
    }

    fn description_cache(&self) -> &DescriptionCache {
        &self.cache
    }
}

impl<'a, T: ?Sized> Matcher for AllOf<'a, T> {
    type Arg = T;

    fn matches(&self, arg: &T) -> bool {
        self.matchers.iter().all(|m| m.matches(arg))
    }

    fn trace(&self, arg: &T) -> MatchTrace {
        let children: Vec<MatchTrace> = self.matchers.iter().map(|m| m.trace(arg)).collect();
        MatchTrace::AllOf {
            matched: children.iter().all(MatchTrace::matched),
            description: self.description().to_string(),
            children,
        }
    }

    fn into_conjuncts<'b>(self) -> Vec<Box<dyn Matcher<Arg = T> + 'b>>
    where
        Self: Sized + 'b,
    {
        self.matchers
    }
}

impl<T: ?Sized> fmt::Debug for AllOf<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AllOf").field(&self.matchers.len()).finish()
    }
}

impl<T: ?Sized> fmt::Display for AllOf<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Disjunction: matches iff some sub-matcher matches.
///
/// Evaluation short-circuits at the first sub-matcher that matches. An empty
/// `AnyOf` matches nothing.
///
/// Described as `"( d1 or d2 or … or dn )"`.
///
/// # Flattening
///
/// Only other `AnyOf`s are spliced in. An [`AllOf`] operand stays an opaque
/// sub-matcher, so `a | (b & c)` keeps its grouping in both evaluation and
/// description. As with `AllOf`, an `AnyOf` erased into a `Box<dyn Matcher>`
/// is no longer recognised and stays nested.
///
/// # Example
///
/// ```
/// use verdict::prelude::*;
/// use verdict_test::Equals;
///
/// let m = Equals::new(1) | Equals::new(2) | Equals::new(3);
/// assert_eq!(m.len(), 3);
/// assert!(m.matches(&2));
/// assert_eq!(m.description(), "( equals 1 or equals 2 or equals 3 )");
/// ```
pub struct AnyOf<'a, T: ?Sized> {
    matchers: Vec<Box<dyn Matcher<Arg = T> + 'a>>,
    cache: DescriptionCache,
}

impl<'a, T: ?Sized> AnyOf<'a, T> {
    /// Create a disjunction over `matchers`, kept exactly as given.
    #[must_use]
    pub fn new(matchers: Vec<Box<dyn Matcher<Arg = T> + 'a>>) -> Self {
        Self {
            matchers,
            cache: DescriptionCache::new(),
        }
    }

    /// Create an empty disjunction (matches nothing).
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns the number of sub-matchers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Returns `true` if there are no sub-matchers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Iterate over the sub-matchers in construction order.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn Matcher<Arg = T> + 'a)> + '_ {
        self.matchers.iter().map(|m| &**m)
    }
}

impl<'a, T: ?Sized> FromIterator<Box<dyn Matcher<Arg = T> + 'a>> for AnyOf<'a, T> {
    fn from_iter<I: IntoIterator<Item = Box<dyn Matcher<Arg = T> + 'a>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: ?Sized> Describe for AnyOf<'_, T> {
    fn describe(&self) -> String {
        describe_joined(&self.matchers, "or")
    }

    fn description_cache(&self) -> &DescriptionCache {
        &self.cache
    }
}

impl<'a, T: ?Sized> Matcher for AnyOf<'a, T> {
    type Arg = T;

    fn matches(&self, arg: &T) -> bool {
        self.matchers.iter().any(|m| m.matches(arg))
    }

    fn trace(&self, arg: &T) -> MatchTrace {
        let children: Vec<MatchTrace> = self.matchers.iter().map(|m| m.trace(arg)).collect();
        MatchTrace::AnyOf {
            matched: children.iter().any(MatchTrace::matched),
            description: self.description().to_string(),
            children,
        }
    }

    fn into_disjuncts<'b>(self) -> Vec<Box<dyn Matcher<Arg = T> + 'b>>
    where
        Self: Sized + 'b,
    {
        self.matchers
    }
}

impl<T: ?Sized> fmt::Debug for AnyOf<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnyOf").field(&self.matchers.len()).finish()
    }
}

impl<T: ?Sized> fmt::Display for AnyOf<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// `"( d1 <connective> d2 … )"`; an empty list yields `"(  )"`.
fn describe_joined<T: ?Sized>(matchers: &[Box<dyn Matcher<Arg = T> + '_>], connective: &str) -> String {
    let mut description = String::with_capacity(4 + matchers.len() * DESCRIPTION_CHARS_PER_MATCHER);
    description.push_str("( ");
    for (i, matcher) in matchers.iter().enumerate() {
        if i > 0 {
            description.push(' ');
            description.push_str(connective);
            description.push(' ');
        }
        description.push_str(matcher.description());
    }
    description.push_str(" )");
    description
}
