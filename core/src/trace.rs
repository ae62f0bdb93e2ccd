//! Evaluation trace types for explaining matcher verdicts.
//!
//! [`MatchTrace`] mirrors the shape of a matcher tree ([`AllOf`](crate::AllOf),
//! [`AnyOf`](crate::AnyOf), [`NotOf`](crate::NotOf), leaves) but records each
//! node's verdict and description instead of its sub-matchers. Produce one
//! with [`Matcher::trace`](crate::Matcher::trace).
//!
//! Combinators evaluate ALL children when tracing (no short-circuit) for
//! maximum debugging value. The root verdict still equals `matches()`.
//!
//! # Example
//!
//! ```
//! use verdict::prelude::*;
//! use verdict_test::{Equals, LessThan};
//!
//! let m = LessThan::new(10) & !Equals::new(5);
//! let trace = m.trace(&5);
//! assert!(!trace.matched());
//! assert_eq!(
//!     trace.to_string(),
//!     "✗ ( is less than 10 and not equals 5 )\n  ✓ is less than 10\n  ✗ not equals 5\n    ✓ equals 5",
//! );
//! ```

use std::fmt;

/// Trace of one matcher evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchTrace {
    /// A matcher with no traced children.
    Leaf {
        /// Whether the matcher matched.
        matched: bool,
        /// The matcher's description.
        description: String,
    },
    /// Conjunction: all children must match.
    AllOf {
        /// Whether all children matched.
        matched: bool,
        /// The conjunction's description.
        description: String,
        /// Trace of each child (all evaluated, no short-circuit).
        children: Vec<MatchTrace>,
    },
    /// Disjunction: any child must match.
    AnyOf {
        /// Whether any child matched.
        matched: bool,
        /// The disjunction's description.
        description: String,
        /// Trace of each child (all evaluated, no short-circuit).
        children: Vec<MatchTrace>,
    },
    /// Negation: inverts the inner verdict.
    NotOf {
        /// Whether the negation matched (i.e., inner did NOT match).
        matched: bool,
        /// The negation's description.
        description: String,
        /// Trace of the negated matcher.
        inner: Box<MatchTrace>,
    },
}

impl MatchTrace {
    /// Get the verdict of this node.
    #[must_use]
    pub fn matched(&self) -> bool {
        match self {
            Self::Leaf { matched, .. }
            | Self::AllOf { matched, .. }
            | Self::AnyOf { matched, .. }
            | Self::NotOf { matched, .. } => *matched,
        }
    }

    /// Get the description of the traced matcher.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Leaf { description, .. }
            | Self::AllOf { description, .. }
            | Self::AnyOf { description, .. }
            | Self::NotOf { description, .. } => description,
        }
    }

    /// Children of this node, in evaluation order.
    #[must_use]
    pub fn children(&self) -> &[MatchTrace] {
        match self {
            Self::Leaf { .. } => &[],
            Self::AllOf { children, .. } | Self::AnyOf { children, .. } => children,
            Self::NotOf { inner, .. } => std::slice::from_ref(&**inner),
        }
    }

    /// Leaf nodes that did not match, depth first.
    ///
    /// Under a negation a *matching* leaf is what broke the verdict, so this
    /// reports leaves whose own verdict disagrees with what their ancestors
    /// needed.
    #[must_use]
    pub fn failing_leaves(&self) -> Vec<&MatchTrace> {
        let mut out = Vec::new();
        self.collect_failing(true, &mut out);
        out
    }

    fn collect_failing<'a>(&'a self, wanted: bool, out: &mut Vec<&'a MatchTrace>) {
        match self {
            Self::Leaf { matched, .. } => {
                if *matched != wanted {
                    out.push(self);
                }
            }
            Self::AllOf { children, .. } | Self::AnyOf { children, .. } => {
                for child in children {
                    child.collect_failing(wanted, out);
                }
            }
            Self::NotOf { inner, .. } => inner.collect_failing(!wanted, out),
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        if depth > 0 {
            writeln!(f)?;
        }
        let mark = if self.matched() { '✓' } else { '✗' };
        write!(f, "{:indent$}{mark} {}", "", self.description(), indent = depth * 2)?;
        for child in self.children() {
            child.render(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for MatchTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}
