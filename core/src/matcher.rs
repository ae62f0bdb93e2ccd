//! `Matcher`: The typed predicate contract
//!
//! A matcher decides whether a value of its argument type satisfies it and,
//! through its [`Describe`] supertrait, says what it checks.

use crate::{AllOf, AnyOf, Describe, MatchTrace, NotOf};

/// A predicate over values of [`Arg`](Self::Arg) with a prose description.
///
/// The argument type is an associated type: a matcher accepts exactly one
/// argument type, and composing matchers with different argument types is
/// rejected at compile time.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` so matcher trees can be shared
/// between threads. [`DescriptionCache`](crate::DescriptionCache) is
/// thread-safe, so this costs implementors nothing.
///
/// # INV: Purity
///
/// `matches` is a pure function of the matcher's construction arguments and
/// the value. A matcher that cannot inspect a value decides `false` rather
/// than panicking.
///
/// # Example
///
/// ```
/// use verdict::{Describe, DescriptionCache, Matcher};
///
/// struct IsEven {
///     cache: DescriptionCache,
/// }
///
/// impl Describe for IsEven {
///     fn describe(&self) -> String {
///         "is even".to_string()
///     }
///
///     fn description_cache(&self) -> &DescriptionCache {
///         &self.cache
///     }
/// }
///
/// impl Matcher for IsEven {
///     type Arg = u32;
///
///     fn matches(&self, arg: &u32) -> bool {
///         arg % 2 == 0
///     }
/// }
///
/// let even = IsEven { cache: DescriptionCache::new() };
/// assert!(even.matches(&4));
/// assert!(!even.matches(&3));
/// assert_eq!(even.not().description(), "not is even");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Matcher`",
    label = "this type cannot be used as a matcher",
    note = "implement `Describe` and `Matcher` (with `type Arg` and `matches`) for your type"
)]
pub trait Matcher: Describe + Send + Sync {
    /// The type of value this matcher inspects.
    type Arg: ?Sized;

    /// Returns `true` iff `arg` satisfies this matcher.
    fn matches(&self, arg: &Self::Arg) -> bool;

    /// Evaluate with a full trace of every sub-matcher's verdict.
    ///
    /// Combinators override this to evaluate all children without
    /// short-circuiting. `trace(v).matched() == matches(v)` always holds.
    fn trace(&self, arg: &Self::Arg) -> MatchTrace {
        MatchTrace::Leaf {
            matched: self.matches(arg),
            description: self.description().to_string(),
        }
    }

    /// Conjunction with `rhs`, flattening any `AllOf` on either side.
    ///
    /// Equivalent to `self & rhs` for types with operator support. Both
    /// operands may borrow; the result lives as long as the shorter borrow.
    fn and<'a, R>(self, rhs: R) -> AllOf<'a, Self::Arg>
    where
        Self: Sized + 'a,
        R: Matcher<Arg = Self::Arg> + 'a,
    {
        let mut matchers = self.into_conjuncts();
        matchers.extend(rhs.into_conjuncts());
        AllOf::new(matchers)
    }

    /// Disjunction with `rhs`, flattening any `AnyOf` on either side.
    ///
    /// Equivalent to `self | rhs` for types with operator support.
    fn or<'a, R>(self, rhs: R) -> AnyOf<'a, Self::Arg>
    where
        Self: Sized + 'a,
        R: Matcher<Arg = Self::Arg> + 'a,
    {
        let mut matchers = self.into_disjuncts();
        matchers.extend(rhs.into_disjuncts());
        AnyOf::new(matchers)
    }

    /// Negation. Never simplifies: `m.not().not()` is `NotOf<NotOf<_>>`.
    fn not(self) -> NotOf<Self>
    where
        Self: Sized,
    {
        NotOf::new(self)
    }

    /// The operands this matcher contributes to an enclosing conjunction.
    ///
    /// `AllOf` yields its children; every other matcher, including a boxed
    /// `AllOf`, yields itself.
    #[doc(hidden)]
    fn into_conjuncts<'a>(self) -> Vec<Box<dyn Matcher<Arg = Self::Arg> + 'a>>
    where
        Self: Sized + 'a,
    {
        vec![Box::new(self)]
    }

    /// The operands this matcher contributes to an enclosing disjunction.
    ///
    /// `AnyOf` yields its children; every other matcher, including a boxed
    /// `AnyOf`, yields itself.
    #[doc(hidden)]
    fn into_disjuncts<'a>(self) -> Vec<Box<dyn Matcher<Arg = Self::Arg> + 'a>>
    where
        Self: Sized + 'a,
    {
        vec![Box::new(self)]
    }
}

// Blanket implementation for boxed matchers. The flattening hooks keep their
// defaults: a boxed combinator is an opaque operand.
#[diagnostic::do_not_recommend]
impl<M: Matcher + ?Sized> Matcher for Box<M> {
    type Arg = M::Arg;

    fn matches(&self, arg: &Self::Arg) -> bool {
        (**self).matches(arg)
    }

    fn trace(&self, arg: &Self::Arg) -> MatchTrace {
        (**self).trace(arg)
    }
}
