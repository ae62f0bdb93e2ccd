//! Syntactic surface: operators, named constructors, negation
//!
//! Rust cannot overload `&&` and `||`, so conjunction and disjunction use
//! `&` and `|`; negation uses `!`. Every surface flattens the same way:
//!
//! | Expression | Result |
//! |---|---|
//! | `AllOf(a, b) & c` | `AllOf(a, b, c)` |
//! | `a & AllOf(b, c)` | `AllOf(a, b, c)` |
//! | `AllOf(a, b) & AllOf(c, d)` | `AllOf(a, b, c, d)` |
//! | `AllOf(a, b) \| c` | `AnyOf(AllOf(a, b), c)` |
//! | `!!a` | `NotOf(NotOf(a))` |
//!
//! Operators exist only for matcher types: the core combinators get them
//! here, user matchers opt in with [`impl_matcher_ops!`](crate::impl_matcher_ops).
//! The right-hand side must be a [`Matcher`](crate::Matcher) with the same
//! argument type, so unrelated types never pick up these impls.

use crate::{Matcher, NotOf};

/// Negate `matcher`.
///
/// Same as `!matcher` or `matcher.not()`.
///
/// ```
/// use verdict::prelude::*;
/// use verdict_test::Equals;
///
/// let m = not(Equals::new(3));
/// assert!(m.matches(&2));
/// assert_eq!(m.description(), "not equals 3");
/// ```
pub fn not<M: Matcher>(matcher: M) -> NotOf<M> {
    NotOf::new(matcher)
}

/// Implement `&`, `|` and `!` for matcher types.
///
/// `&` and `|` accept any right-hand [`Matcher`](crate::Matcher) with the
/// same argument type and flatten like [`Matcher::and`](crate::Matcher::and)
/// and [`Matcher::or`](crate::Matcher::or). `!` wraps in
/// [`NotOf`](crate::NotOf).
///
/// ```
/// use verdict::prelude::*;
///
/// struct IsOdd {
///     cache: DescriptionCache,
/// }
///
/// impl Describe for IsOdd {
///     fn describe(&self) -> String {
///         "is odd".to_string()
///     }
///
///     fn description_cache(&self) -> &DescriptionCache {
///         &self.cache
///     }
/// }
///
/// impl Matcher for IsOdd {
///     type Arg = u64;
///
///     fn matches(&self, arg: &u64) -> bool {
///         arg % 2 == 1
///     }
/// }
///
/// verdict::impl_matcher_ops!(IsOdd);
///
/// let odd = || IsOdd { cache: DescriptionCache::new() };
/// let m = odd() & !odd();
/// assert!(!m.matches(&3));
/// assert_eq!(m.description(), "( is odd and not is odd )");
/// ```
///
/// Generic matchers list their type parameters first; `?Sized` relaxations
/// are accepted:
///
/// ```ignore
/// verdict::impl_matcher_ops!(impl<V> Equals<V>);
/// verdict::impl_matcher_ops!(impl<T: ?Sized> Wrapper<T>);
/// ```
///
/// # Borrowing matchers
///
/// The combinator an operator returns can only borrow for a lifetime named
/// in the left operand's type. Types without a lifetime parameter therefore
/// combine with `'static` operands. A matcher that borrows declares its
/// lifetime first, and its operators then accept operands borrowing for
/// that lifetime:
///
/// ```
/// use verdict::prelude::*;
///
/// struct HasPrefix<'p> {
///     prefix: &'p str,
///     cache: DescriptionCache,
/// }
///
/// impl Describe for HasPrefix<'_> {
///     fn describe(&self) -> String {
///         format!("starts with {}", self.prefix)
///     }
///
///     fn description_cache(&self) -> &DescriptionCache {
///         &self.cache
///     }
/// }
///
/// impl Matcher for HasPrefix<'_> {
///     type Arg = str;
///
///     fn matches(&self, arg: &str) -> bool {
///         arg.starts_with(self.prefix)
///     }
/// }
///
/// verdict::impl_matcher_ops!(impl<'p> HasPrefix<'p>);
///
/// fn has(prefix: &str) -> HasPrefix<'_> {
///     HasPrefix { prefix, cache: DescriptionCache::new() }
/// }
///
/// let prefixes = vec![String::from("foo"), String::from("bar")];
/// let m = has(&prefixes[0]) | has(&prefixes[1]);
/// assert!(m.matches("barn"));
/// assert_eq!(m.description(), "( starts with foo or starts with bar )");
/// ```
///
/// Matchers whose borrow sits in a type parameter, such as `Equals<&str>`,
/// compose through [`Matcher::and`](crate::Matcher::and),
/// [`Matcher::or`](crate::Matcher::or), [`all_of!`](crate::all_of) and
/// [`any_of!`](crate::any_of), or through `&`/`|` once the left operand is
/// already an [`AllOf`](crate::AllOf) or [`AnyOf`](crate::AnyOf).
///
/// # Type checking
///
/// Operands must share one argument type:
///
/// ```compile_fail,E0271
/// use verdict::prelude::*;
/// use verdict_test::Equals;
///
/// let _m = Equals::new(1_i32) & Equals::new(1_i64);
/// ```
///
/// and the operators are never implemented for non-matchers:
///
/// ```compile_fail,E0277
/// use verdict::prelude::*;
/// use verdict_test::Equals;
///
/// let _m = 3_i32 & Equals::new(1_i32);
/// ```
#[macro_export]
macro_rules! impl_matcher_ops {
    (@impl [$($generics:tt)*] $lt:lifetime, $ty:ty) => {
        impl<$($generics)* __Rhs> ::core::ops::BitAnd<__Rhs> for $ty
        where
            $ty: $crate::Matcher + $lt,
            __Rhs: $crate::Matcher<Arg = <$ty as $crate::Matcher>::Arg> + $lt,
        {
            type Output = $crate::AllOf<$lt, <$ty as $crate::Matcher>::Arg>;

            fn bitand(self, rhs: __Rhs) -> Self::Output {
                $crate::Matcher::and(self, rhs)
            }
        }

        impl<$($generics)* __Rhs> ::core::ops::BitOr<__Rhs> for $ty
        where
            $ty: $crate::Matcher + $lt,
            __Rhs: $crate::Matcher<Arg = <$ty as $crate::Matcher>::Arg> + $lt,
        {
            type Output = $crate::AnyOf<$lt, <$ty as $crate::Matcher>::Arg>;

            fn bitor(self, rhs: __Rhs) -> Self::Output {
                $crate::Matcher::or(self, rhs)
            }
        }

        impl<$($generics)*> ::core::ops::Not for $ty
        where
            $ty: $crate::Matcher,
        {
            type Output = $crate::NotOf<$ty>;

            fn not(self) -> Self::Output {
                $crate::NotOf::new(self)
            }
        }
    };
    (impl<$lt:lifetime $(, $gen:ident $(: ?$relax:ident)?)* $(,)?> $ty:ty) => {
        $crate::impl_matcher_ops!(@impl [$lt, $($gen $(: ?$relax)?,)*] $lt, $ty);
    };
    (impl<$($gen:ident $(: ?$relax:ident)?),+ $(,)?> $ty:ty) => {
        $crate::impl_matcher_ops!(@impl [$($gen $(: ?$relax)?,)+] 'static, $ty);
    };
    ($($ty:ty),+ $(,)?) => {
        $($crate::impl_matcher_ops!(@impl [] 'static, $ty);)+
    };
}

/// Conjunction of the given matchers, flattening nested `AllOf`s.
///
/// `all_of![]` is the empty conjunction and matches everything.
///
/// ```
/// use verdict::prelude::*;
/// use verdict_test::{Equals, LessThan};
///
/// let inner = all_of![LessThan::new(10), !Equals::new(5)];
/// let m = all_of![inner, !Equals::new(7)];
/// assert_eq!(m.len(), 3);
/// assert_eq!(
///     m.description(),
///     "( is less than 10 and not equals 5 and not equals 7 )",
/// );
/// ```
#[macro_export]
macro_rules! all_of {
    ($($matcher:expr),* $(,)?) => {
        $crate::AllOf::new(
            ::std::iter::empty()
                $(.chain($crate::Matcher::into_conjuncts($matcher)))*
                .collect(),
        )
    };
}

/// Disjunction of the given matchers, flattening nested `AnyOf`s.
///
/// `any_of![]` is the empty disjunction and matches nothing.
///
/// ```
/// use verdict::prelude::*;
/// use verdict_test::Equals;
///
/// let m = any_of![Equals::new(1), any_of![Equals::new(2), Equals::new(3)]];
/// assert_eq!(m.len(), 3);
/// assert_eq!(m.description(), "( equals 1 or equals 2 or equals 3 )");
/// ```
#[macro_export]
macro_rules! any_of {
    ($($matcher:expr),* $(,)?) => {
        $crate::AnyOf::new(
            ::std::iter::empty()
                $(.chain($crate::Matcher::into_disjuncts($matcher)))*
                .collect(),
        )
    };
}

crate::impl_matcher_ops!(impl<'a, T: ?Sized> crate::AllOf<'a, T>);
crate::impl_matcher_ops!(impl<'a, T: ?Sized> crate::AnyOf<'a, T>);
crate::impl_matcher_ops!(impl<M> crate::NotOf<M>);
