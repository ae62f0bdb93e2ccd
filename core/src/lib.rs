//! verdict - Composable matcher algebra for test assertions
//!
//! A matcher answers two questions about a value: does it satisfy me, and
//! how do I describe myself? Matchers compose under conjunction, disjunction
//! and negation while keeping both answers intact, so a failed assertion can
//! print exactly what was expected.
//!
//! # Architecture
//!
//! - [`Describe`]: Untyped view: `describe()` hook + memoised `description()`
//! - [`DescriptionCache`]: Thread-safe once-cell holding the memoised text
//! - [`Matcher`]: Typed view: `type Arg`, `matches(&Arg) -> bool`
//! - [`AllOf`] / [`AnyOf`]: n-ary conjunction / disjunction over boxed sub-matchers
//! - [`NotOf<M>`]: Negation of one owned sub-matcher
//! - [`MatchTrace`]: Per-node verdicts for explaining a failure
//!
//! # Key Design Insights
//!
//! 1. **Argument type is associated**: each matcher accepts exactly one
//!    argument type, so composing mismatched matchers fails to compile.
//!
//! 2. **Heterogeneous children are boxed**: `AllOf<'a, T>` stores
//!    `Vec<Box<dyn Matcher<Arg = T> + 'a>>`, so any mix of matcher types
//!    composes, including matchers that borrow for `'a`.
//!
//! 3. **Flattening at every surface**: `&`, [`Matcher::and`] and [`all_of!`]
//!    splice `AllOf` operands into one flat conjunction (likewise `|`/`AnyOf`).
//!    [`AllOf::new`] is the only way to nest on purpose.
//!
//! 4. **Descriptions are computed once**: combinators build their text from
//!    the children's cached descriptions.
//!
//! # Example
//!
//! ```
//! use verdict::prelude::*;
//!
//! // Define a matcher
//! struct Equals {
//!     expected: i32,
//!     cache: DescriptionCache,
//! }
//!
//! fn equals(expected: i32) -> Equals {
//!     Equals { expected, cache: DescriptionCache::new() }
//! }
//!
//! impl Describe for Equals {
//!     fn describe(&self) -> String {
//!         format!("equals {}", self.expected)
//!     }
//!
//!     fn description_cache(&self) -> &DescriptionCache {
//!         &self.cache
//!     }
//! }
//!
//! impl Matcher for Equals {
//!     type Arg = i32;
//!
//!     fn matches(&self, arg: &i32) -> bool {
//!         *arg == self.expected
//!     }
//! }
//!
//! // Opt in to `&`, `|` and `!`
//! verdict::impl_matcher_ops!(Equals);
//!
//! // Compose
//! let m = equals(1) | equals(2) | !equals(3);
//! assert!(m.matches(&2));
//! assert_eq!(m.description(), "( equals 1 or equals 2 or not equals 3 )");
//! ```

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod combinator;
mod describe;
mod matcher;
mod not_of;
mod ops;
mod trace;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

// Core traits
pub use describe::{Describe, DescriptionCache};
pub use matcher::Matcher;

// Combinators
pub use combinator::{AllOf, AnyOf};
pub use not_of::NotOf;

// Syntactic surface (macros are exported at the crate root)
pub use ops::not;

// Trace types
pub use trace::MatchTrace;

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use verdict::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Macros
        all_of,
        any_of,
        impl_matcher_ops,
        // Functions
        not,
        // Combinators
        AllOf,
        AnyOf,
        // Traits
        Describe,
        DescriptionCache,
        // Trace types
        MatchTrace,
        Matcher,
        NotOf,
    };
}
