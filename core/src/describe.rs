//! `Describe`: The untyped view of a matcher
//!
//! Every matcher can describe itself in infix English ("equals 42",
//! "is less than 10"). Hosts render that text in failure messages without
//! knowing the matcher's argument type, so this half of the contract lives
//! in its own non-generic trait.
//!
//! The text is memoised: [`Describe::description`] runs
//! [`Describe::describe`] once and keeps the result in a
//! [`DescriptionCache`] owned by the matcher.

use once_cell::sync::OnceCell;
use std::fmt;

/// Memoised description text, embedded in every matcher.
///
/// Filled on first request and never changed afterwards. The cell is
/// thread-safe, so a matcher shared across threads may be described
/// concurrently without pre-warming.
///
/// # Example
///
/// ```
/// use verdict::{Describe, DescriptionCache};
///
/// struct IsEmpty {
///     cache: DescriptionCache,
/// }
///
/// impl Describe for IsEmpty {
///     fn describe(&self) -> String {
///         "is empty".to_string()
///     }
///
///     fn description_cache(&self) -> &DescriptionCache {
///         &self.cache
///     }
/// }
///
/// let m = IsEmpty { cache: DescriptionCache::new() };
/// assert!(!m.description_cache().is_filled());
/// assert_eq!(m.description(), "is empty");
/// assert!(m.description_cache().is_filled());
/// ```
#[derive(Default)]
pub struct DescriptionCache {
    text: OnceCell<String>,
}

impl DescriptionCache {
    /// Create an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: OnceCell::new(),
        }
    }

    /// Returns the cached text, or computes and stores it with `describe`.
    ///
    /// `describe` runs at most once per cache, even under concurrent access.
    pub fn get_or_describe(&self, describe: impl FnOnce() -> String) -> &str {
        self.text.get_or_init(|| {
            let text = describe();
            tracing::trace!(description = %text, "memoised matcher description");
            text
        })
    }

    /// Returns the cached text if it has been computed.
    #[must_use]
    pub fn get(&self) -> Option<&str> {
        self.text.get().map(String::as_str)
    }

    /// Returns `true` once a description has been stored.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.text.get().is_some()
    }
}

// Copies start empty: the text is derived state, recomputed on demand.
impl Clone for DescriptionCache {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl fmt::Debug for DescriptionCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DescriptionCache").field(&self.get()).finish()
    }
}

/// Human-readable self-description of a matcher.
///
/// Implementors provide [`describe`](Self::describe), the extensibility hook,
/// and point [`description_cache`](Self::description_cache) at a
/// [`DescriptionCache`] field. Consumers call
/// [`description`](Self::description), which is memoised.
///
/// The phrase must read correctly after a connective ("… and equals 3") and
/// after `"not "` ("not equals 3").
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Describe`",
    label = "this type cannot describe itself",
    note = "implement `describe(&self) -> String` and return an embedded `DescriptionCache` from `description_cache`"
)]
pub trait Describe {
    /// Produce the description text.
    ///
    /// Called at most once per matcher through [`description`](Self::description).
    fn describe(&self) -> String;

    /// Storage for the memoised description.
    fn description_cache(&self) -> &DescriptionCache;

    /// The memoised description.
    ///
    /// The first call runs [`describe`](Self::describe); every later call
    /// returns the identical text without describing again.
    fn description(&self) -> &str {
        self.description_cache().get_or_describe(|| self.describe())
    }
}

impl<D: Describe + ?Sized> Describe for Box<D> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn description_cache(&self) -> &DescriptionCache {
        (**self).description_cache()
    }

    fn description(&self) -> &str {
        (**self).description()
    }
}
