//! Core traits for the site view layer
//!
//! The only seam the controllers need from the outside world besides the
//! document itself is a durable key-value store for preferences.

use crate::error::SiteResult;

// ============================================================================
// PreferenceStore Trait
// ============================================================================

/// Storage key of the theme preference
pub const THEME_KEY: &str = "theme";

/// Storage key of the language preference
pub const LANGUAGE_KEY: &str = "language";

/// A process-independent string key-value store
///
/// Implementations may fail (missing data directory, read-only disk); callers
/// are expected to degrade to in-memory behavior rather than abort.
///
/// # Example
///
/// ```rust,ignore
/// use mohajer_core::{PreferenceStore, SiteResult};
/// use std::collections::HashMap;
///
/// struct MapStore(HashMap<String, String>);
///
/// impl PreferenceStore for MapStore {
///     fn get(&self, key: &str) -> SiteResult<Option<String>> {
///         Ok(self.0.get(key).cloned())
///     }
///     fn set(&mut self, key: &str, value: &str) -> SiteResult<()> {
///         self.0.insert(key.to_string(), value.to_string());
///         Ok(())
///     }
/// }
/// ```
pub trait PreferenceStore: Send {
    /// Read a value, `None` when the key was never written
    fn get(&self, key: &str) -> SiteResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> SiteResult<()>;

    /// Name used in log lines
    fn describe(&self) -> String {
        "preference store".to_string()
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> SiteResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> SiteResult<()> {
        (**self).set(key, value)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
