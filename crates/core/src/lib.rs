//! # Mohajer Core
//!
//! Core types, traits, and error handling for the Mohajer site view layer.
//!
//! - **Types**: closed enumerations for pages, themes, languages and hero products
//! - **Traits**: the `PreferenceStore` seam for durable preferences
//! - **Errors**: unified error handling with `SiteError` and `SiteResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{SiteError, SiteResult};
pub use traits::{LANGUAGE_KEY, PreferenceStore, THEME_KEY};
pub use types::{Language, Page, ProductKey, TextDirection, Theme};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
