//! # Mohajer DOM
//!
//! Retained document model for the Mohajer site.
//!
//! The view controllers read and mutate this tree the way page scripts read
//! and mutate a browser DOM; the UI crate renders it and feeds events back in.
//!
//! ## Core Concepts
//!
//! - **Document**: arena of elements rooted at `html > body`, plus scroll offset
//! - **Element**: tag, id, classes, attributes, inline style, text, checked and media state
//! - **Selector**: tag / id / class / attribute tests with an optional parent-class constraint
//! - **El**: builder used to author markup subtrees
//!

pub mod builder;
pub mod document;
pub mod element;
pub mod selector;

pub use builder::El;
pub use document::Document;
pub use element::{Element, MediaState, NodeId};
pub use selector::Selector;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
