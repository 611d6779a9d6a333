//! # Mohajer View
//!
//! View-state coordinator of the Mohajer trading company site.
//!
//! Each controller owns one region of the document and mutates it directly;
//! `Site` ties them together and turns input events into document updates
//! plus host effects.
//!
//! ## Controllers
//!
//! - **navigation**: visible page, nav highlighting, header appearance, scrolling
//! - **cards** / **tabs** / **modal**: independent widget state
//! - **reveal**: one-shot reveal-on-scroll
//! - **theme** / **language**: persisted preferences applied document-wide
//! - **hero**: product switcher with a deferred, cancellable content swap
//!

pub mod cards;
pub mod config;
pub mod dispatch;
pub mod effects;
pub mod hero;
pub mod i18n;
pub mod language;
pub mod markup;
pub mod modal;
pub mod navigation;
pub mod reveal;
pub mod site;
pub mod store;
pub mod tabs;
pub mod theme;

pub use config::SiteConfig;
pub use dispatch::{Control, resolve_control};
pub use effects::{Dispatch, Effect, PendingSwap};
pub use hero::{HeroPhase, HeroSwitcher};
pub use i18n::TranslationTable;
pub use navigation::NavigationController;
pub use reveal::{IntersectionEntry, RevealAnimator};
pub use site::Site;
pub use store::{FileStore, MemoryStore, Preferences};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
