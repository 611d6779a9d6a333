//! # Mohajer UI
//!
//! Dioxus Desktop front end for the Mohajer trading company site.
//!
//! The site's document is rendered as-is. Clicks and checkbox changes are
//! handled by rsx event handlers; scrolling, key presses and viewport
//! intersections arrive through a small webview bridge script.
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod bridge;
pub mod host;
pub mod state;
pub mod view;

// ============================================================================
// Re-exports
// ============================================================================

pub use mohajer_core;
pub use mohajer_view;

pub use app::App;
pub use bridge::HostEvent;
pub use state::{SITE, SiteState, init_site_state};
pub use view::NodeView;

use mohajer_view::SiteConfig;

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Mohajer Trading Group";

/// Application display title
pub const TITLE: &str = "Mohajer Trading Group - Steel, Petrochemical & Foodstuff";

/// Site stylesheet, embedded at build time
const STYLES: &str = include_str!("../../../assets/styles/site.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the site in a desktop window
///
/// ```rust,ignore
/// fn main() {
///     mohajer_ui::launch(SiteConfig::default());
/// }
/// ```
pub fn launch(config: SiteConfig) {
    launch_with_window(config, TITLE, 1280.0, 860.0);
}

/// Launch with a custom window title and size
pub fn launch_with_window(config: SiteConfig, title: &str, width: f64, height: f64) {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    init_site_state(config);

    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(title)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(width, height))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(480.0, 640.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);
}

/// The embedded stylesheet
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_title() {
        assert!(TITLE.starts_with(NAME));
    }

    #[test]
    fn test_styles_cover_state_classes() {
        for class in [".dark-theme", ".light-bg", ".is-flipped", ".visible", ".active", ".open"] {
            assert!(STYLES.contains(class), "missing {}", class);
        }
    }
}
