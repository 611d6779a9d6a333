//! Light/dark theme

use crate::store::Preferences;
use mohajer_core::Theme;
use mohajer_dom::{Document, NodeId, Selector};

pub const DARK_THEME_CLASS: &str = "dark-theme";
pub const TOGGLE_CLASS: &str = "theme-toggle-checkbox";

pub fn toggle_selector() -> Selector {
    Selector::class(TOGGLE_CLASS)
}

/// Set the document-wide flag and check every toggle to match
pub fn apply_theme(doc: &mut Document, theme: Theme) {
    let body = doc.body();
    doc.set_class(body, DARK_THEME_CLASS, theme.is_dark());
    for toggle in doc.query_all(&toggle_selector()) {
        doc.set_checked(toggle, theme.is_dark());
    }
    tracing::debug!("Applied {} theme", theme);
}

/// Theme currently shown by the document
pub fn current_theme(doc: &Document) -> Theme {
    Theme::from_checked(doc.has_class(doc.body(), DARK_THEME_CLASS))
}

/// A toggle changed: persist the new state first, then re-sync every toggle
pub fn on_toggle_change(
    doc: &mut Document,
    prefs: &mut Preferences,
    toggle: NodeId,
    checked: bool,
) -> Theme {
    doc.set_checked(toggle, checked);
    let theme = Theme::from_checked(checked);
    prefs.save_theme(theme);
    apply_theme(doc, theme);
    tracing::info!("Theme changed to {}", theme);
    theme
}

/// Startup: stored theme (or the default) applied immediately
pub fn init_theme(doc: &mut Document, prefs: &mut Preferences) -> Theme {
    let theme = prefs.load_theme();
    apply_theme(doc, theme);
    theme
}
