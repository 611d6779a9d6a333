//! Click target resolution
//!
//! A click is resolved once into the innermost control around its target.
//! Handlers then match on the control kind instead of each re-inspecting the
//! target.

use crate::cards::card_selector;
use crate::hero;
use crate::language::{LANG_OPTION_ATTR, SWITCHER_CLASS};
use crate::modal::{self, CLOSE_BUTTON_ID, OPEN_BUTTON_ID};
use crate::navigation::{NAV_LINK_CLASS, PAGE_ATTR, SCROLL_ATTR};
use crate::tabs;
use mohajer_dom::{Document, NodeId, Selector};

/// The kind of control a click landed on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    NavLink { page: String, scroll: Option<String> },
    LanguageOption(String),
    LanguageToggle,
    HeroSelector(NodeId),
    OpenModal,
    CloseModal,
    ModalBackdrop,
    DeptTab { container: NodeId, tab: NodeId },
    Card(NodeId),
}

impl Control {
    /// Whether the click's default action is replaced by the handler
    pub fn prevents_default(&self) -> bool {
        matches!(self, Control::NavLink { .. } | Control::LanguageOption(_))
    }
}

/// Walk from `target` outwards and return the first control found
pub fn resolve_control(doc: &Document, target: NodeId) -> Option<Control> {
    let hero_selectors = hero::selectors(doc);
    let inside_link = doc.closest(target, &Selector::tag("a")).is_some();

    for node in doc.ancestors_inclusive(target) {
        if let Some(control) = control_at(doc, node, target, &hero_selectors, inside_link) {
            return Some(control);
        }
    }
    None
}

fn control_at(
    doc: &Document,
    node: NodeId,
    target: NodeId,
    hero_selectors: &[NodeId],
    inside_link: bool,
) -> Option<Control> {
    if doc.has_class(node, NAV_LINK_CLASS) {
        if let Some(page) = doc.attr(node, PAGE_ATTR) {
            return Some(Control::NavLink {
                page: page.to_string(),
                scroll: doc.attr(node, SCROLL_ATTR).map(str::to_string),
            });
        }
    }
    if let Some(code) = doc.attr(node, LANG_OPTION_ATTR) {
        return Some(Control::LanguageOption(code.to_string()));
    }
    if doc.has_class(node, SWITCHER_CLASS) {
        return Some(Control::LanguageToggle);
    }
    if hero_selectors.contains(&node) {
        return Some(Control::HeroSelector(node));
    }

    match doc.attr(node, "id") {
        Some(OPEN_BUTTON_ID) => return Some(Control::OpenModal),
        Some(CLOSE_BUTTON_ID) => return Some(Control::CloseModal),
        _ => {}
    }
    if node == target && modal::is_backdrop(doc, node) {
        return Some(Control::ModalBackdrop);
    }

    if let Some(container) = tabs::tab_group(doc, node) {
        return Some(Control::DeptTab {
            container,
            tab: node,
        });
    }
    if !inside_link && doc.matches(node, &card_selector()) {
        return Some(Control::Card(node));
    }
    None
}
