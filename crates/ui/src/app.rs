//! Main Application Component
//!
//! Renders the retained document element by element. Every element forwards
//! its clicks to the site as the event's original target and stops the
//! event there, so each click is dispatched exactly once.

use dioxus::prelude::*;
use mohajer_dom::NodeId;

use crate::bridge;
use crate::host::run_effects;
use crate::state::SITE;
use crate::view::NodeView;

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    use_hook(|| {
        let state = SITE.peek();
        let observed = state.observed.clone();
        let threshold = state.site.config().reveal_threshold;
        drop(state);

        spawn(async move {
            if let Err(e) = bridge::run_bridge(observed, threshold).await {
                tracing::warn!("Event bridge stopped: {:#}", e);
            }
        });
    });

    let Some(root) = SITE.read().root_view() else {
        return rsx! {};
    };
    let root_node = root.node;

    rsx! {
        div {
            id: "site-root",
            class: root.class.clone(),
            dir: root.dir.clone(),
            lang: root.lang.clone(),
            "data-node": root.node_attr(),
            onclick: move |e| handle_click(root_node, e),
            for child in root.children.iter().copied() {
                DomNode { key: "{child}", node: child }
            }
        }
    }
}

// ============================================================================
// Event Handlers
// ============================================================================

fn handle_click(node: NodeId, event: MouseEvent) {
    event.stop_propagation();
    let dispatch = SITE.write().site.click(node);
    if dispatch.prevent_default {
        event.prevent_default();
    }
    run_effects(dispatch.effects);
}

fn handle_change(node: NodeId, checked: bool) {
    let dispatch = SITE.write().site.change(node, checked);
    run_effects(dispatch.effects);
}

// ============================================================================
// Document Rendering
// ============================================================================

/// Generic container elements, differing only in tag
macro_rules! container {
    ($tag:ident, $view:ident) => {{
        let node = $view.node;
        rsx! {
            $tag {
                id: $view.id.clone(),
                class: $view.class.clone(),
                style: $view.style.clone(),
                "aria-expanded": $view.aria_expanded.clone(),
                "data-node": $view.node_attr(),
                onclick: move |e| handle_click(node, e),
                {contents(&$view)}
            }
        }
    }};
}

/// Own text followed by child elements
fn contents(view: &NodeView) -> Element {
    rsx! {
        if let Some(text) = view.text.clone() {
            "{text}"
        }
        for child in view.children.iter().copied() {
            DomNode { key: "{child}", node: child }
        }
    }
}

/// One document element and its subtree
#[component]
fn DomNode(node: NodeId) -> Element {
    let Some(view) = SITE.read().view(node) else {
        return rsx! {};
    };

    match view.tag.as_str() {
        "a" => rsx! {
            a {
                id: view.id.clone(),
                class: view.class.clone(),
                style: view.style.clone(),
                href: view.href.clone(),
                "data-node": view.node_attr(),
                onclick: move |e| handle_click(node, e),
                {contents(&view)}
            }
        },
        "input" => rsx! {
            input {
                id: view.id.clone(),
                class: view.class.clone(),
                r#type: view.input_type.clone().unwrap_or_else(|| "text".to_string()),
                checked: view.checked,
                "data-node": view.node_attr(),
                onclick: move |e| handle_click(node, e),
                onchange: move |e| handle_change(node, e.checked()),
            }
        },
        "img" => rsx! {
            img {
                id: view.id.clone(),
                class: view.class.clone(),
                style: view.style.clone(),
                src: view.src.clone(),
                alt: view.alt.clone(),
                "data-node": view.node_attr(),
                onclick: move |e| handle_click(node, e),
            }
        },
        "video" => rsx! {
            video {
                id: view.id.clone(),
                class: view.class.clone(),
                src: view.src.clone(),
                controls: true,
                "data-node": view.node_attr(),
                onclick: move |e| handle_click(node, e),
            }
        },
        "span" => container!(span, view),
        "p" => container!(p, view),
        "ul" => container!(ul, view),
        "li" => container!(li, view),
        "h1" => container!(h1, view),
        "h2" => container!(h2, view),
        "h3" => container!(h3, view),
        "h4" => container!(h4, view),
        "button" => container!(button, view),
        "label" => container!(label, view),
        "header" => container!(header, view),
        "nav" => container!(nav, view),
        "main" => container!(main, view),
        "section" => container!(section, view),
        "article" => container!(article, view),
        "footer" => container!(footer, view),
        "dl" => container!(dl, view),
        "dt" => container!(dt, view),
        _ => container!(div, view),
    }
}
