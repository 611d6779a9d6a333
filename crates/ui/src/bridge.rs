//! Webview event bridge
//!
//! Window-level events that have no element to hang an rsx handler on
//! (scrolling, key presses, viewport intersections) are collected by a small
//! script and sent back as JSON messages.

use crate::host::run_effects;
use crate::state::SITE;
use anyhow::{Context, anyhow};
use dioxus::prelude::*;
use mohajer_dom::NodeId;
use mohajer_view::{Dispatch, IntersectionEntry, Site};
use serde::Deserialize;

const BRIDGE_JS: &str = r#"
const targets = await dioxus.recv();
const threshold = await dioxus.recv();

window.addEventListener('scroll', () => {
    dioxus.send({ kind: 'scroll', y: window.scrollY });
}, { passive: true });

document.addEventListener('keydown', (e) => {
    dioxus.send({ kind: 'key', key: e.key });
});

window.mohajerObserver = new IntersectionObserver((entries) => {
    const visible = entries
        .filter((entry) => entry.isIntersecting)
        .map((entry) => ({
            node: Number(entry.target.dataset.node),
            ratio: entry.intersectionRatio,
        }));
    if (visible.length > 0) {
        dioxus.send({ kind: 'intersections', entries: visible });
    }
}, { threshold });

for (const id of targets) {
    const el = document.querySelector(`[data-node="${id}"]`);
    if (el) {
        window.mohajerObserver.observe(el);
    }
}

await new Promise(() => {});
"#;

/// Message sent by the bridge script
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HostEvent {
    Scroll { y: f64 },
    Key { key: String },
    Intersections { entries: Vec<IntersectionEntry> },
}

/// Feed one bridge message into the site
pub fn route(site: &mut Site, event: HostEvent) -> Dispatch {
    match event {
        HostEvent::Scroll { y } => {
            site.scroll(y);
            Dispatch::none()
        }
        HostEvent::Key { key } => site.key(&key),
        HostEvent::Intersections { entries } => site.intersections(&entries),
    }
}

/// Install the bridge script and pump its messages until the webview goes away
pub async fn run_bridge(observed: Vec<NodeId>, threshold: f64) -> anyhow::Result<()> {
    let mut eval = document::eval(BRIDGE_JS);
    let targets: Vec<usize> = observed.iter().map(NodeId::index).collect();
    eval.send(targets)
        .map_err(|e| anyhow!("{e}"))
        .context("Sending reveal targets to the bridge")?;
    eval.send(threshold)
        .map_err(|e| anyhow!("{e}"))
        .context("Sending reveal threshold to the bridge")?;
    tracing::debug!("Bridge installed, observing {} elements", observed.len());

    loop {
        let event = eval
            .recv::<HostEvent>()
            .await
            .map_err(|e| anyhow!("{e}"))
            .context("Receiving bridge message")?;
        let dispatch = route(&mut SITE.write().site, event);
        run_effects(dispatch.effects);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mohajer_core::{Language, Theme};
    use mohajer_view::markup::site_document;
    use mohajer_view::{Effect, MemoryStore, Preferences, SiteConfig, TranslationTable};

    fn site() -> Site {
        let prefs = Preferences::new(Box::new(MemoryStore::new()), Theme::Light, Language::En);
        let mut site = Site::new(
            site_document(),
            SiteConfig::default(),
            prefs,
            TranslationTable::builtin().clone(),
        );
        site.startup();
        site
    }

    #[test]
    fn test_messages_deserialize() {
        let event: HostEvent = serde_json::from_str(r#"{ "kind": "scroll", "y": 120.5 }"#).unwrap();
        assert_eq!(event, HostEvent::Scroll { y: 120.5 });

        let event: HostEvent =
            serde_json::from_str(r#"{ "kind": "intersections", "entries": [{ "node": 12, "ratio": 0.4 }] }"#)
                .unwrap();
        assert_eq!(
            event,
            HostEvent::Intersections {
                entries: vec![IntersectionEntry {
                    node: NodeId(12),
                    ratio: 0.4
                }]
            }
        );
    }

    #[test]
    fn test_route_scroll_and_key() {
        let mut site = site();
        route(&mut site, HostEvent::Scroll { y: 300.0 });
        assert_eq!(site.document().scroll_y(), 300.0);

        let dispatch = route(
            &mut site,
            HostEvent::Key {
                key: "Escape".to_string(),
            },
        );
        assert!(dispatch.is_empty());
    }

    #[test]
    fn test_route_intersections_unobserves() {
        let mut site = site();
        let target = site.reveal().observed().next().unwrap();
        let dispatch = route(
            &mut site,
            HostEvent::Intersections {
                entries: vec![IntersectionEntry {
                    node: target,
                    ratio: 1.0,
                }],
            },
        );
        assert_eq!(dispatch.effects, vec![Effect::Unobserve(target)]);
    }
}
