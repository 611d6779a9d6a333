//! Host effects
//!
//! Carries out the work `Site` hands back: scrolling and media control run as
//! small scripts in the webview, the hero swap waits on a tokio timer.

use crate::state::SITE;
use crate::view::NODE_ATTR;
use dioxus::prelude::*;
use mohajer_dom::NodeId;
use mohajer_view::{Effect, PendingSwap};

fn element_js(node: NodeId) -> String {
    format!(
        r#"document.querySelector('[{}="{}"]')"#,
        NODE_ATTR,
        node.index()
    )
}

/// Script performing `effect`, for effects that run in the webview
pub fn effect_script(effect: &Effect) -> Option<String> {
    let script = match effect {
        Effect::ScrollToTop => "window.scrollTo(0, 0);".to_string(),
        Effect::ScrollIntoView(node) => format!(
            "{}?.scrollIntoView({{ behavior: 'smooth' }});",
            element_js(*node)
        ),
        Effect::PlayMedia(node) => format!("{}?.play();", element_js(*node)),
        Effect::PauseMedia(node) => format!(
            "const media = {}; if (media) {{ media.pause(); media.currentTime = 0; }}",
            element_js(*node)
        ),
        Effect::Unobserve(node) => format!(
            "const el = {}; if (el && window.mohajerObserver) {{ window.mohajerObserver.unobserve(el); }}",
            element_js(*node)
        ),
        Effect::ScheduleHeroSwap(_) => return None,
    };
    Some(script)
}

/// Wait out the hero transition
pub async fn wait_for_swap(pending: PendingSwap) -> PendingSwap {
    tokio::time::sleep(pending.delay).await;
    pending
}

/// Run effects in order. Must be called from within the Dioxus runtime.
pub fn run_effects(effects: Vec<Effect>) {
    for effect in effects {
        if let Effect::ScheduleHeroSwap(pending) = effect {
            spawn(async move {
                let pending = wait_for_swap(pending).await;
                if !SITE.write().site.complete_hero_swap(pending) {
                    tracing::debug!("Hero swap {} superseded", pending.generation);
                }
            });
            continue;
        }
        if let Some(script) = effect_script(&effect) {
            document::eval(&script);
        }
    }
}
