//! Application state
//!
//! The whole site lives in one global signal. Every rendered element reads
//! it and every event handler writes through it, so each handled event
//! re-renders the whole document tree.

use crate::view::NodeView;
use dioxus::prelude::*;
use mohajer_dom::NodeId;
use mohajer_view::{Site, SiteConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Site plus the host-side bookkeeping
#[derive(Debug)]
pub struct SiteState {
    pub site: Site,
    /// Reveal targets the bridge has to observe
    pub observed: Vec<NodeId>,
}

impl SiteState {
    /// Build the site from the launch configuration and run its startup
    pub fn new() -> Self {
        let config = CONFIG.get().cloned().unwrap_or_default();
        Self::with_site(Site::from_config(config))
    }

    pub fn with_site(mut site: Site) -> Self {
        let observed = site.startup();
        Self { site, observed }
    }

    pub fn view(&self, node: NodeId) -> Option<NodeView> {
        NodeView::from_document(self.site.document(), node)
    }

    pub fn root_view(&self) -> Option<NodeView> {
        NodeView::page_root(self.site.document())
    }
}

impl Default for SiteState {
    fn default() -> Self {
        Self::new()
    }
}

/// Global site state
pub static SITE: GlobalSignal<SiteState> = Signal::global(SiteState::new);

/// Record the configuration used when the site state is first built.
/// Call once, before launching.
pub fn init_site_state(config: SiteConfig) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("Site state already configured, keeping the first configuration");
    }
}
