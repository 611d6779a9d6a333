//! Page navigation and header appearance
//!
//! One page container (`#page-<id>.page-content`) is displayed at a time. The
//! header carries `light-bg` whenever a page other than home is shown, and on
//! home only once the viewport has scrolled past the threshold.

use crate::effects::Effect;
use mohajer_core::Page;
use mohajer_dom::{Document, Selector};

pub const PAGE_CLASS: &str = "page-content";
pub const HEADER_CLASS: &str = "site-header";
pub const LIGHT_HEADER_CLASS: &str = "light-bg";
pub const NAV_CONTAINER_CLASS: &str = "nav-links";
pub const NAV_LINK_CLASS: &str = "nav-link";
pub const ACTIVE_CLASS: &str = "active";
pub const PAGE_ATTR: &str = "data-page";
pub const SCROLL_ATTR: &str = "data-scroll";

/// Header appearance as a pure function of page and scroll offset
pub fn header_light_background(page_id: &str, scroll_y: f64, threshold: f64) -> bool {
    page_id != Page::Home.as_str() || scroll_y > threshold
}

/// Tracks the shown page and drives nav highlighting, header and scroll
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationController {
    active_page: String,
    pending_scroll_target: Option<String>,
    threshold: f64,
}

impl NavigationController {
    /// Start from whichever page container the markup displays; home otherwise
    pub fn from_document(doc: &Document, threshold: f64) -> Self {
        let active_page = doc
            .query_all(&Selector::class(PAGE_CLASS))
            .into_iter()
            .find(|&page| doc.style(page, "display") == Some("block"))
            .and_then(|page| doc.attr(page, "id"))
            .and_then(|id| id.strip_prefix("page-"))
            .unwrap_or(Page::Home.as_str())
            .to_string();

        Self {
            active_page,
            pending_scroll_target: None,
            threshold,
        }
    }

    pub fn active_page(&self) -> &str {
        &self.active_page
    }

    /// Scroll target requested by the last navigation, if any
    pub fn pending_scroll_target(&self) -> Option<&str> {
        self.pending_scroll_target.as_deref()
    }

    /// Show `page_id`, update highlighting and header, then scroll
    pub fn switch_page(
        &mut self,
        doc: &mut Document,
        page_id: &str,
        scroll_target: Option<&str>,
    ) -> Vec<Effect> {
        tracing::info!(page = page_id, scroll = ?scroll_target, "Switching page");
        self.active_page = page_id.to_string();
        self.pending_scroll_target = scroll_target.map(str::to_string);

        self.show_page(doc, page_id);
        self.highlight_nav(doc, page_id);
        self.apply_header(doc);

        let target = scroll_target.and_then(|id| doc.element_by_id(id));
        match target {
            Some(node) => vec![Effect::ScrollIntoView(node)],
            None => {
                if let Some(id) = scroll_target {
                    tracing::debug!("Scroll target '{}' not found, resetting to top", id);
                }
                self.on_scroll(doc, 0.0);
                vec![Effect::ScrollToTop]
            }
        }
    }

    /// Scroll listener: only the home page reacts to the offset
    pub fn on_scroll(&self, doc: &mut Document, scroll_y: f64) {
        doc.set_scroll_y(scroll_y);
        let home_shown = doc
            .element_by_id(&Page::Home.container_id())
            .is_some_and(|home| doc.style(home, "display") == Some("block"));
        if home_shown {
            self.set_header(doc, scroll_y > self.threshold);
        }
    }

    fn show_page(&self, doc: &mut Document, page_id: &str) {
        for page in doc.query_all(&Selector::class(PAGE_CLASS)) {
            doc.set_style(page, "display", "none");
        }
        let Some(page) = Page::parse(page_id) else {
            tracing::debug!("Unknown page '{}', all pages hidden", page_id);
            return;
        };
        if let Some(container) = doc.element_by_id(&page.container_id()) {
            doc.set_style(container, "display", "block");
        }
    }

    fn highlight_nav(&self, doc: &mut Document, page_id: &str) {
        let link_selector = Selector::class(NAV_LINK_CLASS);
        let mut links = Vec::new();
        for container in doc.query_all(&Selector::class(NAV_CONTAINER_CLASS)) {
            links.extend(doc.query_within(container, &link_selector));
        }

        for &link in &links {
            doc.remove_class(link, ACTIVE_CLASS);
            if doc.attr(link, PAGE_ATTR) == Some(page_id) && doc.attr(link, SCROLL_ATTR).is_none()
            {
                doc.add_class(link, ACTIVE_CLASS);
            }
        }

        if page_id == Page::Home.as_str() {
            let home_link = links
                .into_iter()
                .find(|&link| doc.attr(link, PAGE_ATTR) == Some(Page::Home.as_str()));
            if let Some(link) = home_link {
                doc.add_class(link, ACTIVE_CLASS);
            }
        }
    }

    fn apply_header(&self, doc: &mut Document) {
        let light = header_light_background(&self.active_page, doc.scroll_y(), self.threshold);
        self.set_header(doc, light);
    }

    fn set_header(&self, doc: &mut Document, light: bool) {
        if let Some(header) = doc.query_first(&Selector::class(HEADER_CLASS)) {
            doc.set_class(header, LIGHT_HEADER_CLASS, light);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
