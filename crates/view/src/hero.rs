//! Hero product switcher
//!
//! Selecting a product swaps the image at once and fades the details panel
//! out. The product name is swapped when the host reports the transition
//! delay has elapsed, after which the panel fades back in. Each selection
//! starts a new generation; a completion carrying an older generation belongs
//! to a superseded selection and is dropped.

use crate::effects::PendingSwap;
use crate::i18n::TranslationTable;
use crate::language::LANG_KEY_ATTR;
use crate::navigation::ACTIVE_CLASS;
use mohajer_core::{Language, ProductKey};
use mohajer_dom::{Document, NodeId, Selector};
use std::time::Duration;

pub const HERO_SECTION_ID: &str = "new-hero-section";
pub const SELECTOR_CONTAINER_CLASS: &str = "product-selector";
pub const IMAGE_CLASS: &str = "product-image";
pub const DETAILS_CLASS: &str = "product-details";
pub const NAME_ID: &str = "product-name";
pub const PRODUCT_ATTR: &str = "data-product";

const FADED_OUT: (&str, &str) = ("0", "translate(-50%, -10%)");
const FADED_IN: (&str, &str) = ("1", "translate(-50%, -20%)");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeroPhase {
    #[default]
    Idle,
    /// Details hidden, waiting for the swap of `product`
    FadingOut { product: ProductKey, generation: u64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroSwitcher {
    phase: HeroPhase,
    generation: u64,
    delay: Duration,
    active: Option<ProductKey>,
}

impl HeroSwitcher {
    pub fn new(delay: Duration) -> Self {
        Self {
            phase: HeroPhase::Idle,
            generation: 0,
            delay,
            active: None,
        }
    }

    /// Pick up the selector the markup marks active
    pub fn from_document(doc: &Document, delay: Duration) -> Self {
        let mut switcher = Self::new(delay);
        switcher.active = selectors(doc)
            .into_iter()
            .find(|&s| doc.has_class(s, ACTIVE_CLASS))
            .and_then(|s| doc.attr(s, PRODUCT_ATTR))
            .and_then(ProductKey::parse);
        switcher
    }

    pub fn phase(&self) -> HeroPhase {
        self.phase
    }

    /// Product whose image is currently shown
    pub fn active_product(&self) -> Option<ProductKey> {
        self.active
    }

    /// Click on a selector heading.
    ///
    /// Re-clicking the active selector does nothing. Otherwise the clicked
    /// selector becomes the only active one and the display update starts.
    pub fn on_selector_click(&mut self, doc: &mut Document, selector: NodeId) -> Option<PendingSwap> {
        if doc.has_class(selector, ACTIVE_CLASS) {
            return None;
        }
        for other in selectors(doc) {
            doc.remove_class(other, ACTIVE_CLASS);
        }
        doc.add_class(selector, ACTIVE_CLASS);

        let key = doc.attr(selector, PRODUCT_ATTR).unwrap_or_default().to_string();
        self.update_display(doc, &key)
    }

    /// First phase: fade the details out and switch the image
    pub fn update_display(&mut self, doc: &mut Document, key: &str) -> Option<PendingSwap> {
        let Some(product) = ProductKey::parse(key) else {
            tracing::debug!("Unknown hero product '{}'", key);
            return None;
        };
        let section = doc.element_by_id(HERO_SECTION_ID)?;

        if let Some(details) = doc.query_within(section, &Selector::class(DETAILS_CLASS)).first() {
            doc.set_style(*details, "opacity", FADED_OUT.0);
            doc.set_style(*details, "transform", FADED_OUT.1);
        }
        let image_id = product.image_id();
        for image in doc.query_within(section, &Selector::class(IMAGE_CLASS)) {
            let shown = doc.attr(image, "id") == Some(image_id.as_str());
            doc.set_class(image, ACTIVE_CLASS, shown);
        }

        if let HeroPhase::FadingOut { product: pending, .. } = self.phase {
            tracing::debug!("Hero swap to {} superseded by {}", pending, product);
        }
        self.generation += 1;
        self.phase = HeroPhase::FadingOut {
            product,
            generation: self.generation,
        };
        self.active = Some(product);

        Some(PendingSwap {
            product,
            generation: self.generation,
            delay: self.delay,
        })
    }

    /// Second phase: swap the name and fade the details back in.
    ///
    /// Returns false when `pending` was superseded or nothing is pending.
    pub fn complete_swap(
        &mut self,
        doc: &mut Document,
        table: &TranslationTable,
        language: Language,
        pending: PendingSwap,
    ) -> bool {
        let current = match self.phase {
            HeroPhase::FadingOut {
                product,
                generation,
            } if generation == pending.generation => product,
            _ => {
                tracing::debug!(
                    "Dropping stale hero swap to {} (generation {})",
                    pending.product,
                    pending.generation
                );
                return false;
            }
        };
        self.phase = HeroPhase::Idle;

        let Some(section) = doc.element_by_id(HERO_SECTION_ID) else {
            return false;
        };
        if let Some(name) = doc
            .query_within(section, &Selector::id(NAME_ID))
            .first()
            .copied()
        {
            if let Some(text) = table.lookup(language, current.name_key()) {
                doc.set_text(name, text);
            }
            doc.set_attr(name, LANG_KEY_ATTR, current.name_key());
        }
        if let Some(details) = doc.query_within(section, &Selector::class(DETAILS_CLASS)).first() {
            doc.set_style(*details, "opacity", FADED_IN.0);
            doc.set_style(*details, "transform", FADED_IN.1);
        }
        tracing::debug!("Hero now shows {}", current);
        true
    }
}

/// Selector headings inside the hero section
pub fn selectors(doc: &Document) -> Vec<NodeId> {
    let Some(section) = doc.element_by_id(HERO_SECTION_ID) else {
        return Vec::new();
    };
    doc.query_within(section, &Selector::tag("h2"))
        .into_iter()
        .filter(|&h| {
            doc.closest(h, &Selector::class(SELECTOR_CONTAINER_CLASS))
                .is_some_and(|c| doc.contains(section, c))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mohajer_dom::El;
    use pretty_assertions::assert_eq;

    const DELAY: Duration = Duration::from_millis(300);

    fn hero_doc() -> Document {
        let mut doc = Document::new();
        let selector = |key: ProductKey, active: bool| {
            let el = El::new("h2")
                .id(&format!("select-{}", key))
                .attr(PRODUCT_ATTR, key.as_str())
                .i18n(key.selector_key(), "");
            if active { el.class(ACTIVE_CLASS) } else { el }
        };
        let image = |key: ProductKey, active: bool| {
            let el = El::new("img").id(&key.image_id()).class(IMAGE_CLASS);
            if active { el.class(ACTIVE_CLASS) } else { el }
        };
        doc.append(
            doc.body(),
            El::new("section")
                .id(HERO_SECTION_ID)
                .child(
                    El::new("div")
                        .class(SELECTOR_CONTAINER_CLASS)
                        .child(selector(ProductKey::Ingot, true))
                        .child(selector(ProductKey::Rebar, false))
                        .child(selector(ProductKey::Slab, false)),
                )
                .child(image(ProductKey::Ingot, true))
                .child(image(ProductKey::Rebar, false))
                .child(image(ProductKey::Slab, false))
                .child(
                    El::new("div")
                        .class(DETAILS_CLASS)
                        .child(El::new("h1").id(NAME_ID).i18n("hero_ingot", "Iron Ingot")),
                ),
        );
        doc
    }

    fn node(doc: &Document, id: &str) -> NodeId {
        doc.element_by_id(id).unwrap()
    }

    fn active_images(doc: &Document) -> Vec<String> {
        doc.query_all(&Selector::class(IMAGE_CLASS).with_class(ACTIVE_CLASS))
            .into_iter()
            .map(|n| doc.attr(n, "id").unwrap_or_default().to_string())
            .collect()
    }

    fn details_style(doc: &Document) -> (String, String) {
        let details = doc.query_first(&Selector::class(DETAILS_CLASS)).unwrap();
        (
            doc.style(details, "opacity").unwrap_or_default().to_string(),
            doc.style(details, "transform").unwrap_or_default().to_string(),
        )
    }

    fn name(doc: &Document) -> String {
        doc.text(node(doc, NAME_ID)).unwrap_or_default().to_string()
    }

    #[test]
    fn test_from_document_reads_active_selector() {
        let doc = hero_doc();
        let hero = HeroSwitcher::from_document(&doc, DELAY);
        assert_eq!(hero.active_product(), Some(ProductKey::Ingot));
        assert_eq!(hero.phase(), HeroPhase::Idle);
    }

    #[test]
    fn test_scenario_rebar_selection() {
        let mut doc = hero_doc();
        let table = TranslationTable::builtin();
        let mut hero = HeroSwitcher::from_document(&doc, DELAY);

        let rebar = node(&doc, "select-rebar");
        let pending = hero.on_selector_click(&mut doc, rebar).unwrap();
        assert_eq!(pending.product, ProductKey::Rebar);
        assert_eq!(pending.delay, DELAY);

        // Image switches immediately, name waits for the delay
        assert_eq!(active_images(&doc), vec!["rebar-image"]);
        assert_eq!(name(&doc), "Iron Ingot");
        assert_eq!(
            details_style(&doc),
            ("0".to_string(), "translate(-50%, -10%)".to_string())
        );

        assert!(hero.complete_swap(&mut doc, table, Language::En, pending));
        assert_eq!(name(&doc), "Rebar");
        assert_eq!(doc.attr(node(&doc, NAME_ID), LANG_KEY_ATTR), Some("hero_rebar"));
        assert_eq!(
            details_style(&doc),
            ("1".to_string(), "translate(-50%, -20%)".to_string())
        );
        assert_eq!(hero.phase(), HeroPhase::Idle);
    }

    #[test]
    fn test_swap_uses_given_language() {
        let mut doc = hero_doc();
        let mut hero = HeroSwitcher::from_document(&doc, DELAY);
        let slab = node(&doc, "select-slab");
        let pending = hero.on_selector_click(&mut doc, slab).unwrap();
        hero.complete_swap(&mut doc, TranslationTable::builtin(), Language::Fa, pending);
        assert_eq!(name(&doc), "اسلب");
    }

    #[test]
    fn test_active_selector_click_is_noop() {
        let mut doc = hero_doc();
        let mut hero = HeroSwitcher::from_document(&doc, DELAY);
        let ingot = node(&doc, "select-ingot");
        assert_eq!(hero.on_selector_click(&mut doc, ingot), None);
        assert_eq!(hero.phase(), HeroPhase::Idle);
        assert_eq!(details_style(&doc), (String::new(), String::new()));
    }

    #[test]
    fn test_superseded_swap_is_dropped() {
        let mut doc = hero_doc();
        let table = TranslationTable::builtin();
        let mut hero = HeroSwitcher::from_document(&doc, DELAY);

        let rebar = node(&doc, "select-rebar");
        let slab = node(&doc, "select-slab");
        let first = hero.on_selector_click(&mut doc, rebar).unwrap();
        let second = hero.on_selector_click(&mut doc, slab).unwrap();
        assert!(second.generation > first.generation);

        assert!(!hero.complete_swap(&mut doc, table, Language::En, first));
        assert_eq!(name(&doc), "Iron Ingot");
        assert!(hero.complete_swap(&mut doc, table, Language::En, second));
        assert_eq!(name(&doc), "Slab");

        // A completion can only be applied once
        assert!(!hero.complete_swap(&mut doc, table, Language::En, second));
    }

    #[test]
    fn test_unknown_product_is_noop() {
        let mut doc = hero_doc();
        let mut hero = HeroSwitcher::from_document(&doc, DELAY);
        assert_eq!(hero.update_display(&mut doc, "coil"), None);
        assert_eq!(active_images(&doc), vec!["ingot-image"]);
    }

    #[test]
    fn test_exactly_one_selector_active() {
        let mut doc = hero_doc();
        let mut hero = HeroSwitcher::from_document(&doc, DELAY);
        for id in ["select-slab", "select-rebar", "select-ingot"] {
            let selector = node(&doc, id);
            hero.on_selector_click(&mut doc, selector);
            let active: Vec<NodeId> = selectors(&doc)
                .into_iter()
                .filter(|&s| doc.has_class(s, ACTIVE_CLASS))
                .collect();
            assert_eq!(active, vec![selector]);
        }
    }
}
