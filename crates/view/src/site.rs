//! The site: document plus every controller
//!
//! `Site` is what a host talks to. It forwards input events to the
//! controllers, keeps the document as the single source of truth and hands
//! back the effects the host has to carry out.

use crate::cards;
use crate::config::SiteConfig;
use crate::dispatch::{Control, resolve_control};
use crate::effects::{Dispatch, Effect, PendingSwap};
use crate::hero::HeroSwitcher;
use crate::i18n::TranslationTable;
use crate::language;
use crate::markup;
use crate::modal;
use crate::navigation::NavigationController;
use crate::reveal::{IntersectionEntry, RevealAnimator};
use crate::store::{FileStore, MemoryStore, Preferences};
use crate::tabs;
use crate::theme;
use mohajer_core::PreferenceStore;
use mohajer_dom::{Document, NodeId};

pub const ESCAPE_KEY: &str = "Escape";

#[derive(Debug)]
pub struct Site {
    doc: Document,
    config: SiteConfig,
    prefs: Preferences,
    table: TranslationTable,
    nav: NavigationController,
    reveal: RevealAnimator,
    hero: HeroSwitcher,
}

impl Site {
    pub fn new(
        doc: Document,
        config: SiteConfig,
        prefs: Preferences,
        table: TranslationTable,
    ) -> Self {
        let nav = NavigationController::from_document(&doc, config.header_threshold_px);
        let reveal = RevealAnimator::new(config.reveal_threshold);
        let hero = HeroSwitcher::from_document(&doc, config.hero_transition());
        Self {
            doc,
            config,
            prefs,
            table,
            nav,
            reveal,
            hero,
        }
    }

    /// The company site with the built-in translations and the configured store
    pub fn from_config(config: SiteConfig) -> Self {
        let store = open_store(&config);
        tracing::info!("Preferences backed by {}", store.describe());
        let prefs = Preferences::new(store, config.default_theme, config.default_language);
        Self::new(
            markup::site_document(),
            config,
            prefs,
            TranslationTable::builtin().clone(),
        )
    }

    /// Apply stored preferences and start observing reveal targets.
    ///
    /// Returns the nodes the host must watch for intersections.
    pub fn startup(&mut self) -> Vec<NodeId> {
        let theme = theme::init_theme(&mut self.doc, &mut self.prefs);
        tracing::debug!("Startup: theme {}", theme);

        let observed = self.reveal.observe_all(&self.doc);
        tracing::debug!("Startup: {} reveal targets", observed.len());

        let language = language::init_language(&mut self.doc, &self.table, &mut self.prefs);
        tracing::debug!("Startup: language {}", language);

        self.hero = HeroSwitcher::from_document(&self.doc, self.config.hero_transition());
        tracing::debug!("Startup: hero shows {:?}", self.hero.active_product());

        tracing::info!(
            "Site ready on page '{}' ({} theme, {})",
            self.nav.active_page(),
            theme,
            language
        );
        observed
    }

    /// A click on `target`
    pub fn click(&mut self, target: NodeId) -> Dispatch {
        let control = resolve_control(&self.doc, target);
        let mut dispatch = Dispatch {
            prevent_default: control.as_ref().is_some_and(Control::prevents_default),
            effects: Vec::new(),
        };

        match control {
            Some(Control::NavLink { page, scroll }) => {
                dispatch.extend(self.nav.switch_page(&mut self.doc, &page, scroll.as_deref()));
            }
            Some(Control::LanguageOption(code)) => {
                language::set_language(&mut self.doc, &self.table, &mut self.prefs, &code);
                language::close_menu(&mut self.doc);
            }
            Some(Control::LanguageToggle) => {
                language::toggle_menu(&mut self.doc);
            }
            Some(Control::HeroSelector(selector)) => {
                if let Some(pending) = self.hero.on_selector_click(&mut self.doc, selector) {
                    dispatch.push(Effect::ScheduleHeroSwap(pending));
                }
            }
            Some(Control::OpenModal) => dispatch.extend(modal::open_modal(&mut self.doc)),
            Some(Control::CloseModal) | Some(Control::ModalBackdrop) => {
                dispatch.extend(modal::close_modal(&mut self.doc));
            }
            Some(Control::DeptTab { container, tab }) => {
                tabs::select_tab(&mut self.doc, container, tab);
            }
            Some(Control::Card(card)) => {
                cards::flip_card(&mut self.doc, card, target);
            }
            None => {}
        }

        language::on_document_click(&mut self.doc, target);
        dispatch
    }

    /// A checkbox changed state
    pub fn change(&mut self, target: NodeId, checked: bool) -> Dispatch {
        if self.doc.matches(target, &theme::toggle_selector()) {
            theme::on_toggle_change(&mut self.doc, &mut self.prefs, target, checked);
        } else {
            self.doc.set_checked(target, checked);
        }
        Dispatch::none()
    }

    /// A key press anywhere in the document
    pub fn key(&mut self, key: &str) -> Dispatch {
        let mut dispatch = Dispatch::none();
        if key == ESCAPE_KEY {
            dispatch.extend(modal::on_escape(&mut self.doc));
        }
        dispatch
    }

    /// The viewport scrolled to `scroll_y`
    pub fn scroll(&mut self, scroll_y: f64) {
        self.nav.on_scroll(&mut self.doc, scroll_y);
    }

    /// A batch of intersection reports
    pub fn intersections(&mut self, entries: &[IntersectionEntry]) -> Dispatch {
        let mut dispatch = Dispatch::none();
        dispatch.extend(self.reveal.on_intersections(&mut self.doc, entries));
        dispatch
    }

    /// The hero transition delay elapsed; stale swaps are ignored
    pub fn complete_hero_swap(&mut self, pending: PendingSwap) -> bool {
        self.hero
            .complete_swap(&mut self.doc, &self.table, self.prefs.language(), pending)
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.nav
    }

    pub fn hero(&self) -> &HeroSwitcher {
        &self.hero
    }

    pub fn reveal(&self) -> &RevealAnimator {
        &self.reveal
    }
}

fn open_store(config: &SiteConfig) -> Box<dyn PreferenceStore> {
    match config.preferences_path() {
        Some(path) => Box::new(FileStore::new(path)),
        None => {
            tracing::warn!("No data directory available, preferences will not persist");
            Box::new(MemoryStore::new())
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
