//! Display language and the language menu
//!
//! Every element tagged with `data-lang-key` has its text replaced from the
//! translation table. Keys missing for the chosen language leave the element's
//! current text as it is.

use crate::i18n::TranslationTable;
use crate::store::Preferences;
use mohajer_core::Language;
use mohajer_dom::{Document, NodeId, Selector};

pub const LANG_KEY_ATTR: &str = "data-lang-key";
pub const LANG_OPTION_ATTR: &str = "data-lang";
pub const SWITCHER_CLASS: &str = "language-switcher";
pub const BUTTON_CLASS: &str = "language-btn";
pub const OPEN_CLASS: &str = "open";
pub const INDICATOR_ID: &str = "current-lang";

/// Direction, `lang` attribute, translated text and indicator for `language`
pub fn apply_language(doc: &mut Document, table: &TranslationTable, language: Language) {
    let root = doc.root();
    doc.set_attr(root, "dir", language.direction().as_str());
    doc.set_attr(root, "lang", language.code());

    let mut translated = 0;
    for node in doc.query_all(&Selector::attr(LANG_KEY_ATTR)) {
        let Some(key) = doc.attr(node, LANG_KEY_ATTR) else {
            continue;
        };
        if let Some(text) = table.lookup(language, key) {
            let text = text.to_string();
            doc.set_text(node, &text);
            translated += 1;
        }
    }

    if let Some(indicator) = doc.element_by_id(INDICATOR_ID) {
        doc.set_text(indicator, &language.indicator());
    }
    tracing::debug!("Applied language {} ({} elements translated)", language, translated);
}

/// User choice: validate `code` against the table, apply and persist it.
///
/// Codes that are not a language of the table are ignored.
pub fn set_language(
    doc: &mut Document,
    table: &TranslationTable,
    prefs: &mut Preferences,
    code: &str,
) -> Option<Language> {
    let language = Language::parse(code).filter(|&l| table.contains_language(l));
    let Some(language) = language else {
        tracing::warn!("Ignoring unsupported language '{}'", code);
        return None;
    };
    apply_language(doc, table, language);
    prefs.save_language(language);
    tracing::info!("Language changed to {}", language);
    Some(language)
}

/// Startup: stored language (or the default) applied without rewriting it
pub fn init_language(
    doc: &mut Document,
    table: &TranslationTable,
    prefs: &mut Preferences,
) -> Language {
    let language = prefs.load_language();
    apply_language(doc, table, language);
    language
}

// ============================================================================
// Menu
// ============================================================================

fn switcher(doc: &Document) -> Option<NodeId> {
    doc.query_first(&Selector::class(SWITCHER_CLASS))
}

pub fn is_menu_open(doc: &Document) -> bool {
    switcher(doc).is_some_and(|s| doc.has_class(s, OPEN_CLASS))
}

fn set_menu(doc: &mut Document, open: bool) {
    let Some(menu) = switcher(doc) else {
        return;
    };
    doc.set_class(menu, OPEN_CLASS, open);
    if let Some(button) = doc.query_first(&Selector::class(BUTTON_CLASS)) {
        doc.set_attr(button, "aria-expanded", if open { "true" } else { "false" });
    }
}

/// Flip the menu; returns whether it is open afterwards
pub fn toggle_menu(doc: &mut Document) -> bool {
    let open = !is_menu_open(doc);
    set_menu(doc, open);
    open
}

pub fn close_menu(doc: &mut Document) {
    set_menu(doc, false);
}

/// Document-level click: close an open menu when the click landed outside it
pub fn on_document_click(doc: &mut Document, target: NodeId) {
    if !is_menu_open(doc) {
        return;
    }
    let inside = switcher(doc).is_some_and(|menu| doc.contains(menu, target));
    if !inside {
        close_menu(doc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use mohajer_core::{LANGUAGE_KEY, Theme};
    use mohajer_dom::El;
    use pretty_assertions::assert_eq;

    fn table() -> TranslationTable {
        TranslationTable::from_json(
            r#"{
                "en": { "nav_home": "Home", "nav_about": "About Us" },
                "fa": { "nav_home": "خانه" }
            }"#,
        )
        .unwrap()
    }

    fn doc() -> Document {
        let mut doc = Document::new();
        doc.append(
            doc.body(),
            El::new("div")
                .class(SWITCHER_CLASS)
                .child(
                    El::new("button")
                        .class(BUTTON_CLASS)
                        .attr("aria-expanded", "false")
                        .child(El::new("span").id(INDICATOR_ID).text("EN")),
                )
                .child(El::new("a").id("opt-fa").attr(LANG_OPTION_ATTR, "fa")),
        );
        doc.append(doc.body(), El::new("a").id("home").i18n("nav_home", "Home"));
        doc.append(doc.body(), El::new("a").id("about").i18n("nav_about", "About Us"));
        doc.append(doc.body(), El::new("p").id("outside"));
        doc
    }

    fn prefs(store: MemoryStore) -> Preferences {
        Preferences::new(Box::new(store), Theme::Light, Language::En)
    }

    fn text(doc: &Document, id: &str) -> String {
        doc.text(doc.element_by_id(id).unwrap()).unwrap_or_default().to_string()
    }

    fn aria(doc: &Document) -> String {
        let button = doc.query_first(&Selector::class(BUTTON_CLASS)).unwrap();
        doc.attr(button, "aria-expanded").unwrap_or_default().to_string()
    }

    #[test]
    fn test_scenario_persian_sets_direction_and_indicator() {
        let mut doc = doc();
        let mut prefs = prefs(MemoryStore::new());
        assert_eq!(set_language(&mut doc, &table(), &mut prefs, "fa"), Some(Language::Fa));

        let root = doc.root();
        assert_eq!(doc.attr(root, "dir"), Some("rtl"));
        assert_eq!(doc.attr(root, "lang"), Some("fa"));
        assert_eq!(text(&doc, INDICATOR_ID), "FA");
        assert_eq!(
            prefs.store().get(LANGUAGE_KEY).unwrap().as_deref(),
            Some("fa")
        );
    }

    #[test]
    fn test_missing_keys_keep_prior_text() {
        let mut doc = doc();
        let mut prefs = prefs(MemoryStore::new());
        set_language(&mut doc, &table(), &mut prefs, "fa");
        assert_eq!(text(&doc, "home"), "خانه");
        assert_eq!(text(&doc, "about"), "About Us");

        set_language(&mut doc, &table(), &mut prefs, "en");
        assert_eq!(text(&doc, "home"), "Home");
        assert_eq!(doc.attr(doc.root(), "dir"), Some("ltr"));
    }

    #[test]
    fn test_language_outside_table_ignored() {
        let mut doc = doc();
        let mut prefs = prefs(MemoryStore::new());
        assert_eq!(set_language(&mut doc, &table(), &mut prefs, "ar"), None);
        assert_eq!(set_language(&mut doc, &table(), &mut prefs, "de"), None);
        assert_eq!(doc.attr(doc.root(), "lang"), None);
        assert_eq!(prefs.store().get(LANGUAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_init_uses_stored_language() {
        let mut doc = doc();
        let mut prefs = prefs(MemoryStore::new().with(LANGUAGE_KEY, "fa"));
        assert_eq!(init_language(&mut doc, &table(), &mut prefs), Language::Fa);
        assert_eq!(text(&doc, "home"), "خانه");
    }

    #[test]
    fn test_menu_toggle_keeps_aria_in_lockstep() {
        let mut doc = doc();
        assert!(toggle_menu(&mut doc));
        assert_eq!(aria(&doc), "true");
        assert!(!toggle_menu(&mut doc));
        assert_eq!(aria(&doc), "false");
    }

    #[test]
    fn test_outside_click_closes_menu() {
        let mut doc = doc();
        toggle_menu(&mut doc);

        let option = doc.element_by_id("opt-fa").unwrap();
        on_document_click(&mut doc, option);
        assert!(is_menu_open(&doc));

        let outside = doc.element_by_id("outside").unwrap();
        on_document_click(&mut doc, outside);
        assert!(!is_menu_open(&doc));
        assert_eq!(aria(&doc), "false");
    }
}
