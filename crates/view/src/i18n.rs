//! Static translation table
//!
//! The table is compiled into the binary from `assets/translations.json` and
//! parsed on first use. There is no fallback chain: a key missing in one
//! language does not fall back to English.

use mohajer_core::{Language, SiteError, SiteResult};
use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

const BUILTIN_JSON: &str = include_str!("../assets/translations.json");

static BUILTIN: LazyLock<TranslationTable> = LazyLock::new(|| {
    TranslationTable::from_json(BUILTIN_JSON).unwrap_or_else(|e| {
        tracing::error!("Built-in translation table is invalid: {}", e);
        TranslationTable::default()
    })
});

/// Mapping `language -> key -> text`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationTable {
    languages: BTreeMap<Language, HashMap<String, String>>,
}

impl TranslationTable {
    /// The table shipped with the site
    pub fn builtin() -> &'static TranslationTable {
        &BUILTIN
    }

    /// Parse a table from `{ "en": { "key": "text" }, ... }`
    pub fn from_json(json: &str) -> SiteResult<Self> {
        let languages: BTreeMap<Language, HashMap<String, String>> = serde_json::from_str(json)
            .map_err(|e| SiteError::with_context("Parsing translation table", e.to_string()))?;
        Ok(Self { languages })
    }

    /// Add or replace one entry
    pub fn insert(&mut self, language: Language, key: &str, text: &str) {
        self.languages
            .entry(language)
            .or_default()
            .insert(key.to_string(), text.to_string());
    }

    pub fn contains_language(&self, language: Language) -> bool {
        self.languages.contains_key(&language)
    }

    /// Text for `key` in `language`; empty strings count as missing
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        self.languages
            .get(&language)
            .and_then(|keys| keys.get(key))
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Languages present in the table
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.languages.keys().copied()
    }

    /// Number of keys for `language`
    pub fn key_count(&self, language: Language) -> usize {
        self.languages.get(&language).map_or(0, HashMap::len)
    }

    /// Keys present in `reference` but missing in `language`, sorted
    pub fn missing_keys(&self, reference: Language, language: Language) -> Vec<String> {
        let Some(reference_keys) = self.languages.get(&reference) else {
            return Vec::new();
        };
        let mut missing: Vec<String> = reference_keys
            .keys()
            .filter(|key| self.lookup(language, key).is_none())
            .cloned()
            .collect();
        missing.sort();
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_table_is_complete() {
        let table = TranslationTable::builtin();
        for language in Language::ALL {
            assert!(table.contains_language(language));
            assert!(table.missing_keys(Language::En, language).is_empty());
        }
        assert_eq!(table.lookup(Language::En, "hero_rebar"), Some("Rebar"));
        assert_eq!(table.lookup(Language::Fa, "hero_rebar"), Some("میلگرد"));
    }

    #[test]
    fn test_lookup_missing() {
        let table = TranslationTable::from_json(r#"{ "en": { "a": "A", "empty": "" } }"#).unwrap();
        assert_eq!(table.lookup(Language::En, "a"), Some("A"));
        assert_eq!(table.lookup(Language::En, "b"), None);
        assert_eq!(table.lookup(Language::En, "empty"), None);
        assert_eq!(table.lookup(Language::Fa, "a"), None);
        assert!(!table.contains_language(Language::Fa));
    }

    #[test]
    fn test_missing_keys_report() {
        let mut table = TranslationTable::default();
        table.insert(Language::En, "nav_home", "Home");
        table.insert(Language::En, "nav_about", "About Us");
        table.insert(Language::Ar, "nav_home", "الرئيسية");
        assert_eq!(
            table.missing_keys(Language::En, Language::Ar),
            vec!["nav_about".to_string()]
        );
    }

    #[test]
    fn test_unknown_language_rejected() {
        let err = TranslationTable::from_json(r#"{ "de": { "a": "A" } }"#).unwrap_err();
        assert!(err.to_string().starts_with("Parsing translation table"));
    }
}
