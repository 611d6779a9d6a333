//! Preference storage
//!
//! Two `PreferenceStore` implementations (in-memory and a JSON file) and the
//! `Preferences` mirror the controllers talk to. The mirror reads each key at
//! most once, normalizes unknown values to the configured defaults and keeps
//! working in memory when the backing store fails.

use mohajer_core::{
    LANGUAGE_KEY, Language, PreferenceStore, SiteError, SiteResult, THEME_KEY, Theme,
};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

// ============================================================================
// MemoryStore
// ============================================================================

/// Volatile store, used in tests and as the fallback when no file is usable
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, as if written by an earlier session
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> SiteResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> SiteResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory store".to_string()
    }
}

// ============================================================================
// FileStore
// ============================================================================

/// Store backed by a flat JSON object on disk
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw file contents; `None` when the file does not exist yet
    fn read_file(&self) -> std::io::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => Ok(Some(json)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> SiteResult<Option<String>> {
        let Some(json) = self
            .read_file()
            .map_err(|e| SiteError::storage_read(key, e.to_string()))?
        else {
            return Ok(None);
        };
        let mut values: BTreeMap<String, String> =
            serde_json::from_str(&json).map_err(|e| SiteError::storage_read(key, e.to_string()))?;
        Ok(values.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> SiteResult<()> {
        let existing = self
            .read_file()
            .map_err(|e| SiteError::storage_write(key, e.to_string()))?;
        // A corrupt file is replaced rather than blocking every future write
        let mut values: BTreeMap<String, String> = existing
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default();
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| SiteError::storage_write(key, e.to_string()))?;
            }
        }
        let json = serde_json::to_string_pretty(&values)?;
        std::fs::write(&self.path, json).map_err(|e| SiteError::storage_write(key, e.to_string()))
    }

    fn describe(&self) -> String {
        format!("file store at {}", self.path.display())
    }
}

// ============================================================================
// Preferences
// ============================================================================

/// In-memory mirror of the persisted theme and language
pub struct Preferences {
    store: Box<dyn PreferenceStore>,
    theme: Theme,
    language: Language,
    default_theme: Theme,
    default_language: Language,
}

impl std::fmt::Debug for Preferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preferences")
            .field("store", &self.store.describe())
            .field("theme", &self.theme)
            .field("language", &self.language)
            .finish()
    }
}

impl Preferences {
    pub fn new(
        store: Box<dyn PreferenceStore>,
        default_theme: Theme,
        default_language: Language,
    ) -> Self {
        Self {
            store,
            theme: default_theme,
            language: default_language,
            default_theme,
            default_language,
        }
    }

    /// Read the stored theme once; absent, unknown or unreadable → default
    pub fn load_theme(&mut self) -> Theme {
        self.theme = match self.read(THEME_KEY) {
            Some(raw) => Theme::parse(&raw).unwrap_or_else(|| {
                tracing::warn!("Ignoring unknown stored theme '{}'", raw);
                self.default_theme
            }),
            None => self.default_theme,
        };
        self.theme
    }

    /// Read the stored language once; absent, unknown or unreadable → default
    pub fn load_language(&mut self) -> Language {
        self.language = match self.read(LANGUAGE_KEY) {
            Some(raw) => Language::parse(&raw).unwrap_or_else(|| {
                tracing::warn!("Ignoring unknown stored language '{}'", raw);
                self.default_language
            }),
            None => self.default_language,
        };
        self.language
    }

    pub fn save_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.write(THEME_KEY, theme.as_str());
    }

    pub fn save_language(&mut self, language: Language) {
        self.language = language;
        self.write(LANGUAGE_KEY, language.code());
    }

    /// Last persisted (or loaded) theme
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Last persisted (or loaded) language
    pub fn language(&self) -> Language {
        self.language
    }

    /// Direct access to the backing store
    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("{} unavailable, using default: {}", self.store.describe(), e);
                None
            }
        }
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            tracing::warn!(
                "Could not persist {}={} to {}, keeping it in memory: {}",
                key,
                value,
                self.store.describe(),
                e
            );
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Store whose every operation fails
    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, key: &str) -> SiteResult<Option<String>> {
            Err(SiteError::storage_read(key, "quota exceeded"))
        }

        fn set(&mut self, key: &str, _value: &str) -> SiteResult<()> {
            Err(SiteError::storage_write(key, "quota exceeded"))
        }
    }

    fn prefs(store: impl PreferenceStore + 'static) -> Preferences {
        Preferences::new(Box::new(store), Theme::Light, Language::En)
    }

    #[test]
    fn test_defaults_when_absent() {
        let mut p = prefs(MemoryStore::new());
        assert_eq!(p.load_theme(), Theme::Light);
        assert_eq!(p.load_language(), Language::En);
    }

    #[test]
    fn test_loads_stored_values() {
        let mut p = prefs(
            MemoryStore::new()
                .with(THEME_KEY, "dark")
                .with(LANGUAGE_KEY, "ar"),
        );
        assert_eq!(p.load_theme(), Theme::Dark);
        assert_eq!(p.load_language(), Language::Ar);
    }

    #[test]
    fn test_unknown_values_normalize_to_default() {
        let mut p = prefs(
            MemoryStore::new()
                .with(THEME_KEY, "sepia")
                .with(LANGUAGE_KEY, "EN"),
        );
        assert_eq!(p.load_theme(), Theme::Light);
        assert_eq!(p.load_language(), Language::En);
    }

    #[test]
    fn test_broken_store_degrades_to_memory() {
        let mut p = prefs(BrokenStore);
        assert_eq!(p.load_theme(), Theme::Light);
        p.save_theme(Theme::Dark);
        p.save_language(Language::Fa);
        assert_eq!(p.theme(), Theme::Dark);
        assert_eq!(p.language(), Language::Fa);
    }

    #[test]
    fn test_save_writes_through() {
        let mut p = prefs(MemoryStore::new());
        p.save_language(Language::Fa);
        assert_eq!(
            p.store().get(LANGUAGE_KEY).unwrap(),
            Some("fa".to_string())
        );
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let mut store = FileStore::new(&path);
        assert_eq!(store.get(THEME_KEY).unwrap(), None);
        store.set(THEME_KEY, "dark").unwrap();
        store.set(LANGUAGE_KEY, "fa").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get(THEME_KEY).unwrap(), Some("dark".to_string()));
        assert_eq!(reopened.get(LANGUAGE_KEY).unwrap(), Some("fa".to_string()));
    }

    #[test]
    fn test_file_store_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "not json").unwrap();

        let mut store = FileStore::new(&path);
        let err = store.get(THEME_KEY).unwrap_err();
        assert!(err.is_storage());

        store.set(THEME_KEY, "light").unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap(), Some("light".to_string()));
    }

    #[test]
    fn test_file_store_unreadable_file_is_not_overwritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::create_dir(&path).unwrap();

        let mut store = FileStore::new(&path);
        assert!(store.get(THEME_KEY).unwrap_err().is_storage());
        let err = store.set(THEME_KEY, "dark").unwrap_err();
        assert!(matches!(err, SiteError::StorageWrite { .. }));
        assert!(path.is_dir());
    }

    #[test]
    fn test_file_store_keeps_other_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, r#"{ "language": "ar" }"#).unwrap();

        let mut store = FileStore::new(&path);
        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(store.get(LANGUAGE_KEY).unwrap(), Some("ar".to_string()));
        assert_eq!(store.get(THEME_KEY).unwrap(), Some("dark".to_string()));
    }
}
