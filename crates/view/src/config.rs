//! Site configuration
//!
//! Tunables of the view layer, read from `mohajer-site.toml` when present.
//! Every field has a default, so an empty or partial file is valid.

use mohajer_core::{Language, SiteError, SiteResult, Theme};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "mohajer-site.toml";

/// Directory name under the platform data dir holding preferences
pub const APP_DIR_NAME: &str = "mohajer-site";

/// View layer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Scroll offset past which the home header switches to the light background
    pub header_threshold_px: f64,
    /// Fraction of an element that must be visible before it is revealed
    pub reveal_threshold: f64,
    /// Delay between hero fade-out and content swap, in milliseconds
    pub hero_transition_ms: u64,
    /// Theme used when nothing (valid) is stored
    pub default_theme: Theme,
    /// Language used when nothing (valid) is stored
    pub default_language: Language,
    /// Preference file; defaults to `<data dir>/mohajer-site/preferences.json`
    pub storage_path: Option<PathBuf>,
    /// Log filter for the binary (`RUST_LOG` takes precedence)
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_threshold_px: 50.0,
            reveal_threshold: 0.1,
            hero_transition_ms: 300,
            default_theme: Theme::Light,
            default_language: Language::En,
            storage_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> SiteResult<Self> {
        let config: SiteConfig =
            toml::from_str(source).map_err(|e| SiteError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> SiteResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let source = std::fs::read_to_string(path).map_err(|e| SiteError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&source)
    }

    /// Load `mohajer-site.toml` from the working directory
    pub fn load_default() -> SiteResult<Self> {
        Self::load(CONFIG_FILE_NAME)
    }

    fn validate(&self) -> SiteResult<()> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(SiteError::InvalidConfig(format!(
                "reveal_threshold must be within 0.0..=1.0, got {}",
                self.reveal_threshold
            )));
        }
        if !self.header_threshold_px.is_finite() || self.header_threshold_px < 0.0 {
            return Err(SiteError::InvalidConfig(format!(
                "header_threshold_px must be a finite, non-negative number, got {}",
                self.header_threshold_px
            )));
        }
        Ok(())
    }

    pub fn hero_transition(&self) -> Duration {
        Duration::from_millis(self.hero_transition_ms)
    }

    /// Resolved preference file location, if any can be determined
    pub fn preferences_path(&self) -> Option<PathBuf> {
        self.storage_path.clone().or_else(|| {
            dirs::data_local_dir().map(|base| base.join(APP_DIR_NAME).join("preferences.json"))
        })
    }
}
