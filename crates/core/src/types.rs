//! Core types used throughout the site view layer
//!
//! Every enumeration here is closed: the markup may carry arbitrary strings,
//! so each type offers a `parse` that returns `None` for values outside the set
//! instead of failing.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Pages
// ============================================================================

/// Top-level content sections of the site. Exactly one is shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Products,
    Departments,
    About,
    Contact,
}

impl Page {
    /// All pages in navigation order
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Products,
        Page::Departments,
        Page::About,
        Page::Contact,
    ];

    /// Identifier carried by `data-page` on navigation controls
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Products => "products",
            Page::Departments => "departments",
            Page::About => "about",
            Page::Contact => "contact",
        }
    }

    /// Element id of the page container (`page-<id>`)
    pub fn container_id(&self) -> String {
        format!("page-{}", self.as_str())
    }

    /// Translation key of the navigation label
    pub fn nav_key(&self) -> &'static str {
        match self {
            Page::Home => "nav_home",
            Page::Products => "nav_products",
            Page::Departments => "nav_departments",
            Page::About => "nav_about",
            Page::Contact => "nav_contact",
        }
    }

    /// Parse a page identifier
    pub fn parse(value: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.as_str() == value)
    }

    /// Whether this is the landing page
    pub fn is_home(&self) -> bool {
        matches!(self, Page::Home)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Theme
// ============================================================================

/// Color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value; anything but the exact strings is rejected
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Theme implied by a toggle's checked state
    pub fn from_checked(checked: bool) -> Theme {
        if checked { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Language
// ============================================================================

/// Text direction of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

/// Display language preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fa,
    Ar,
}

impl Language {
    /// All supported languages
    pub const ALL: [Language; 3] = [Language::En, Language::Fa, Language::Ar];

    /// ISO code, also the stored representation and the `lang` attribute
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fa => "fa",
            Language::Ar => "ar",
        }
    }

    /// Parse a language code
    pub fn parse(value: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|l| l.code() == value)
    }

    /// Persian and Arabic are written right-to-left
    pub fn direction(&self) -> TextDirection {
        match self {
            Language::Fa | Language::Ar => TextDirection::Rtl,
            Language::En => TextDirection::Ltr,
        }
    }

    /// Text shown in the current-language indicator
    pub fn indicator(&self) -> String {
        self.code().to_uppercase()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Hero Products
// ============================================================================

/// Products featured in the hero switcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKey {
    #[default]
    Ingot,
    Rebar,
    Slab,
}

impl ProductKey {
    pub const ALL: [ProductKey; 3] = [ProductKey::Ingot, ProductKey::Rebar, ProductKey::Slab];

    /// Value carried by `data-product` on selectors
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKey::Ingot => "ingot",
            ProductKey::Rebar => "rebar",
            ProductKey::Slab => "slab",
        }
    }

    pub fn parse(value: &str) -> Option<ProductKey> {
        ProductKey::ALL.into_iter().find(|p| p.as_str() == value)
    }

    /// Translation key of the displayed product name
    pub fn name_key(&self) -> &'static str {
        match self {
            ProductKey::Ingot => "hero_ingot",
            ProductKey::Rebar => "hero_rebar",
            ProductKey::Slab => "hero_slab",
        }
    }

    /// Translation key of the selector label
    pub fn selector_key(&self) -> &'static str {
        match self {
            ProductKey::Ingot => "hero_ingot_selector",
            ProductKey::Rebar => "hero_rebar_selector",
            ProductKey::Slab => "hero_slab_selector",
        }
    }

    /// Element id of the product image
    pub fn image_id(&self) -> String {
        format!("{}-image", self.as_str())
    }
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
