//! Elements of the retained document
//!
//! An element is addressed by its `NodeId` (an index into the document arena).
//! Besides the usual tag/id/class/attribute data it carries the two pieces of
//! live state the site needs: a checkbox `checked` flag and an optional media
//! playback state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Node Identifiers
// ============================================================================

/// Index of an element inside a `Document`.
///
/// Serialized as the bare index, which is how the webview reports elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ============================================================================
// Media State
// ============================================================================

/// Playback state of a media element (`video`, `audio`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaState {
    /// Whether playback is paused
    pub paused: bool,
    /// Current playback position in seconds
    pub current_time: f64,
}

impl Default for MediaState {
    fn default() -> Self {
        Self {
            paused: true,
            current_time: 0.0,
        }
    }
}

impl MediaState {
    pub fn play(&mut self) {
        self.paused = false;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Move the playhead, clamping negative positions to zero
    pub fn seek(&mut self, seconds: f64) {
        self.current_time = seconds.max(0.0);
    }

    pub fn is_playing(&self) -> bool {
        !self.paused
    }
}

// ============================================================================
// Element
// ============================================================================

/// A single element of the document tree
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Lowercase tag name
    pub tag: String,

    /// Unique element id
    pub id: Option<String>,

    /// Class list, in insertion order, without duplicates
    pub classes: Vec<String>,

    /// Attributes other than `id` and `class`
    pub attributes: BTreeMap<String, String>,

    /// Inline style properties
    pub style: BTreeMap<String, String>,

    /// Own text content, rendered before children
    pub text: Option<String>,

    /// Checked state for checkbox inputs
    pub checked: bool,

    /// Playback state for media elements
    pub media: Option<MediaState>,

    /// Parent element, `None` for the root and for detached elements
    pub parent: Option<NodeId>,

    /// Child elements in document order
    pub children: Vec<NodeId>,
}

impl Element {
    /// Create a bare element with the given tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_lowercase(),
            id: None,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            style: BTreeMap::new(),
            text: None,
            checked: false,
            media: None,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class; returns false if it was already present
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    /// Remove a class; returns false if it was absent
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        match name {
            "id" => self.id.as_deref(),
            _ => self.attributes.get(name).map(String::as_str),
        }
    }

    /// Space-separated class list, as rendered into `class="..."`
    pub fn class_string(&self) -> String {
        self.classes.join(" ")
    }

    /// Inline style string, as rendered into `style="..."`
    pub fn style_string(&self) -> String {
        self.style
            .iter()
            .map(|(k, v)| format!("{}: {};", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ============================================================================
// Tests
// ============================================================================
