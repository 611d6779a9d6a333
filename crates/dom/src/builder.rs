//! Declarative element builder
//!
//! `El` describes a subtree that `Document::append` inserts in one go.
//!
//! ```rust,ignore
//! let nav = El::new("ul").class("nav-links").child(
//!     El::new("a")
//!         .class("nav-link")
//!         .attr("data-page", "home")
//!         .attr("data-lang-key", "nav_home")
//!         .text("Home"),
//! );
//! let id = doc.append(doc.body(), nav);
//! ```

use crate::element::{Element, MediaState};

/// Element template with children
#[derive(Debug, Clone, PartialEq)]
pub struct El {
    pub(crate) element: Element,
    pub(crate) children: Vec<El>,
}

impl El {
    pub fn new(tag: &str) -> Self {
        Self {
            element: Element::new(tag),
            children: Vec::new(),
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.element.id = Some(id.to_string());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        for part in class.split_whitespace() {
            self.element.add_class(part);
        }
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.element
            .attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Shorthand for a `data-lang-key` attribute plus its default text
    pub fn i18n(self, key: &str, text: &str) -> Self {
        self.attr("data-lang-key", key).text(text)
    }

    pub fn style(mut self, property: &str, value: &str) -> Self {
        self.element
            .style
            .insert(property.to_string(), value.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.element.text = Some(text.to_string());
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.element.checked = checked;
        self
    }

    /// Attach a paused media state at position zero
    pub fn media(mut self) -> Self {
        self.element.media = Some(MediaState::default());
        self
    }

    pub fn child(mut self, child: El) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = El>) -> Self {
        self.children.extend(children);
        self
    }
}
