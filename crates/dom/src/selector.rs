//! Element selectors
//!
//! A deliberately small subset of CSS selectors: a compound of tag, id,
//! classes and attribute tests, optionally constrained by a class on the
//! direct parent (`.card-list > li`).

use crate::element::Element;

/// Attribute test of a selector
#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrTest {
    /// `[name]`
    Present(String),
    /// `[name="value"]`
    Equals(String, String),
}

/// A compound selector matched against single elements
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<AttrTest>,
    parent_class: Option<String>,
}

impl Selector {
    /// Matches every element
    pub fn any() -> Self {
        Self::default()
    }

    /// `tag`
    pub fn tag(tag: &str) -> Self {
        Self {
            tag: Some(tag.to_lowercase()),
            ..Self::default()
        }
    }

    /// `#id`
    pub fn id(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::default()
        }
    }

    /// `.class`
    pub fn class(class: &str) -> Self {
        Self {
            classes: vec![class.to_string()],
            ..Self::default()
        }
    }

    /// `[name]`
    pub fn attr(name: &str) -> Self {
        Self::default().with_attr(name)
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str) -> Self {
        self.attributes.push(AttrTest::Present(name.to_string()));
        self
    }

    pub fn with_attr_value(mut self, name: &str, value: &str) -> Self {
        self.attributes
            .push(AttrTest::Equals(name.to_string(), value.to_string()));
        self
    }

    /// Require the direct parent to carry `class`
    pub fn child_of(mut self, class: &str) -> Self {
        self.parent_class = Some(class.to_string());
        self
    }

    /// Whether a parent constraint must be checked by the caller
    pub fn parent_class(&self) -> Option<&str> {
        self.parent_class.as_deref()
    }

    /// Test the element itself, ignoring the parent constraint
    pub fn matches_element(&self, el: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if &el.tag != tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if el.id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| el.has_class(c)) {
            return false;
        }
        self.attributes.iter().all(|test| match test {
            AttrTest::Present(name) => el.attr(name).is_some(),
            AttrTest::Equals(name, value) => el.attr(name) == Some(value.as_str()),
        })
    }
}
