//! The retained document
//!
//! Elements live in an arena indexed by `NodeId`. The tree always has an
//! `html` root with a single `body` child. Queries walk the tree from the root,
//! so elements detached by `set_text` are never returned again.
//!
//! Mutating a `NodeId` that does not belong to this document is a no-op; the
//! controllers built on top rely on that to stay silent about missing markup.

use crate::builder::El;
use crate::element::{Element, MediaState, NodeId};
use crate::selector::Selector;

/// Arena-backed element tree plus the viewport scroll offset
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    nodes: Vec<Element>,
    root: NodeId,
    body: NodeId,
    scroll_y: f64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty `html > body` document
    pub fn new() -> Self {
        let mut html = Element::new("html");
        html.children.push(NodeId(1));
        let mut body = Element::new("body");
        body.parent = Some(NodeId(0));

        Self {
            nodes: vec![html, body],
            root: NodeId(0),
            body: NodeId(1),
            scroll_y: 0.0,
        }
    }

    /// The `html` element
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The `body` element
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Number of elements in the arena, detached ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(id.0)
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Insert a subtree as the last child of `parent`
    pub fn append(&mut self, parent: NodeId, template: El) -> NodeId {
        let El {
            mut element,
            children,
        } = template;
        element.parent = Some(parent);
        element.children.clear();

        let id = NodeId(self.nodes.len());
        self.nodes.push(element);
        if let Some(p) = self.get_mut(parent) {
            p.children.push(id);
        }

        for child in children {
            self.append(id, child);
        }
        id
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|el| el.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|el| el.children.as_slice()).unwrap_or(&[])
    }

    /// The sibling immediately after `id`, like `nextElementSibling`
    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let siblings = self.children(parent);
        let pos = siblings.iter().position(|&s| s == id)?;
        siblings.get(pos + 1).copied()
    }

    /// Descendants of `scope` in document order, `scope` excluded
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// `id` followed by its ancestors up to the root
    pub fn ancestors_inclusive(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = self.get(id).map(|_| id);
        while let Some(node) = current {
            out.push(node);
            current = self.parent(node);
        }
        out
    }

    /// Whether `node` is `ancestor` or lies inside it
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestors_inclusive(node).contains(&ancestor)
    }

    /// Whether `id` is reachable from the root
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.ancestors_inclusive(id).last() == Some(&self.root)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Full selector test, including the parent constraint
    pub fn matches(&self, id: NodeId, selector: &Selector) -> bool {
        let Some(el) = self.get(id) else {
            return false;
        };
        if !selector.matches_element(el) {
            return false;
        }
        match selector.parent_class() {
            Some(class) => self
                .parent(id)
                .and_then(|p| self.get(p))
                .is_some_and(|p| p.has_class(class)),
            None => true,
        }
    }

    /// All attached elements matching `selector`, in document order
    pub fn query_all(&self, selector: &Selector) -> Vec<NodeId> {
        let mut out = Vec::new();
        if self.matches(self.root, selector) {
            out.push(self.root);
        }
        out.extend(self.query_within(self.root, selector));
        out
    }

    /// Elements matching any of `selectors`, each once, in document order
    pub fn query_any(&self, selectors: &[Selector]) -> Vec<NodeId> {
        let mut all = vec![self.root];
        all.extend(self.descendants(self.root));
        all.into_iter()
            .filter(|&id| selectors.iter().any(|s| self.matches(id, s)))
            .collect()
    }

    /// Descendants of `scope` matching `selector`
    pub fn query_within(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&id| self.matches(id, selector))
            .collect()
    }

    pub fn query_first(&self, selector: &Selector) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    /// Attached element with the given id
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.query_first(&Selector::id(id))
    }

    /// Nearest inclusive ancestor matching `selector`, like `Element.closest`
    pub fn closest(&self, id: NodeId, selector: &Selector) -> Option<NodeId> {
        self.ancestors_inclusive(id)
            .into_iter()
            .find(|&node| self.matches(node, selector))
    }

    // ========================================================================
    // Classes
    // ========================================================================

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.get(id).is_some_and(|el| el.has_class(class))
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(el) = self.get_mut(id) {
            el.add_class(class);
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(el) = self.get_mut(id) {
            el.remove_class(class);
        }
    }

    /// Flip `class`; returns whether it is present afterwards
    pub fn toggle_class(&mut self, id: NodeId, class: &str) -> bool {
        let Some(el) = self.get_mut(id) else {
            return false;
        };
        if el.has_class(class) {
            el.remove_class(class);
            false
        } else {
            el.add_class(class);
            true
        }
    }

    /// Force `class` on or off
    pub fn set_class(&mut self, id: NodeId, class: &str, on: bool) {
        if on {
            self.add_class(id, class);
        } else {
            self.remove_class(id, class);
        }
    }

    // ========================================================================
    // Attributes, Text, Style
    // ========================================================================

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id).and_then(|el| el.attr(name))
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        let Some(el) = self.get_mut(id) else {
            return;
        };
        if name == "id" {
            el.id = Some(value.to_string());
        } else {
            el.attributes.insert(name.to_string(), value.to_string());
        }
    }

    pub fn remove_attr(&mut self, id: NodeId, name: &str) {
        if let Some(el) = self.get_mut(id) {
            el.attributes.remove(name);
        }
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|el| el.text.as_deref())
    }

    /// Replace the text content; like `textContent =`, children are detached
    pub fn set_text(&mut self, id: NodeId, text: &str) {
        let Some(el) = self.get_mut(id) else {
            return;
        };
        el.text = Some(text.to_string());
        let detached = std::mem::take(&mut el.children);
        for child in detached {
            if let Some(c) = self.get_mut(child) {
                c.parent = None;
            }
        }
    }

    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        self.get(id)
            .and_then(|el| el.style.get(property))
            .map(String::as_str)
    }

    pub fn set_style(&mut self, id: NodeId, property: &str, value: &str) {
        if let Some(el) = self.get_mut(id) {
            el.style.insert(property.to_string(), value.to_string());
        }
    }

    // ========================================================================
    // Form and Media State
    // ========================================================================

    pub fn is_checked(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|el| el.checked)
    }

    pub fn set_checked(&mut self, id: NodeId, checked: bool) {
        if let Some(el) = self.get_mut(id) {
            el.checked = checked;
        }
    }

    pub fn media(&self, id: NodeId) -> Option<&MediaState> {
        self.get(id).and_then(|el| el.media.as_ref())
    }

    pub fn media_mut(&mut self, id: NodeId) -> Option<&mut MediaState> {
        self.get_mut(id).and_then(|el| el.media.as_mut())
    }

    // ========================================================================
    // Viewport
    // ========================================================================

    /// Vertical scroll offset of the viewport in pixels
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn set_scroll_y(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
    }
}

// ============================================================================
// Tests
// ============================================================================
