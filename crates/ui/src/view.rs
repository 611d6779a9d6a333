//! Render model
//!
//! Flattens one document element into the plain values the rsx tree needs, so
//! components never hold a borrow of the site while rendering.

use mohajer_dom::{Document, NodeId};

/// Attribute carrying the node index, used by the JS bridge to find elements
pub const NODE_ATTR: &str = "data-node";

#[derive(Debug, Clone, PartialEq)]
pub struct NodeView {
    pub node: NodeId,
    pub tag: String,
    pub id: Option<String>,
    pub class: String,
    pub style: String,
    pub text: Option<String>,
    pub children: Vec<NodeId>,
    pub href: Option<String>,
    pub src: Option<String>,
    pub alt: Option<String>,
    pub input_type: Option<String>,
    pub checked: bool,
    pub aria_expanded: Option<String>,
    pub dir: Option<String>,
    pub lang: Option<String>,
}

impl NodeView {
    pub fn from_document(doc: &Document, node: NodeId) -> Option<Self> {
        let el = doc.get(node)?;
        let attr = |name: &str| el.attributes.get(name).cloned();
        Some(Self {
            node,
            tag: el.tag.clone(),
            id: el.id.clone(),
            class: el.class_string(),
            style: el.style_string(),
            text: el.text.clone(),
            children: el.children.clone(),
            href: attr("href"),
            src: attr("src"),
            alt: attr("alt"),
            input_type: attr("type"),
            checked: el.checked,
            aria_expanded: attr("aria-expanded"),
            dir: attr("dir"),
            lang: attr("lang"),
        })
    }

    /// View of the body, carrying the root's direction and language
    pub fn page_root(doc: &Document) -> Option<Self> {
        let mut view = Self::from_document(doc, doc.body())?;
        view.dir = doc.attr(doc.root(), "dir").map(str::to_string);
        view.lang = doc.attr(doc.root(), "lang").map(str::to_string);
        Some(view)
    }

    pub fn node_attr(&self) -> String {
        self.node.index().to_string()
    }
}
