//! Department tab groups
//!
//! A `.dept-tabs` list is followed by its content container; each tab's
//! `data-tab` names the id of the `.dept-content` panel it shows. Groups share
//! nothing, so the controller is stateless and works from the group a clicked
//! tab belongs to.

use crate::navigation::ACTIVE_CLASS;
use mohajer_dom::{Document, NodeId, Selector};

pub const TABS_CLASS: &str = "dept-tabs";
pub const CONTENT_CLASS: &str = "dept-content";
pub const TAB_ATTR: &str = "data-tab";

/// The `.dept-tabs` group that `item` is a tab of, if it is one
pub fn tab_group(doc: &Document, item: NodeId) -> Option<NodeId> {
    if !doc.matches(item, &Selector::tag("li")) {
        return None;
    }
    let parent = doc.parent(item)?;
    doc.closest(parent, &Selector::class(TABS_CLASS))
}

/// Activate `tab` and its panel within the group rooted at `container`
pub fn select_tab(doc: &mut Document, container: NodeId, tab: NodeId) {
    for item in doc.query_within(container, &Selector::tag("li")) {
        doc.remove_class(item, ACTIVE_CLASS);
    }
    doc.add_class(tab, ACTIVE_CLASS);

    let target = doc.attr(tab, TAB_ATTR).map(str::to_string);
    let Some(content_container) = doc.next_element_sibling(container) else {
        tracing::debug!("Tab group {} has no content container", container);
        return;
    };

    for panel in doc.query_within(content_container, &Selector::class(CONTENT_CLASS)) {
        doc.remove_class(panel, ACTIVE_CLASS);
        if target.is_some() && doc.attr(panel, "id") == target.as_deref() {
            doc.add_class(panel, ACTIVE_CLASS);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mohajer_dom::El;

    fn group(doc: &mut Document, prefix: &str) -> NodeId {
        let tab = |name: &str, active: bool| {
            let el = El::new("li")
                .id(&format!("{}-tab-{}", prefix, name))
                .attr(TAB_ATTR, &format!("{}-{}", prefix, name))
                .child(El::new("span").id(&format!("{}-label-{}", prefix, name)));
            if active { el.class(ACTIVE_CLASS) } else { el }
        };
        let panel = |name: &str, active: bool| {
            let el = El::new("div")
                .id(&format!("{}-{}", prefix, name))
                .class(CONTENT_CLASS);
            if active { el.class(ACTIVE_CLASS) } else { el }
        };

        let wrapper = doc.append(doc.body(), El::new("div"));
        let container = doc.append(
            wrapper,
            El::new("ul")
                .class(TABS_CLASS)
                .child(tab("steel", true))
                .child(tab("petro", false))
                .child(tab("food", false)),
        );
        doc.append(
            wrapper,
            El::new("div")
                .child(panel("steel", true))
                .child(panel("petro", false))
                .child(panel("food", false)),
        );
        container
    }

    fn active_ids(doc: &Document, selector: Selector) -> Vec<String> {
        doc.query_all(&selector.with_class(ACTIVE_CLASS))
            .into_iter()
            .filter_map(|n| doc.attr(n, "id").map(str::to_string))
            .collect()
    }

    #[test]
    fn test_select_tab_activates_matching_panel() {
        let mut doc = Document::new();
        let container = group(&mut doc, "a");
        let petro = doc.element_by_id("a-tab-petro").unwrap();

        select_tab(&mut doc, container, petro);
        assert_eq!(active_ids(&doc, Selector::tag("li")), vec!["a-tab-petro"]);
        assert_eq!(
            active_ids(&doc, Selector::class(CONTENT_CLASS)),
            vec!["a-petro"]
        );
    }

    #[test]
    fn test_tab_group_only_for_tab_items() {
        let mut doc = Document::new();
        let container = group(&mut doc, "a");
        let tab = doc.element_by_id("a-tab-food").unwrap();
        let label = doc.element_by_id("a-label-food").unwrap();
        let panel = doc.element_by_id("a-food").unwrap();

        assert_eq!(tab_group(&doc, tab), Some(container));
        assert_eq!(tab_group(&doc, label), None);
        assert_eq!(tab_group(&doc, container), None);
        assert_eq!(tab_group(&doc, panel), None);
    }

    #[test]
    fn test_groups_are_independent() {
        let mut doc = Document::new();
        let first = group(&mut doc, "a");
        let second = group(&mut doc, "b");

        let food = doc.element_by_id("a-tab-food").unwrap();
        select_tab(&mut doc, first, food);
        let petro = doc.element_by_id("b-tab-petro").unwrap();
        select_tab(&mut doc, second, petro);

        assert_eq!(
            active_ids(&doc, Selector::class(CONTENT_CLASS)),
            vec!["a-food", "b-petro"]
        );
    }

    #[test]
    fn test_exclusivity_over_click_sequence() {
        let mut doc = Document::new();
        let container = group(&mut doc, "a");
        for name in ["food", "food", "steel", "petro", "steel"] {
            let tab = doc.element_by_id(&format!("a-tab-{}", name)).unwrap();
            select_tab(&mut doc, container, tab);
            assert_eq!(
                active_ids(&doc, Selector::tag("li")),
                vec![format!("a-tab-{}", name)]
            );
            assert_eq!(
                active_ids(&doc, Selector::class(CONTENT_CLASS)),
                vec![format!("a-{}", name)]
            );
        }
    }
}
