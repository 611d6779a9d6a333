//! Product card flip

use mohajer_dom::{Document, NodeId, Selector};

pub const CARD_LIST_CLASS: &str = "card-list";
pub const FLIPPED_CLASS: &str = "is-flipped";

/// Selector of a flippable card: a list item directly inside `.card-list`
pub fn card_selector() -> Selector {
    Selector::tag("li").child_of(CARD_LIST_CLASS)
}

/// Toggle the card hit by a click on `target`.
///
/// Clicks landing on (or inside) a link inside the card leave it alone so the
/// link's own action wins. Returns the new flipped state, or `None` when the
/// click did not flip anything.
pub fn flip_card(doc: &mut Document, card: NodeId, target: NodeId) -> Option<bool> {
    if doc.closest(target, &Selector::tag("a")).is_some() {
        return None;
    }
    if !doc.contains(card, target) {
        return None;
    }
    Some(doc.toggle_class(card, FLIPPED_CLASS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mohajer_dom::El;

    fn doc_with_cards() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let list = doc.append(
            doc.body(),
            El::new("ul")
                .class(CARD_LIST_CLASS)
                .child(
                    El::new("li")
                        .id("card-1")
                        .child(El::new("h3").id("title-1").text("Steel Sheets"))
                        .child(
                            El::new("a")
                                .attr("href", "#")
                                .child(El::new("span").id("link-label").text("View Details")),
                        ),
                )
                .child(El::new("li").id("card-2")),
        );
        let card = doc.element_by_id("card-1").unwrap();
        let other = doc.element_by_id("card-2").unwrap();
        (doc, list, card, other)
    }

    #[test]
    fn test_body_click_toggles() {
        let (mut doc, _, card, _) = doc_with_cards();
        let title = doc.element_by_id("title-1").unwrap();
        assert_eq!(flip_card(&mut doc, card, title), Some(true));
        assert_eq!(flip_card(&mut doc, card, card), Some(false));
        assert!(!doc.has_class(card, FLIPPED_CLASS));
    }

    #[test]
    fn test_link_click_never_toggles() {
        let (mut doc, _, card, _) = doc_with_cards();
        let label = doc.element_by_id("link-label").unwrap();
        for _ in 0..3 {
            assert_eq!(flip_card(&mut doc, card, label), None);
        }
        assert!(!doc.has_class(card, FLIPPED_CLASS));
    }

    #[test]
    fn test_cards_are_independent() {
        let (mut doc, _, card, other) = doc_with_cards();
        flip_card(&mut doc, card, card);
        assert!(doc.has_class(card, FLIPPED_CLASS));
        assert!(!doc.has_class(other, FLIPPED_CLASS));
    }

    #[test]
    fn test_selector_requires_card_list_parent() {
        let (mut doc, _, card, _) = doc_with_cards();
        let stray = doc.append(doc.body(), El::new("ul").child(El::new("li")));
        let stray_item = doc.children(stray)[0];
        assert!(doc.matches(card, &card_selector()));
        assert!(!doc.matches(stray_item, &card_selector()));
    }
}
