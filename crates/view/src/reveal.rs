//! Reveal-on-scroll
//!
//! Elements marked `.product-item` or `.animate-on-scroll` are observed once at
//! startup. The first report with at least `threshold` of the element visible
//! marks it `visible` and detaches the observer; later reports are ignored.

use crate::effects::Effect;
use mohajer_dom::{Document, NodeId, Selector};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const VISIBLE_CLASS: &str = "visible";
pub const REVEAL_CLASSES: [&str; 2] = ["product-item", "animate-on-scroll"];

/// One intersection report from the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntersectionEntry {
    pub node: NodeId,
    /// Fraction of the element's area inside the viewport
    pub ratio: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealAnimator {
    observed: BTreeSet<NodeId>,
    threshold: f64,
}

impl RevealAnimator {
    pub fn new(threshold: f64) -> Self {
        Self {
            observed: BTreeSet::new(),
            threshold,
        }
    }

    /// Start observing every reveal target in the document
    pub fn observe_all(&mut self, doc: &Document) -> Vec<NodeId> {
        let selectors: Vec<Selector> = REVEAL_CLASSES.iter().map(|c| Selector::class(c)).collect();
        let targets: Vec<NodeId> = doc
            .query_any(&selectors)
            .into_iter()
            .filter(|&node| !doc.has_class(node, VISIBLE_CLASS))
            .collect();
        self.observed.extend(targets.iter().copied());
        tracing::debug!("Observing {} reveal targets", targets.len());
        targets
    }

    pub fn is_observed(&self, node: NodeId) -> bool {
        self.observed.contains(&node)
    }

    /// Nodes still waiting to be revealed, in document order
    pub fn observed(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.observed.iter().copied()
    }

    /// Apply a batch of reports in arrival order
    pub fn on_intersections(&mut self, doc: &mut Document, entries: &[IntersectionEntry]) -> Vec<Effect> {
        let mut effects = Vec::new();
        for entry in entries {
            if entry.ratio < self.threshold || !self.observed.remove(&entry.node) {
                continue;
            }
            doc.add_class(entry.node, VISIBLE_CLASS);
            effects.push(Effect::Unobserve(entry.node));
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mohajer_dom::El;
    use pretty_assertions::assert_eq;

    fn doc_with_items() -> (Document, Vec<NodeId>) {
        let mut doc = Document::new();
        let items = (0..3)
            .map(|i| {
                doc.append(
                    doc.body(),
                    El::new("div").class(REVEAL_CLASSES[i % 2]).id(&format!("item-{}", i)),
                )
            })
            .collect();
        doc.append(doc.body(), El::new("div").class("plain"));
        (doc, items)
    }

    fn entry(node: NodeId, ratio: f64) -> IntersectionEntry {
        IntersectionEntry { node, ratio }
    }

    #[test]
    fn test_observes_both_target_classes() {
        let (doc, items) = doc_with_items();
        let mut animator = RevealAnimator::new(0.1);
        assert_eq!(animator.observe_all(&doc), items);
    }

    #[test]
    fn test_below_threshold_keeps_observing() {
        let (mut doc, items) = doc_with_items();
        let mut animator = RevealAnimator::new(0.1);
        animator.observe_all(&doc);

        let effects = animator.on_intersections(&mut doc, &[entry(items[0], 0.05)]);
        assert!(effects.is_empty());
        assert!(animator.is_observed(items[0]));
        assert!(!doc.has_class(items[0], VISIBLE_CLASS));
    }

    #[test]
    fn test_reveal_is_monotonic_and_once() {
        let (mut doc, items) = doc_with_items();
        let mut animator = RevealAnimator::new(0.1);
        animator.observe_all(&doc);

        let effects = animator.on_intersections(&mut doc, &[entry(items[1], 0.1)]);
        assert_eq!(effects, vec![Effect::Unobserve(items[1])]);
        assert!(doc.has_class(items[1], VISIBLE_CLASS));
        assert!(!animator.is_observed(items[1]));

        let effects = animator.on_intersections(
            &mut doc,
            &[entry(items[1], 0.0), entry(items[1], 1.0)],
        );
        assert!(effects.is_empty());
        assert!(doc.has_class(items[1], VISIBLE_CLASS));
    }

    #[test]
    fn test_reveal_follows_entry_order() {
        let (mut doc, items) = doc_with_items();
        let mut animator = RevealAnimator::new(0.1);
        animator.observe_all(&doc);

        let effects = animator.on_intersections(
            &mut doc,
            &[entry(items[2], 0.5), entry(items[0], 0.3)],
        );
        assert_eq!(
            effects,
            vec![Effect::Unobserve(items[2]), Effect::Unobserve(items[0])]
        );
        assert_eq!(animator.observed().collect::<Vec<_>>(), vec![items[1]]);
    }

    #[test]
    fn test_unobserved_nodes_ignored() {
        let (mut doc, _) = doc_with_items();
        let plain = doc.query_first(&Selector::class("plain")).unwrap();
        let mut animator = RevealAnimator::new(0.1);
        animator.observe_all(&doc);

        assert!(animator.on_intersections(&mut doc, &[entry(plain, 1.0)]).is_empty());
        assert!(!doc.has_class(plain, VISIBLE_CLASS));
    }
}
