//! Host effects
//!
//! Work the browser (or desktop webview) performs asynchronously is returned
//! to the host instead of being awaited: smooth scrolling, media playback,
//! timers, and detaching intersection observers.

use mohajer_core::ProductKey;
use mohajer_dom::NodeId;
use std::time::Duration;

/// A deferred hero content swap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSwap {
    /// Product whose name should be shown after the delay
    pub product: ProductKey,
    /// Selection generation; stale generations are ignored on completion
    pub generation: u64,
    /// How long the host waits before completing
    pub delay: Duration,
}

/// Side effect for the host to carry out
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Jump to the top of the document
    ScrollToTop,
    /// Smooth-scroll until the element is in view
    ScrollIntoView(NodeId),
    /// Start the real media player
    PlayMedia(NodeId),
    /// Pause the real media player and rewind it to zero
    PauseMedia(NodeId),
    /// Wait, then call `Site::complete_hero_swap`
    ScheduleHeroSwap(PendingSwap),
    /// Stop reporting intersections for this element
    Unobserve(NodeId),
}

/// Result of handling one input event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dispatch {
    /// Whether the event's default action must be suppressed
    pub prevent_default: bool,
    /// Effects to run, in order
    pub effects: Vec<Effect>,
}

impl Dispatch {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn push(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    pub fn extend(&mut self, effects: impl IntoIterator<Item = Effect>) {
        self.effects.extend(effects);
    }

    pub fn is_empty(&self) -> bool {
        !self.prevent_default && self.effects.is_empty()
    }

    /// The pending hero swap scheduled by this dispatch, if any
    pub fn pending_swap(&self) -> Option<PendingSwap> {
        self.effects.iter().find_map(|e| match e {
            Effect::ScheduleHeroSwap(p) => Some(*p),
            _ => None,
        })
    }
}
