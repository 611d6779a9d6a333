//! Catalog video modal

use crate::effects::Effect;
use mohajer_dom::{Document, NodeId};

pub const MODAL_ID: &str = "video-modal";
pub const OPEN_BUTTON_ID: &str = "open-video-modal";
pub const CLOSE_BUTTON_ID: &str = "close-video-modal";
pub const VIDEO_ID: &str = "catalog-video";

const SHOWN: &str = "flex";
const HIDDEN: &str = "none";

/// Whether the modal is currently displayed
pub fn is_open(doc: &Document) -> bool {
    doc.element_by_id(MODAL_ID)
        .is_some_and(|modal| doc.style(modal, "display") == Some(SHOWN))
}

/// Show the modal and start playback if the video is paused
pub fn open_modal(doc: &mut Document) -> Vec<Effect> {
    let Some(modal) = doc.element_by_id(MODAL_ID) else {
        return Vec::new();
    };
    doc.set_style(modal, "display", SHOWN);

    let mut effects = Vec::new();
    if let Some(video) = doc.element_by_id(VIDEO_ID) {
        if let Some(media) = doc.media_mut(video).filter(|m| !m.is_playing()) {
            media.play();
            effects.push(Effect::PlayMedia(video));
        }
    }
    tracing::debug!("Video modal opened");
    effects
}

/// Hide the modal, pause the video and rewind it
pub fn close_modal(doc: &mut Document) -> Vec<Effect> {
    let Some(modal) = doc.element_by_id(MODAL_ID) else {
        return Vec::new();
    };
    doc.set_style(modal, "display", HIDDEN);

    let mut effects = Vec::new();
    if let Some(video) = doc.element_by_id(VIDEO_ID) {
        if let Some(media) = doc.media_mut(video) {
            media.pause();
            media.seek(0.0);
            effects.push(Effect::PauseMedia(video));
        }
    }
    tracing::debug!("Video modal closed");
    effects
}

/// Escape key: closes only an open modal
pub fn on_escape(doc: &mut Document) -> Vec<Effect> {
    if is_open(doc) {
        close_modal(doc)
    } else {
        Vec::new()
    }
}

/// Whether a click on `target` hit the backdrop rather than the content
pub fn is_backdrop(doc: &Document, target: NodeId) -> bool {
    doc.element_by_id(MODAL_ID) == Some(target)
}
