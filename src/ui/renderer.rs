//! Top-level rendering coordinator.
//!
//! Each page renderer picks a layout from the shape of its input and
//! delegates the pieces to [`components`].

use crate::chat::ChatMessage;
use crate::gallery::viewmodel::GalleryViewModel;
use crate::gallery::{Carousel, Testimonial};
use crate::storage::{EventRecord, GalleryRecord};
use crate::ui::components;

/// Renders the gallery page at `cols` columns.
///
/// Layout is one of:
/// - Loading: header, border, loading line
/// - Empty: header, border, empty state with its action
/// - Normal: header, border, cards, then the lightbox when one is open
#[must_use]
pub fn render_gallery(vm: &GalleryViewModel, cols: usize) -> String {
    let mut out = String::new();
    components::gallery::header(&mut out, &vm.header, cols);
    components::border(&mut out, cols);

    if vm.loading {
        out.push_str("Loading gallery...\n");
        return out;
    }

    if let Some(empty) = &vm.empty_state {
        components::gallery::empty_state(&mut out, empty, cols);
        return out;
    }

    components::gallery::cards(&mut out, &vm.cards, cols);

    if let Some(lightbox) = &vm.lightbox {
        components::border(&mut out, cols);
        components::gallery::lightbox(&mut out, lightbox, cols);
    }
    out
}

/// Renders a chat transcript, with a typing line while a reply is pending.
#[must_use]
pub fn render_chat(messages: &[ChatMessage], typing: bool) -> String {
    let mut out = String::new();
    components::chat::transcript(&mut out, messages);
    if typing {
        out.push_str("Legio is typing...\n");
    }
    out
}

/// Renders the active testimonial with its dot indicator.
#[must_use]
pub fn render_carousel(carousel: &Carousel, slides: &[Testimonial], cols: usize) -> String {
    let mut out = String::new();
    if let Some(slide) = slides.get(carousel.active()) {
        components::carousel::slide(&mut out, slide, cols);
    }
    components::carousel::dots(&mut out, carousel);
    out
}

#[must_use]
pub fn render_gallery_records(records: &[GalleryRecord], cols: usize) -> String {
    let mut out = String::new();
    components::records::gallery_table(&mut out, records, cols);
    out
}

#[must_use]
pub fn render_events(events: &[EventRecord], cols: usize) -> String {
    let mut out = String::new();
    components::records::event_table(&mut out, events, cols);
    out
}
