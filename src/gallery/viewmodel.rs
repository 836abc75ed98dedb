//! Immutable view model types produced by
//! [`GalleryState::compute_viewmodel`](super::GalleryState::compute_viewmodel).

use crate::domain::ItemId;

/// Everything needed to draw the gallery page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryViewModel {
    pub header: HeaderInfo,
    /// Cards in projection order.
    pub cards: Vec<CardItem>,
    pub lightbox: Option<LightboxView>,
    /// Set only when loaded and nothing matches.
    pub empty_state: Option<EmptyState>,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub sort_label: String,
    pub category: String,
}

/// One tile in the masonry grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    /// Tags prefixed with `#`.
    pub tags: Vec<String>,
    pub is_focused: bool,
}

/// Full-screen viewer contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxView {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub details: String,
    pub tags: Vec<String>,
    /// One-based `"k / n"` within the projection.
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub action_label: String,
}
