//! Gallery view state and view model computation.
//!
//! [`GalleryState`] is the single owner of everything the gallery page
//! mutates: filter state, sort key, focused item and the loading flag. The
//! underlying items never change after loading; the projection is derived
//! from them and recomputed on every input change.
//!
//! # State Components
//!
//! - **Items**: Full collection, immutable once loaded
//! - **Visible**: Cached projection, as indices into the items
//! - **Filter / Sort**: User inputs driving the projection
//! - **Focus**: Item open in the lightbox, always a member of the projection
//! - **Loaded**: Distinguishes "nothing loaded yet" from "nothing matches"
//!
//! # Example
//!
//! ```rust
//! use legio::gallery::{Catalog, CategoryFilter, GalleryState};
//!
//! let mut state = GalleryState::new();
//! state.load(Catalog::builtin());
//! state.set_search("festival");
//! assert_eq!(state.projection().len(), 2);
//! ```

use super::filter::{CategoryFilter, FilterState};
use super::lightbox::{self, Direction};
use super::catalog::Catalog;
use super::projection::project_indices;
use super::sort::SortKey;
use super::viewmodel::{CardItem, EmptyState, GalleryViewModel, HeaderInfo, LightboxView};
use crate::domain::{ContentItem, ItemId, NavigationError};
use std::collections::HashMap;

/// Owning state of the gallery page.
#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    items: Vec<ContentItem>,
    index: HashMap<ItemId, usize>,
    visible: Vec<usize>,
    filter: FilterState,
    sort: SortKey,
    focused: Option<ItemId>,
    loaded: bool,
}

impl GalleryState {
    /// Creates an empty, not-yet-loaded gallery with default filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the collection and marks the gallery loaded.
    ///
    /// Only a validated [`Catalog`] is accepted, so ids are unique. Keeps the
    /// current filter and sort. A focus that does not survive the new
    /// projection is closed.
    pub fn load(&mut self, catalog: Catalog) {
        let items = catalog.into_items();
        tracing::debug!(count = items.len(), "gallery items loaded");
        self.index = items.iter().enumerate().map(|(i, item)| (item.id, i)).collect();
        self.items = items;
        self.loaded = true;
        self.recompute();
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[must_use]
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    #[must_use]
    pub const fn sort_key(&self) -> SortKey {
        self.sort
    }

    #[must_use]
    pub const fn focused(&self) -> Option<ItemId> {
        self.focused
    }

    /// The item open in the lightbox, if any.
    #[must_use]
    pub fn focused_item(&self) -> Option<&ContentItem> {
        self.focused
            .and_then(|id| self.index.get(&id))
            .map(|&i| &self.items[i])
    }

    /// Currently displayed sequence.
    #[must_use]
    pub fn projection(&self) -> Vec<&ContentItem> {
        self.visible.iter().map(|&i| &self.items[i]).collect()
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.recompute();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.category = category;
        self.recompute();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.recompute();
    }

    /// Restores the default filter and sort, as the empty-state button does.
    pub fn reset_filters(&mut self) {
        self.filter = FilterState::default();
        self.sort = SortKey::default();
        self.recompute();
    }

    /// Opens the lightbox on `id`.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::FocusNotInProjection`] if `id` is not
    /// currently displayed.
    pub fn open(&mut self, id: ItemId) -> Result<(), NavigationError> {
        if !self.visible.iter().any(|&i| self.items[i].id == id) {
            return Err(NavigationError::FocusNotInProjection(id));
        }
        tracing::debug!(item = %id, "lightbox opened");
        self.focused = Some(id);
        Ok(())
    }

    pub fn close(&mut self) {
        if let Some(id) = self.focused.take() {
            tracing::debug!(item = %id, "lightbox closed");
        }
    }

    /// Moves the lightbox focus one step, wrapping around the projection.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::NothingFocused`] when the lightbox is
    /// closed, otherwise whatever [`lightbox::advance`] reports.
    pub fn step(&mut self, direction: Direction) -> Result<ItemId, NavigationError> {
        let focused = self.focused.ok_or(NavigationError::NothingFocused)?;
        let next = lightbox::advance(&self.projection(), focused, direction)?;
        self.focused = Some(next);
        Ok(next)
    }

    /// Recomputes the projection and reconciles the focus against it.
    fn recompute(&mut self) {
        self.visible = project_indices(&self.items, &self.filter, self.sort);
        tracing::debug!(projected_count = self.visible.len(), "projection recomputed");

        let projection = self.projection();
        let reconciled = lightbox::reconcile_focus(&projection, self.focused);
        if reconciled != self.focused {
            tracing::debug!(item = ?self.focused, "focused item left the projection, closing lightbox");
        }
        self.focused = reconciled;
    }

    /// Computes a renderable view model from the current state.
    ///
    /// Exactly one of three shapes comes back: loading (no cards, `loading`
    /// set), empty (no cards, `empty_state` set), or populated.
    #[must_use]
    pub fn compute_viewmodel(&self) -> GalleryViewModel {
        let header = HeaderInfo {
            title: format!(" Photo Gallery ({}) ", self.visible.len()),
            sort_label: self.sort.label().to_string(),
            category: self.filter.category.to_string(),
        };

        if !self.loaded {
            return GalleryViewModel {
                header,
                cards: vec![],
                lightbox: None,
                empty_state: None,
                loading: true,
            };
        }

        let projection = self.projection();

        if projection.is_empty() {
            return GalleryViewModel {
                header,
                cards: vec![],
                lightbox: None,
                empty_state: Some(EmptyState {
                    message: "No images match your search criteria.".to_string(),
                    action_label: "Reset Filters".to_string(),
                }),
                loading: false,
            };
        }

        let cards = projection
            .iter()
            .map(|item| CardItem {
                id: item.id,
                title: item.title.clone(),
                description: item.description.clone(),
                tags: item.tags.iter().map(|t| format!("#{t}")).collect(),
                is_focused: self.focused == Some(item.id),
            })
            .collect();

        let lightbox = self.focused.and_then(|id| {
            let position = lightbox::position(&projection, id)?;
            let item = projection[position];
            Some(LightboxView {
                id,
                title: item.title.clone(),
                description: item.description.clone(),
                details: Self::detail_line(item),
                tags: item.tags.iter().map(|t| format!("#{t}")).collect(),
                position: format!("{} / {}", position + 1, projection.len()),
            })
        });

        GalleryViewModel {
            header,
            cards,
            lightbox,
            empty_state: None,
            loading: false,
        }
    }

    /// Date, location, photographer and counters joined with bullets,
    /// skipping empty fields.
    fn detail_line(item: &ContentItem) -> String {
        let date = item.date.format("%B %Y").to_string();
        let photographer = if item.photographer.is_empty() {
            String::new()
        } else {
            format!("Photo by {}", item.photographer)
        };

        [
            date,
            item.location.clone(),
            photographer,
            format!("{} likes", item.likes),
            format!("{} views", item.views),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" • ")
    }
}
