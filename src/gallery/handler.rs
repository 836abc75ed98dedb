//! Event handling for the gallery page.
//!
//! Every user input is expressed as an [`Event`] and routed through
//! [`handle_event`], which mutates [`GalleryState`] and reports whether the
//! page needs to be redrawn.
//!
//! # Event Types
//!
//! - **Data**: `Loaded`
//! - **Filtering**: `SearchChanged`, `CategorySelected`, `SortSelected`, `ResetFilters`
//! - **Lightbox**: `Open`, `Next`, `Previous`, `Close`
//!
//! # Example
//!
//! ```rust
//! use legio::domain::ItemId;
//! use legio::gallery::{handle_event, Catalog, Event, GalleryState};
//!
//! let mut state = GalleryState::new();
//! handle_event(&mut state, &Event::Loaded(Catalog::builtin()))?;
//! handle_event(&mut state, &Event::Open(ItemId(8)))?;
//! handle_event(&mut state, &Event::Next)?;
//! assert_eq!(state.focused(), Some(ItemId(1)));
//! # Ok::<(), legio::LegioError>(())
//! ```

use super::filter::CategoryFilter;
use super::lightbox::Direction;
use super::sort::SortKey;
use super::state::GalleryState;
use super::catalog::Catalog;
use crate::domain::{ItemId, Result};

/// Inputs to the gallery page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Collection fetched and validated; replaces whatever was shown.
    Loaded(Catalog),
    /// New search text (whole field value, not a keystroke).
    SearchChanged(String),
    CategorySelected(CategoryFilter),
    SortSelected(SortKey),
    /// Empty-state button: default filter and sort.
    ResetFilters,
    /// Card clicked.
    Open(ItemId),
    Next,
    Previous,
    /// Close button or backdrop click.
    Close,
}

impl Event {
    /// Variant name, used as the span field instead of the full payload.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Loaded(_) => "loaded",
            Self::SearchChanged(_) => "search_changed",
            Self::CategorySelected(_) => "category_selected",
            Self::SortSelected(_) => "sort_selected",
            Self::ResetFilters => "reset_filters",
            Self::Open(_) => "open",
            Self::Next => "next",
            Self::Previous => "previous",
            Self::Close => "close",
        }
    }
}

/// Applies `event` to `state` and returns whether a redraw is needed.
///
/// # Errors
///
/// Lightbox precondition violations (opening an item outside the projection,
/// stepping with nothing focused) surface as
/// [`LegioError::Navigation`](crate::LegioError::Navigation). State is left
/// unchanged in that case.
pub fn handle_event(state: &mut GalleryState, event: &Event) -> Result<bool> {
    let _span = tracing::debug_span!("handle_event", event_type = event.name()).entered();

    match event {
        Event::Loaded(catalog) => {
            if state.is_loaded() && state.items() == catalog.items() {
                tracing::debug!("items unchanged, skipping render");
                return Ok(false);
            }
            state.load(catalog.clone());
            Ok(true)
        }
        Event::SearchChanged(search) => {
            if &state.filter().search == search {
                return Ok(false);
            }
            tracing::trace!(query = %search, "search query updated");
            state.set_search(search.clone());
            Ok(true)
        }
        Event::CategorySelected(category) => {
            if state.filter().category == *category {
                return Ok(false);
            }
            state.set_category(*category);
            Ok(true)
        }
        Event::SortSelected(sort) => {
            if state.sort_key() == *sort {
                return Ok(false);
            }
            state.set_sort(*sort);
            Ok(true)
        }
        Event::ResetFilters => {
            state.reset_filters();
            Ok(true)
        }
        Event::Open(id) => {
            state.open(*id)?;
            Ok(true)
        }
        Event::Next => {
            state.step(Direction::Next)?;
            Ok(true)
        }
        Event::Previous => {
            state.step(Direction::Previous)?;
            Ok(true)
        }
        Event::Close => {
            let was_open = state.focused().is_some();
            state.close();
            Ok(was_open)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, NavigationError};
    use crate::LegioError;

    fn loaded() -> GalleryState {
        let mut state = GalleryState::new();
        handle_event(&mut state, &Event::Loaded(Catalog::builtin())).unwrap();
        state
    }

    #[test]
    fn unchanged_inputs_skip_render() {
        let mut state = loaded();
        assert!(!handle_event(&mut state, &Event::SortSelected(SortKey::Newest)).unwrap());
        assert!(!handle_event(&mut state, &Event::SearchChanged(String::new())).unwrap());
        assert!(!handle_event(&mut state, &Event::Close).unwrap());
        let same = Catalog::new(state.items().to_vec()).unwrap();
        assert!(!handle_event(&mut state, &Event::Loaded(same)).unwrap());
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut state = loaded();
        handle_event(&mut state, &Event::Open(ItemId(1))).unwrap();
        handle_event(&mut state, &Event::Previous).unwrap();
        assert_eq!(state.focused(), Some(ItemId(8)));
    }

    #[test]
    fn navigation_errors_propagate() {
        let mut state = loaded();
        handle_event(
            &mut state,
            &Event::CategorySelected(CategoryFilter::Only(Category::Equipment)),
        )
        .unwrap();

        let err = handle_event(&mut state, &Event::Open(ItemId(4))).unwrap_err();
        assert!(matches!(
            err,
            LegioError::Navigation(NavigationError::FocusNotInProjection(ItemId(4)))
        ));
    }

    #[test]
    fn reset_after_empty_result_shows_everything() {
        let mut state = loaded();
        handle_event(&mut state, &Event::SearchChanged("trireme".into())).unwrap();
        assert!(state.projection().is_empty());
        handle_event(&mut state, &Event::ResetFilters).unwrap();
        assert_eq!(state.projection().len(), 8);
    }
}
