//! Lightbox navigation over the current projection.
//!
//! The navigator is a set of pure functions: the caller owns the focused id
//! and passes the projection it is currently showing. Stepping always
//! resolves positions against that projection, never against the unfiltered
//! collection.

use crate::domain::{ContentItem, ItemId, NavigationError};
use std::borrow::Borrow;
use std::str::FromStr;

/// Step direction for the lightbox and carousel arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl FromStr for Direction {
    type Err = String;

    /// Accepts `next`/`+1` and `prev`/`previous`/`-1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "next" | "+1" => Ok(Self::Next),
            "prev" | "previous" | "-1" => Ok(Self::Previous),
            other => Err(format!("unknown direction `{other}`")),
        }
    }
}

/// Moves `index` one step in `direction` within `len`, wrapping at both ends.
///
/// # Errors
///
/// - [`NavigationError::EmptyProjection`] if `len == 0`
/// - [`NavigationError::IndexOutOfRange`] if `index >= len`
pub fn step_index(index: usize, len: usize, direction: Direction) -> Result<usize, NavigationError> {
    if len == 0 {
        return Err(NavigationError::EmptyProjection);
    }
    if index >= len {
        return Err(NavigationError::IndexOutOfRange { index, len });
    }

    Ok(match direction {
        Direction::Next => (index + 1) % len,
        Direction::Previous => (index + len - 1) % len,
    })
}

/// Index of `id` within `projection`, compared by identifier.
#[must_use]
pub fn position<T: Borrow<ContentItem>>(projection: &[T], id: ItemId) -> Option<usize> {
    projection.iter().position(|item| item.borrow().id == id)
}

/// Returns the id of the item next to `focused` in `direction`.
///
/// # Errors
///
/// - [`NavigationError::EmptyProjection`] when `projection` is empty
/// - [`NavigationError::FocusNotInProjection`] when `focused` is not part of
///   `projection`
///
/// # Example
///
/// ```
/// use legio::domain::ItemId;
/// use legio::gallery::{advance, project, Catalog, Direction, FilterState, SortKey};
///
/// let catalog = Catalog::builtin();
/// let shown = project(catalog.items(), &FilterState::default(), SortKey::Newest);
/// let last = shown[shown.len() - 1].id;
///
/// assert_eq!(advance(&shown, last, Direction::Next)?, shown[0].id);
/// # Ok::<(), legio::domain::NavigationError>(())
/// ```
pub fn advance<T: Borrow<ContentItem>>(
    projection: &[T],
    focused: ItemId,
    direction: Direction,
) -> Result<ItemId, NavigationError> {
    if projection.is_empty() {
        return Err(NavigationError::EmptyProjection);
    }

    let current = position(projection, focused).ok_or(NavigationError::FocusNotInProjection(focused))?;
    let next = step_index(current, projection.len(), direction)?;

    tracing::trace!(from = %focused, to = %projection[next].borrow().id, ?direction, "lightbox advanced");
    Ok(projection[next].borrow().id)
}

/// Drops a focus that no longer belongs to `projection`.
///
/// Called after every recompute: a focused item excluded by a new filter
/// closes the lightbox rather than lingering outside the live projection.
#[must_use]
pub fn reconcile_focus<T: Borrow<ContentItem>>(projection: &[T], focused: Option<ItemId>) -> Option<ItemId> {
    focused.filter(|id| position(projection, *id).is_some())
}
