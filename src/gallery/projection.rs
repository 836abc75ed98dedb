//! Gallery projection: filter then stable sort.
//!
//! The projection is the sequence the user actually sees. It is recomputed
//! from scratch whenever the search text, category or sort key changes and is
//! never edited in place.

use super::filter::{matches_search, FilterState};
use super::sort::{compare, SortKey};
use crate::domain::ContentItem;

/// Produces the displayed sequence for `collection` under `filter` and `key`.
///
/// Matching items keep their original relative order, then a single stable
/// sort pass orders them by `key`. The result borrows from `collection`, holds
/// no duplicates, and may be empty.
///
/// # Filtering Algorithm
///
/// 1. Lowercase the search text once
/// 2. Keep items accepted by the category selection and the search text
/// 3. Stable-sort the survivors with [`compare`]
///
/// # Example
///
/// ```
/// use legio::gallery::{project, Catalog, CategoryFilter, FilterState, SortKey};
///
/// let catalog = Catalog::builtin();
/// let filter = FilterState::new("armor", CategoryFilter::All);
/// let shown = project(catalog.items(), &filter, SortKey::Newest);
/// assert_eq!(shown.len(), 1);
/// assert_eq!(shown[0].title, "Authentic Armor");
/// ```
#[must_use]
pub fn project<'a>(
    collection: &'a [ContentItem],
    filter: &FilterState,
    key: SortKey,
) -> Vec<&'a ContentItem> {
    let _span = tracing::debug_span!("project",
        total_items = collection.len(),
        query_len = filter.search.len(),
        category = %filter.category,
        sort = %key
    )
    .entered();

    let projected: Vec<&ContentItem> = project_indices(collection, filter, key)
        .into_iter()
        .map(|i| &collection[i])
        .collect();

    tracing::debug!(projected_count = projected.len(), "projection computed");
    projected
}

/// Same as [`project`], but as positions into `collection`.
///
/// Positions identify items even when two of them share an id.
#[must_use]
pub fn project_indices(collection: &[ContentItem], filter: &FilterState, key: SortKey) -> Vec<usize> {
    let needle = filter.search.to_lowercase();

    let mut positions: Vec<usize> = collection
        .iter()
        .enumerate()
        .filter(|(_, item)| filter.category.accepts(item.category) && matches_search(item, &needle))
        .map(|(i, _)| i)
        .collect();

    // `sort_by` is a stable merge sort; equal keys keep collection order.
    positions.sort_by(|&a, &b| compare(&collection[a], &collection[b], key));
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, ItemId};
    use crate::gallery::CategoryFilter;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn pair() -> Vec<ContentItem> {
        vec![
            ContentItem::new(
                ItemId(1),
                "Legion Formation",
                Category::Formations,
                NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            )
            .with_likes(245),
            ContentItem::new(
                ItemId(2),
                "Authentic Armor",
                Category::Equipment,
                NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            )
            .with_likes(189),
        ]
    }

    fn ids(items: &[&ContentItem]) -> Vec<u64> {
        items.iter().map(|i| i.id.0).collect()
    }

    #[test]
    fn popular_orders_by_likes() {
        let items = pair();
        let shown = project(&items, &FilterState::default(), SortKey::Popular);
        assert_eq!(ids(&shown), vec![1, 2]);
    }

    #[test]
    fn oldest_reverses_dates() {
        let items = pair();
        let shown = project(&items, &FilterState::default(), SortKey::Oldest);
        assert_eq!(ids(&shown), vec![2, 1]);
    }

    #[test]
    fn search_narrows_to_matching_item() {
        let items = pair();
        let filter = FilterState::new("armor", CategoryFilter::All);
        assert_eq!(ids(&project(&items, &filter, SortKey::Newest)), vec![2]);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let items = pair();
        let filter = FilterState::new("trireme", CategoryFilter::All);
        assert!(project(&items, &filter, SortKey::Newest).is_empty());
    }

    #[test]
    fn stable_for_equal_keys() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let items: Vec<ContentItem> = (1..=5)
            .map(|id| ContentItem::new(ItemId(id), "same", Category::Events, date).with_likes(7))
            .collect();

        for key in SortKey::ALL {
            let shown = project(&items, &FilterState::default(), key);
            assert_eq!(ids(&shown), vec![1, 2, 3, 4, 5], "{key}");
        }
    }

    #[test]
    fn subset_without_duplicates() {
        let items = pair();
        let shown = project(&items, &FilterState::default(), SortKey::Views);
        let unique: HashSet<ItemId> = shown.iter().map(|i| i.id).collect();
        assert_eq!(unique.len(), shown.len());
        assert!(shown.iter().all(|s| items.iter().any(|i| i == *s)));
    }

    #[test]
    fn indices_are_positional() {
        let mut items = pair();
        items[1].id = ItemId(1);
        assert_eq!(project_indices(&items, &FilterState::default(), SortKey::Popular), vec![0, 1]);
    }
}
