//! Filter predicate over content items.
//!
//! An item passes when both the free-text search and the category selection
//! accept it. Search is a case-insensitive substring test against the title,
//! the description and each tag; an empty query accepts everything.

use crate::domain::{Category, ContentItem};
use std::fmt;
use std::str::FromStr;

/// Category selection: either the "all" sentinel or one concrete category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    #[must_use]
    pub fn accepts(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => category.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    /// `all` (any case) selects the sentinel; anything else must be an exact
    /// category name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Search text plus category selection, owned by the gallery view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search: String,
    pub category: CategoryFilter,
}

impl FilterState {
    #[must_use]
    pub fn new(search: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    /// True when this state lets every item through.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.search.is_empty() && self.category == CategoryFilter::All
    }
}

/// Returns whether `item` passes `filter`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use legio::domain::{Category, ContentItem, ItemId};
/// use legio::gallery::{matches, CategoryFilter, FilterState};
///
/// let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// let armor = ContentItem::new(ItemId(2), "Authentic Armor", Category::Equipment, date)
///     .with_tags(["lorica", "detail"]);
///
/// assert!(matches(&armor, &FilterState::new("ARMOR", CategoryFilter::All)));
/// assert!(matches(&armor, &FilterState::new("lori", CategoryFilter::Only(Category::Equipment))));
/// assert!(!matches(&armor, &FilterState::new("armor", CategoryFilter::Only(Category::Training))));
/// ```
#[must_use]
pub fn matches(item: &ContentItem, filter: &FilterState) -> bool {
    filter.category.accepts(item.category) && matches_search(item, &filter.search.to_lowercase())
}

/// Search half of [`matches`], taking an already-lowercased needle so a
/// projection lowercases the query once rather than per item.
pub(crate) fn matches_search(item: &ContentItem, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    item.title.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle)
        || item.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemId;
    use chrono::NaiveDate;

    fn training() -> ContentItem {
        ContentItem::new(
            ItemId(4),
            "Training Session",
            Category::Training,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        )
        .with_description("Members practicing with gladius and scutum.")
        .with_tags(["weapons", "Practice"])
    }

    #[test]
    fn empty_search_and_all_accepts() {
        assert!(matches(&training(), &FilterState::default()));
    }

    #[test]
    fn search_hits_title_description_and_tags() {
        let item = training();
        for query in ["session", "GLADIUS", "weap", "practice"] {
            assert!(matches(&item, &FilterState::new(query, CategoryFilter::All)), "{query}");
        }
        assert!(!matches(&item, &FilterState::new("cavalry", CategoryFilter::All)));
    }

    #[test]
    fn category_must_also_match() {
        let item = training();
        let same = FilterState::new("session", CategoryFilter::Only(Category::Training));
        let other = FilterState::new("session", CategoryFilter::Only(Category::Events));
        assert!(matches(&item, &same));
        assert!(!matches(&item, &other));
    }

    #[test]
    fn category_filter_parses_sentinel() {
        assert_eq!("All".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "events".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Events))
        );
        assert!("Events".parse::<CategoryFilter>().is_err());
    }
}
