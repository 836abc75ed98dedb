//! Content item domain model.
//!
//! A [`ContentItem`] is one photograph or article entry shown in the gallery.
//! Items are immutable for the lifetime of a page session; only derived views
//! (projections, focus) change.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable, unique identifier of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Closed set of gallery categories.
///
/// Raw records carry categories as strings; they are validated into this
/// enumeration once, at catalog ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Reenactment,
    Formations,
    Equipment,
    Education,
    Training,
    Events,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Self; 6] = [
        Self::Reenactment,
        Self::Formations,
        Self::Equipment,
        Self::Education,
        Self::Training,
        Self::Events,
    ];

    /// Lowercase wire name, identical to the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reenactment => "reenactment",
            Self::Formations => "formations",
            Self::Equipment => "equipment",
            Self::Education => "education",
            Self::Training => "training",
            Self::Events => "events",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Parses the exact lowercase wire name. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category `{s}`"))
    }
}

/// A single displayable gallery entry.
///
/// `likes` is the popularity counter used by [`SortKey::Popular`] and `views`
/// the view counter used by [`SortKey::Views`].
///
/// [`SortKey::Popular`]: crate::gallery::SortKey::Popular
/// [`SortKey::Views`]: crate::gallery::SortKey::Views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub date: NaiveDate,
    pub likes: u32,
    pub views: u32,
    pub image: String,
    pub location: String,
    pub photographer: String,
}

impl ContentItem {
    /// Creates an item with empty text fields, no tags and zeroed counters.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use legio::domain::{Category, ContentItem, ItemId};
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// let item = ContentItem::new(ItemId(1), "Legion Formation", Category::Formations, date)
    ///     .with_likes(245);
    /// assert_eq!(item.likes, 245);
    /// assert!(item.tags.is_empty());
    /// ```
    #[must_use]
    pub fn new(id: ItemId, title: impl Into<String>, category: Category, date: NaiveDate) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            category,
            tags: Vec::new(),
            date,
            likes: 0,
            views: 0,
            image: String::new(),
            location: String::new(),
            photographer: String::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub const fn with_likes(mut self, likes: u32) -> Self {
        self.likes = likes;
        self
    }

    #[must_use]
    pub const fn with_views(mut self, views: u32) -> Self {
        self.views = views;
        self
    }

    /// The item's date as an instant: UTC midnight of its calendar day.
    #[must_use]
    pub fn published_at(&self) -> DateTime<Utc> {
        self.date.and_time(NaiveTime::MIN).and_utc()
    }
}

/// Parses the date forms found in gallery data.
///
/// Accepted forms, tried in order:
/// - `2024-06-15` (full calendar date)
/// - `2024-06` (year and month, resolves to the first of the month)
/// - `June 2024` / `Jun 2024` (month name and year, first of the month)
///
/// Returns `None` for anything else.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use legio::domain::parse_item_date;
///
/// let june = NaiveDate::from_ymd_opt(2024, 6, 1);
/// assert_eq!(parse_item_date("June 2024"), june);
/// assert_eq!(parse_item_date("2024-06"), june);
/// assert_eq!(parse_item_date("someday"), None);
/// ```
#[must_use]
pub fn parse_item_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d"))
        .or_else(|_| NaiveDate::parse_from_str(&format!("1 {raw}"), "%d %B %Y"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parsing_is_exact() {
        assert_eq!("equipment".parse::<Category>(), Ok(Category::Equipment));
        assert!("Equipment".parse::<Category>().is_err());
        assert!("naval".parse::<Category>().is_err());
    }

    #[test]
    fn category_serde_uses_wire_names() {
        let json = serde_json::to_string(&Category::Formations).unwrap();
        assert_eq!(json, "\"formations\"");
    }

    #[test]
    fn month_forms_resolve_to_first_of_month() {
        let expected = NaiveDate::from_ymd_opt(2023, 12, 1);
        assert_eq!(parse_item_date("December 2023"), expected);
        assert_eq!(parse_item_date("Dec 2023"), expected);
        assert_eq!(parse_item_date(" 2023-12 "), expected);
        assert_eq!(
            parse_item_date("2023-12-24"),
            NaiveDate::from_ymd_opt(2023, 12, 24)
        );
    }

    #[test]
    fn published_at_is_utc_midnight() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let item = ContentItem::new(ItemId(2), "Authentic Armor", Category::Equipment, date);
        assert_eq!(item.published_at().to_rfc3339(), "2024-05-01T00:00:00+00:00");
    }
}
