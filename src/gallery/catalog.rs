//! Catalog ingestion: the boundary where raw gallery records become typed
//! [`ContentItem`]s.
//!
//! Raw data carries categories and dates as free strings. They are validated
//! here exactly once; everything downstream trusts the closed enumeration.
//!
//! # File Format
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "title": "Legion Formation",
//!     "description": "Members demonstrating the testudo formation.",
//!     "category": "formations",
//!     "image": "https://example.org/legion.jpeg",
//!     "date": "June 2024",
//!     "location": "Hyde Park, London",
//!     "photographer": "Marcus Aurelius",
//!     "tags": ["formation", "shield"],
//!     "likes": 245,
//!     "views": 1200
//!   }
//! ]
//! ```

use crate::domain::{parse_item_date, Category, ContentItem, ItemId, LegioError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Gallery record as it arrives from JSON, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawItem {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub date: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub photographer: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub views: u32,
}

impl TryFrom<RawItem> for ContentItem {
    type Error = LegioError;

    fn try_from(raw: RawItem) -> Result<Self> {
        let category: Category = raw
            .category
            .parse()
            .map_err(|e| LegioError::Catalog(format!("item {}: {e}", raw.id)))?;

        let date = parse_item_date(&raw.date)
            .ok_or_else(|| LegioError::Catalog(format!("item {}: unrecognised date `{}`", raw.id, raw.date)))?;

        Ok(Self {
            id: ItemId(raw.id),
            title: raw.title,
            description: raw.description,
            category,
            tags: raw.tags,
            date,
            likes: raw.likes,
            views: raw.views,
            image: raw.image,
            location: raw.location,
            photographer: raw.photographer,
        })
    }
}

/// Validated, ordered gallery collection with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<ContentItem>,
}

impl Catalog {
    /// Builds a catalog from already-typed items.
    ///
    /// # Errors
    ///
    /// Returns [`LegioError::Catalog`] if two items share an id.
    pub fn new(items: Vec<ContentItem>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        if let Some(dup) = items.iter().find(|item| !seen.insert(item.id)) {
            return Err(LegioError::Catalog(format!("duplicate item id {}", dup.id)));
        }
        Ok(Self { items })
    }

    /// Validates raw records, preserving their order.
    ///
    /// # Errors
    ///
    /// Fails on the first record with an unknown category or date, or on a
    /// duplicate id.
    pub fn from_raw(raw: Vec<RawItem>) -> Result<Self> {
        let _span = tracing::debug_span!("catalog_from_raw", count = raw.len()).entered();

        let items = raw
            .into_iter()
            .map(ContentItem::try_from)
            .collect::<Result<Vec<_>>>()?;

        Self::new(items)
    }

    /// Parses and validates a JSON array of raw records.
    ///
    /// # Errors
    ///
    /// Returns [`LegioError::Catalog`] for malformed JSON or invalid records.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<RawItem> = serde_json::from_str(json)
            .map_err(|e| LegioError::Catalog(format!("failed to parse JSON: {e}")))?;
        Self::from_raw(raw)
    }

    /// Reads and validates a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a catalog error as
    /// for [`Catalog::from_json`].
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = ?path, "loading catalog");
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&contents)?;
        tracing::debug!(items = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// The society's stock gallery.
    #[must_use]
    pub fn builtin() -> Self {
        let items = BUILTIN
            .iter()
            .map(|b| ContentItem {
                id: ItemId(b.id),
                title: b.title.to_string(),
                description: b.description.to_string(),
                category: b.category,
                tags: b.tags.iter().map(|t| (*t).to_string()).collect(),
                date: chrono::NaiveDate::from_ymd_opt(b.year, b.month, 1).unwrap_or_default(),
                likes: b.likes,
                views: b.views,
                image: b.image.to_string(),
                location: b.location.to_string(),
                photographer: b.photographer.to_string(),
            })
            .collect();
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    #[must_use]
    pub fn into_items(self) -> Vec<ContentItem> {
        self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

struct BuiltinItem {
    id: u64,
    title: &'static str,
    description: &'static str,
    category: Category,
    image: &'static str,
    year: i32,
    month: u32,
    location: &'static str,
    photographer: &'static str,
    tags: &'static [&'static str],
    likes: u32,
    views: u32,
}

const BUILTIN: [BuiltinItem; 8] = [
    BuiltinItem {
        id: 1,
        title: "Legion Formation",
        description: "Members demonstrating the famous Roman testudo (tortoise) formation at the Annual Roman Festival.",
        category: Category::Formations,
        image: "https://images.pexels.com/photos/5599591/pexels-photo-5599591.jpeg",
        year: 2024,
        month: 6,
        location: "Hyde Park, London",
        photographer: "Marcus Aurelius",
        tags: &["formation", "shield", "demonstration", "festival"],
        likes: 245,
        views: 1200,
    },
    BuiltinItem {
        id: 2,
        title: "Authentic Armor",
        description: "A detailed view of our historically accurate lorica segmentata (segmented armor) worn by legionaries.",
        category: Category::Equipment,
        image: "https://images.pexels.com/photos/5599613/pexels-photo-5599613.jpeg",
        year: 2024,
        month: 5,
        location: "S.C.E.A.R. Workshop",
        photographer: "Julius Caesar",
        tags: &["armor", "equipment", "historical", "detail"],
        likes: 189,
        views: 980,
    },
    BuiltinItem {
        id: 3,
        title: "School Demonstration",
        description: "Educational demonstration at Westfield Academy, showcasing Roman military techniques to students.",
        category: Category::Education,
        image: "https://images.pexels.com/photos/6499182/pexels-photo-6499182.jpeg",
        year: 2024,
        month: 4,
        location: "Westfield Academy",
        photographer: "Claudius Maximus",
        tags: &["education", "demonstration", "students", "teaching"],
        likes: 156,
        views: 850,
    },
    BuiltinItem {
        id: 4,
        title: "Training Session",
        description: "Members practicing with gladius and scutum during our weekly training session.",
        category: Category::Training,
        image: "https://images.pexels.com/photos/5599609/pexels-photo-5599609.jpeg",
        year: 2024,
        month: 3,
        location: "Training Grounds",
        photographer: "Titus Pullo",
        tags: &["training", "weapons", "practice", "skills"],
        likes: 178,
        views: 920,
    },
    BuiltinItem {
        id: 5,
        title: "Museum Exhibition",
        description: "S.C.E.A.R. members participating in the \"Rome: Empire of Power\" exhibition.",
        category: Category::Events,
        image: "https://images.pexels.com/photos/5599612/pexels-photo-5599612.jpeg",
        year: 2024,
        month: 2,
        location: "National History Museum",
        photographer: "Lucius Vorenus",
        tags: &["museum", "exhibition", "display", "history"],
        likes: 201,
        views: 1100,
    },
    BuiltinItem {
        id: 6,
        title: "Auxiliary Reenactment",
        description: "Members portraying Roman auxiliary units from the eastern provinces of the empire.",
        category: Category::Reenactment,
        image: "https://images.pexels.com/photos/5599592/pexels-photo-5599592.jpeg",
        year: 2024,
        month: 1,
        location: "Roman Festival",
        photographer: "Gaius Marius",
        tags: &["auxiliary", "reenactment", "costume", "festival"],
        likes: 167,
        views: 890,
    },
    BuiltinItem {
        id: 7,
        title: "Standard Bearers",
        description: "Our dedicated signiferi carrying the legion standards during a ceremonial march.",
        category: Category::Reenactment,
        image: "https://images.pexels.com/photos/5599588/pexels-photo-5599588.jpeg",
        year: 2023,
        month: 12,
        location: "City Center",
        photographer: "Scipio Africanus",
        tags: &["standards", "ceremony", "march", "tradition"],
        likes: 198,
        views: 950,
    },
    BuiltinItem {
        id: 8,
        title: "Summer Camp",
        description: "Young history enthusiasts learning about Roman military life at our annual summer camp.",
        category: Category::Education,
        image: "https://images.pexels.com/photos/5599590/pexels-photo-5599590.jpeg",
        year: 2023,
        month: 8,
        location: "Summer Camp Grounds",
        photographer: "Cato the Elder",
        tags: &["camp", "youth", "learning", "summer"],
        likes: 234,
        views: 1150,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_unique_ids() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 8);
        assert!(Catalog::new(catalog.into_items()).is_ok());
    }

    #[test]
    fn parses_month_year_dates() {
        let json = r#"[{"id": 1, "title": "Standard Bearers", "category": "reenactment", "date": "December 2023"}]"#;
        let catalog = Catalog::from_json(json).unwrap();
        let item = &catalog.items()[0];
        assert_eq!(item.date, chrono::NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
        assert!(item.tags.is_empty());
        assert_eq!(item.likes, 0);
    }

    #[test]
    fn rejects_unknown_category() {
        let json = r#"[{"id": 1, "title": "Galley", "category": "naval", "date": "2024-06"}]"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(err.to_string().contains("unknown category `naval`"), "{err}");
    }

    #[test]
    fn rejects_bad_date() {
        let json = r#"[{"id": 1, "title": "Camp", "category": "education", "date": "next summer"}]"#;
        assert!(matches!(Catalog::from_json(json), Err(LegioError::Catalog(_))));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"[
            {"id": 3, "title": "A", "category": "events", "date": "2024-01"},
            {"id": 3, "title": "B", "category": "events", "date": "2024-02"}
        ]"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert_eq!(err.to_string(), "Catalog error: duplicate item id 3");
    }
}
