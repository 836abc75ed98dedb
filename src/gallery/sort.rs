//! Sort comparator for gallery items.
//!
//! Dates compare as UTC-midnight instants of their calendar day. Every key
//! yields `Ordering::Equal` for ties so that a stable sort keeps the original
//! collection order between equal items.

use crate::domain::ContentItem;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Ordering applied to the gallery projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Latest date first.
    #[default]
    Newest,
    /// Earliest date first.
    Oldest,
    /// Most likes first.
    Popular,
    /// Most views first.
    Views,
}

impl SortKey {
    pub const ALL: [Self; 4] = [Self::Newest, Self::Oldest, Self::Popular, Self::Views];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Popular => "popular",
            Self::Views => "views",
        }
    }

    /// Label shown in the sort selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest First",
            Self::Oldest => "Oldest First",
            Self::Popular => "Most Popular",
            Self::Views => "Most Viewed",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    /// Accepts the wire names plus the long forms `most-popular` and
    /// `most-viewed`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "popular" | "most-popular" => Ok(Self::Popular),
            "views" | "most-viewed" => Ok(Self::Views),
            other => Err(format!("unknown sort key `{other}`")),
        }
    }
}

/// Compares two items under `key`. `Less` means `a` is displayed first.
#[must_use]
pub fn compare(a: &ContentItem, b: &ContentItem, key: SortKey) -> Ordering {
    match key {
        SortKey::Newest => b.published_at().cmp(&a.published_at()),
        SortKey::Oldest => a.published_at().cmp(&b.published_at()),
        SortKey::Popular => b.likes.cmp(&a.likes),
        SortKey::Views => b.views.cmp(&a.views),
    }
}
