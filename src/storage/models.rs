//! Admin record models for the persistence layer.
//!
//! Records are what the store hands back (with ids and timestamps); drafts
//! are validated form contents going in. Drafts are produced by
//! [`crate::admin::forms`] so a store never sees unvalidated input.

use crate::domain::{Category, EventCategory};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Gallery entry managed from the admin panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryRecord {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub image_url: String,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

/// Validated contents for creating or replacing a gallery record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub image_url: String,
}

/// Society calendar entry managed from the admin panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub location: String,
    pub category: EventCategory,
    pub image_url: String,
    pub max_participants: u32,
    #[serde(default)]
    pub current_participants: u32,
}

impl EventRecord {
    /// Places still open for registration.
    #[must_use]
    pub const fn spots_left(&self) -> u32 {
        self.max_participants.saturating_sub(self.current_participants)
    }

    /// Inclusive length in days.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// Validated contents for creating or replacing an event record.
///
/// Editing an event never touches its registration count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub location: String,
    pub category: EventCategory,
    pub image_url: String,
    pub max_participants: u32,
}
