//! JSON file-based store.
//!
//! A local stand-in for the hosted database: the whole dataset lives in
//! memory and is written back with atomic file writes (write-to-temp +
//! rename) after every mutation.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "gallery": [
//!     {
//!       "id": 1,
//!       "title": "Legion Formation",
//!       "description": "Testudo drill at the festival",
//!       "category": "formations",
//!       "image_url": "https://example.org/legion.jpeg",
//!       "created_at": 1718409600
//!     }
//!   ],
//!   "events": [
//!     {
//!       "id": 1,
//!       "title": "Roman Festival",
//!       "description": "Annual festival",
//!       "start_date": "2025-06-15",
//!       "end_date": "2025-06-17",
//!       "location": "Hyde Park, London",
//!       "category": "festival",
//!       "image_url": "https://example.org/festival.jpeg",
//!       "max_participants": 500,
//!       "current_participants": 324
//!     }
//!   ]
//! }
//! ```

use crate::domain::error::{LegioError, Result};
use crate::storage::backend::Store;
use crate::storage::models::{EventDraft, EventRecord, GalleryDraft, GalleryRecord};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk container.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreData {
    /// Version of the storage format for future migrations.
    version: u32,

    #[serde(default)]
    gallery: Vec<GalleryRecord>,

    #[serde(default)]
    events: Vec<EventRecord>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            version: 1,
            gallery: Vec::new(),
            events: Vec::new(),
        }
    }
}

/// JSON file store.
///
/// Every mutation is staged on a copy of the dataset and only becomes
/// visible once that copy is on disk. A failed write leaves the store as it
/// was.
///
/// # Thread Safety
///
/// `Send` but not `Sync`; one admin session owns it.
pub struct JsonStore {
    file_path: PathBuf,
    data: StoreData,
}

impl JsonStore {
    /// Creates or opens a JSON store.
    ///
    /// Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty store");
            StoreData::default()
        };

        tracing::debug!(
            gallery_count = data.gallery.len(),
            event_count = data.events.len(),
            "store initialized"
        );

        Ok(Self { file_path, data })
    }

    fn load_from_file(path: &Path) -> Result<StoreData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StoreData = serde_json::from_str(&contents)
            .map_err(|e| LegioError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(version = data.version, "loaded store data");
        Ok(data)
    }

    /// Writes `data` to a temporary sibling file, then renames it over the
    /// target so the file is never left half-written.
    ///
    /// # Errors
    ///
    /// Returns [`LegioError::Storage`] if serialization, the temporary
    /// write, or the rename fails.
    fn save_to_file(path: &Path, data: &StoreData) -> Result<()> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| LegioError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = path.with_extension("tmp");
        std::fs::write(&tmp_path, json)
            .map_err(|e| LegioError::Storage(format!("failed to write {}: {e}", tmp_path.display())))?;
        std::fs::rename(&tmp_path, path)
            .map_err(|e| LegioError::Storage(format!("failed to replace {}: {e}", path.display())))?;

        tracing::debug!(path = ?path, "store saved");
        Ok(())
    }

    /// Applies `change` to a copy of the data, persists the copy, and only
    /// then swaps it in.
    fn commit<T>(&mut self, change: impl FnOnce(&mut StoreData) -> Result<T>) -> Result<T> {
        let mut staged = self.data.clone();
        let out = change(&mut staged)?;
        Self::save_to_file(&self.file_path, &staged).map_err(|e| {
            tracing::warn!(error = %e, "save failed, change discarded");
            e
        })?;
        self.data = staged;
        Ok(out)
    }

    /// Ids are never reused, even after deletes.
    fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
        ids.max().unwrap_or(0).saturating_add(1)
    }

    fn not_found(kind: &str, id: u64) -> LegioError {
        LegioError::Storage(format!("{kind} {id} not found"))
    }
}

impl Store for JsonStore {
    fn list_gallery(&self) -> Result<Vec<GalleryRecord>> {
        let mut records = self.data.gallery.clone();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        tracing::debug!(count = records.len(), "listed gallery records");
        Ok(records)
    }

    fn insert_gallery(&mut self, draft: GalleryDraft) -> Result<GalleryRecord> {
        let _span = tracing::debug_span!("json_insert_gallery", title = %draft.title).entered();

        let record = self.commit(|data| {
            let record = GalleryRecord {
                id: Self::next_id(data.gallery.iter().map(|r| r.id)),
                title: draft.title,
                description: draft.description,
                category: draft.category,
                image_url: draft.image_url,
                created_at: chrono::Utc::now().timestamp(),
            };
            data.gallery.push(record.clone());
            Ok(record)
        })?;

        tracing::debug!(id = record.id, "gallery record inserted");
        Ok(record)
    }

    fn update_gallery(&mut self, id: u64, draft: GalleryDraft) -> Result<GalleryRecord> {
        let _span = tracing::debug_span!("json_update_gallery", id).entered();

        self.commit(|data| {
            let record = data
                .gallery
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| Self::not_found("gallery item", id))?;

            record.title = draft.title;
            record.description = draft.description;
            record.category = draft.category;
            record.image_url = draft.image_url;
            Ok(record.clone())
        })
    }

    fn delete_gallery(&mut self, id: u64) -> Result<()> {
        let _span = tracing::debug_span!("json_delete_gallery", id).entered();

        self.commit(|data| {
            let before = data.gallery.len();
            data.gallery.retain(|r| r.id != id);
            if data.gallery.len() == before {
                return Err(Self::not_found("gallery item", id));
            }
            Ok(())
        })
    }

    fn list_events(&self) -> Result<Vec<EventRecord>> {
        let mut events = self.data.events.clone();
        events.sort_by(|a, b| a.start_date.cmp(&b.start_date).then(a.id.cmp(&b.id)));
        tracing::debug!(count = events.len(), "listed events");
        Ok(events)
    }

    fn insert_event(&mut self, draft: EventDraft) -> Result<EventRecord> {
        let _span = tracing::debug_span!("json_insert_event", title = %draft.title).entered();

        let record = self.commit(|data| {
            let record = EventRecord {
                id: Self::next_id(data.events.iter().map(|e| e.id)),
                title: draft.title,
                description: draft.description,
                start_date: draft.start_date,
                end_date: draft.end_date,
                location: draft.location,
                category: draft.category,
                image_url: draft.image_url,
                max_participants: draft.max_participants,
                current_participants: 0,
            };
            data.events.push(record.clone());
            Ok(record)
        })?;

        tracing::debug!(id = record.id, "event inserted");
        Ok(record)
    }

    fn update_event(&mut self, id: u64, draft: EventDraft) -> Result<EventRecord> {
        let _span = tracing::debug_span!("json_update_event", id).entered();

        self.commit(|data| {
            let event = data
                .events
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or_else(|| Self::not_found("event", id))?;

            event.title = draft.title;
            event.description = draft.description;
            event.start_date = draft.start_date;
            event.end_date = draft.end_date;
            event.location = draft.location;
            event.category = draft.category;
            event.image_url = draft.image_url;
            event.max_participants = draft.max_participants;
            Ok(event.clone())
        })
    }

    fn delete_event(&mut self, id: u64) -> Result<()> {
        let _span = tracing::debug_span!("json_delete_event", id).entered();

        self.commit(|data| {
            let before = data.events.len();
            data.events.retain(|e| e.id != id);
            if data.events.len() == before {
                return Err(Self::not_found("event", id));
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, EventCategory};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn draft(title: &str) -> GalleryDraft {
        GalleryDraft {
            title: title.to_string(),
            description: "desc".to_string(),
            category: Category::Training,
            image_url: "https://example.org/a.jpeg".to_string(),
        }
    }

    fn event(title: &str, month: u32) -> EventDraft {
        let start = NaiveDate::from_ymd_opt(2025, month, 10).unwrap();
        EventDraft {
            title: title.to_string(),
            description: "desc".to_string(),
            start_date: start,
            end_date: start,
            location: "HQ".to_string(),
            category: EventCategory::Training,
            image_url: String::new(),
            max_participants: 30,
        }
    }

    #[test]
    fn records_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("records.json");

        {
            let mut store = JsonStore::new(path.clone()).unwrap();
            store.insert_gallery(draft("Training Session")).unwrap();
            store.insert_event(event("Workshop", 5)).unwrap();
        }

        let store = JsonStore::new(path).unwrap();
        assert_eq!(store.list_gallery().unwrap()[0].title, "Training Session");
        assert_eq!(store.list_events().unwrap()[0].title, "Workshop");
    }

    #[test]
    fn gallery_lists_newest_first_and_ids_are_not_reused() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonStore::new(dir.path().join("records.json")).unwrap();

        let first = store.insert_gallery(draft("first")).unwrap();
        let second = store.insert_gallery(draft("second")).unwrap();
        let titles: Vec<String> = store.list_gallery().unwrap().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["second", "first"]);

        store.delete_gallery(second.id).unwrap();
        let third = store.insert_gallery(draft("third")).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(third.id, 2);
    }

    #[test]
    fn events_list_by_start_date() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonStore::new(dir.path().join("records.json")).unwrap();

        store.insert_event(event("July", 7)).unwrap();
        store.insert_event(event("May", 5)).unwrap();
        let titles: Vec<String> = store.list_events().unwrap().into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["May", "July"]);
    }

    #[test]
    fn update_keeps_registrations_and_missing_ids_fail() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonStore::new(dir.path().join("records.json")).unwrap();

        let created = store.insert_event(event("Workshop", 5)).unwrap();
        store.data.events[0].current_participants = 18;

        let mut changed = event("Advanced Workshop", 6);
        changed.max_participants = 40;
        let updated = store.update_event(created.id, changed).unwrap();
        assert_eq!(updated.current_participants, 18);
        assert_eq!(updated.spots_left(), 22);

        assert!(matches!(store.delete_event(99), Err(LegioError::Storage(_))));
        assert!(matches!(store.update_gallery(99, draft("x")), Err(LegioError::Storage(_))));
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("records.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(JsonStore::new(path), Err(LegioError::Storage(_))));
    }

    #[test]
    fn failed_write_leaves_store_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("records.json");
        let mut store = JsonStore::new(path.clone()).unwrap();
        let kept = store.insert_gallery(draft("kept")).unwrap();

        // A directory where the temp file goes makes every save fail.
        let blocker = path.with_extension("tmp");
        std::fs::create_dir(&blocker).unwrap();

        assert!(matches!(store.insert_gallery(draft("lost")), Err(LegioError::Storage(_))));
        assert!(matches!(store.update_gallery(kept.id, draft("renamed")), Err(LegioError::Storage(_))));
        assert!(matches!(store.delete_gallery(kept.id), Err(LegioError::Storage(_))));

        let titles: Vec<String> = store.list_gallery().unwrap().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["kept"]);

        std::fs::remove_dir(&blocker).unwrap();
        drop(store);
        let reopened = JsonStore::new(path).unwrap();
        let titles: Vec<String> = reopened.list_gallery().unwrap().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["kept"]);
    }
}
