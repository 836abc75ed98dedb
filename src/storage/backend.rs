//! Store backend abstraction.
//!
//! This module defines the [`Store`] trait that abstracts over the hosted
//! database the admin panel talks to. Each method maps directly to one admin
//! panel operation; there is no generic query surface.

use crate::domain::error::Result;
use crate::storage::models::{EventDraft, EventRecord, GalleryDraft, GalleryRecord};

/// Abstraction over persistent record storage.
///
/// Calls either succeed with a result or fail with
/// [`LegioError::Storage`](crate::LegioError::Storage); no retry is attempted
/// at this layer.
///
/// # Implementations
///
/// - [`JsonStore`](crate::storage::JsonStore): local JSON file with atomic writes
///
/// # Examples
///
/// ```no_run
/// use legio::storage::{JsonStore, Store};
/// use std::path::PathBuf;
///
/// let store = JsonStore::new(PathBuf::from("/tmp/legio/records.json"))?;
/// let events = store.list_events()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Store {
    /// All gallery records, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn list_gallery(&self) -> Result<Vec<GalleryRecord>>;

    /// Inserts a new gallery record and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be persisted.
    fn insert_gallery(&mut self, draft: GalleryDraft) -> Result<GalleryRecord>;

    /// Replaces the contents of gallery record `id`, keeping its id and
    /// creation time.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` does not exist or persisting fails.
    fn update_gallery(&mut self, id: u64, draft: GalleryDraft) -> Result<GalleryRecord>;

    /// Deletes gallery record `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` does not exist or persisting fails.
    fn delete_gallery(&mut self, id: u64) -> Result<()>;

    /// All events, earliest start date first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn list_events(&self) -> Result<Vec<EventRecord>>;

    /// Inserts a new event with no registrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be persisted.
    fn insert_event(&mut self, draft: EventDraft) -> Result<EventRecord>;

    /// Replaces the contents of event `id`, keeping its registration count.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` does not exist or persisting fails.
    fn update_event(&mut self, id: u64, draft: EventDraft) -> Result<EventRecord>;

    /// Deletes event `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` does not exist or persisting fails.
    fn delete_event(&mut self, id: u64) -> Result<()>;
}
