//! Admin panel operations over a [`Store`].
//!
//! The panel validates raw form contents before anything reaches the store.
//! Store failures come back as [`LegioError::Storage`](crate::LegioError::Storage)
//! and are not retried.

pub mod forms;

pub use forms::{EventForm, GalleryItemForm};

use crate::domain::error::Result;
use crate::storage::{EventRecord, GalleryRecord, Store};

/// Admin session bound to one store.
pub struct AdminPanel<S: Store> {
    store: S,
}

impl<S: Store> AdminPanel<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn list_gallery(&self) -> Result<Vec<GalleryRecord>> {
        self.store.list_gallery()
    }

    /// Creates a gallery record when `id` is `None`, otherwise replaces
    /// record `id`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad form contents, or a storage error
    /// if the record is missing or cannot be written.
    pub fn save_gallery(&mut self, id: Option<u64>, form: &GalleryItemForm) -> Result<GalleryRecord> {
        let _span = tracing::debug_span!("admin_save_gallery", ?id).entered();

        let draft = form.validate().map_err(|e| {
            tracing::debug!(error = %e, "gallery form rejected");
            e
        })?;

        let record = match id {
            Some(id) => self.store.update_gallery(id, draft)?,
            None => self.store.insert_gallery(draft)?,
        };
        tracing::info!(id = record.id, title = %record.title, "gallery item saved");
        Ok(record)
    }

    /// # Errors
    ///
    /// Returns a storage error if `id` does not exist or the store cannot be
    /// written.
    pub fn delete_gallery(&mut self, id: u64) -> Result<()> {
        let _span = tracing::debug_span!("admin_delete_gallery", id).entered();
        self.store.delete_gallery(id)?;
        tracing::info!(id, "gallery item deleted");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn list_events(&self) -> Result<Vec<EventRecord>> {
        self.store.list_events()
    }

    /// Creates an event when `id` is `None`, otherwise replaces event `id`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad form contents, or a storage error
    /// if the event is missing or cannot be written.
    pub fn save_event(&mut self, id: Option<u64>, form: &EventForm) -> Result<EventRecord> {
        let _span = tracing::debug_span!("admin_save_event", ?id).entered();

        let draft = form.validate().map_err(|e| {
            tracing::debug!(error = %e, "event form rejected");
            e
        })?;

        let event = match id {
            Some(id) => self.store.update_event(id, draft)?,
            None => self.store.insert_event(draft)?,
        };
        tracing::info!(id = event.id, title = %event.title, "event saved");
        Ok(event)
    }

    /// # Errors
    ///
    /// Returns a storage error if `id` does not exist or the store cannot be
    /// written.
    pub fn delete_event(&mut self, id: u64) -> Result<()> {
        let _span = tracing::debug_span!("admin_delete_event", id).entered();
        self.store.delete_event(id)?;
        tracing::info!(id, "event deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LegioError;
    use crate::storage::JsonStore;
    use tempfile::TempDir;

    fn panel(dir: &TempDir) -> AdminPanel<JsonStore> {
        AdminPanel::new(JsonStore::new(dir.path().join("records.json")).unwrap())
    }

    fn gallery_form(title: &str) -> GalleryItemForm {
        GalleryItemForm {
            title: title.to_string(),
            description: "Drill on the field".to_string(),
            category: "training".to_string(),
            image_url: "https://example.org/t.jpeg".to_string(),
        }
    }

    #[test]
    fn save_creates_then_updates() {
        let dir = TempDir::new().unwrap();
        let mut panel = panel(&dir);

        let created = panel.save_gallery(None, &gallery_form("Training")).unwrap();
        let updated = panel
            .save_gallery(Some(created.id), &gallery_form("Training Session"))
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        let listed = panel.list_gallery().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Training Session");
    }

    #[test]
    fn invalid_form_never_reaches_store() {
        let dir = TempDir::new().unwrap();
        let mut panel = panel(&dir);

        let result = panel.save_gallery(None, &gallery_form("   "));
        assert!(matches!(result, Err(LegioError::Validation { field: "title", .. })));
        assert!(panel.list_gallery().unwrap().is_empty());
    }

    #[test]
    fn deleting_missing_event_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let mut panel = panel(&dir);
        assert!(matches!(panel.delete_event(4), Err(LegioError::Storage(_))));
    }
}
