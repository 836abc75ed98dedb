use legio::admin::{AdminPanel, EventForm, GalleryItemForm};
use legio::storage::JsonStore;
use legio::{EventCategory, LegioError};
use tempfile::TempDir;

fn festival() -> EventForm {
    EventForm {
        title: "Roman Festival".to_string(),
        description: "Annual festival".to_string(),
        start_date: "2025-06-15".to_string(),
        end_date: "2025-06-17".to_string(),
        location: "Hyde Park, London".to_string(),
        category: "festival".to_string(),
        image_url: String::new(),
        max_participants: "500".to_string(),
    }
}

#[test]
fn records_persist_across_sessions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data").join("records.json");

    {
        let mut panel = AdminPanel::new(JsonStore::new(path.clone()).unwrap());
        panel.save_event(None, &festival()).unwrap();
        panel
            .save_gallery(
                None,
                &GalleryItemForm {
                    title: "Shield Wall".to_string(),
                    description: "Formation drill".to_string(),
                    category: "formations".to_string(),
                    image_url: "https://example.org/shield.jpeg".to_string(),
                },
            )
            .unwrap();
    }

    let panel = AdminPanel::new(JsonStore::new(path).unwrap());
    let events = panel.list_events().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].category, EventCategory::Festival);
    assert_eq!(events[0].duration_days(), 3);
    assert_eq!(events[0].spots_left(), 500);
    assert_eq!(panel.list_gallery().unwrap()[0].title, "Shield Wall");
}

#[test]
fn end_before_start_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut panel = AdminPanel::new(JsonStore::new(dir.path().join("records.json")).unwrap());

    let mut form = festival();
    form.end_date = "2025-06-01".to_string();

    let err = panel.save_event(None, &form).unwrap_err();
    assert!(matches!(err, LegioError::Validation { field: "end_date", .. }));
    assert!(panel.list_events().unwrap().is_empty());
}

#[test]
fn updating_missing_record_fails() {
    let dir = TempDir::new().unwrap();
    let mut panel = AdminPanel::new(JsonStore::new(dir.path().join("records.json")).unwrap());
    assert!(matches!(panel.save_event(Some(9), &festival()), Err(LegioError::Storage(_))));
}
