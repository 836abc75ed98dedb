//! Admin record tables.

use super::truncate;
use crate::storage::{EventRecord, GalleryRecord};

pub fn gallery_table(out: &mut String, records: &[GalleryRecord], cols: usize) {
    if records.is_empty() {
        out.push_str("No gallery items.\n");
        return;
    }
    out.push_str(&format!("{:<5} {:<14} TITLE\n", "ID", "CATEGORY"));
    let room = cols.saturating_sub(21);
    for record in records {
        out.push_str(&format!(
            "{:<5} {:<14} {}\n",
            record.id,
            record.category.as_str(),
            truncate(&record.title, room)
        ));
    }
}

/// Events with dates, location and remaining places.
pub fn event_table(out: &mut String, events: &[EventRecord], cols: usize) {
    if events.is_empty() {
        out.push_str("No events scheduled.\n");
        return;
    }
    out.push_str(&format!("{:<5} {:<23} {:<9} TITLE\n", "ID", "DATES", "SPOTS"));
    let room = cols.saturating_sub(40);
    for event in events {
        let dates = if event.start_date == event.end_date {
            event.start_date.format("%Y-%m-%d").to_string()
        } else {
            format!("{} → {}", event.start_date.format("%Y-%m-%d"), event.end_date.format("%Y-%m-%d"))
        };
        let spots = format!("{}/{}", event.spots_left(), event.max_participants);
        out.push_str(&format!(
            "{:<5} {:<23} {:<9} {}\n",
            event.id,
            dates,
            spots,
            truncate(&format!("{} ({})", event.title, event.location), room)
        ));
    }
}
