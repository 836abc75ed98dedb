//! Admin form validation.
//!
//! Forms hold raw text exactly as typed. [`GalleryItemForm::validate`] and
//! [`EventForm::validate`] are the only way to get a draft the store accepts.

use crate::domain::error::{LegioError, Result};
use crate::domain::{parse_item_date, Category, EventCategory};
use crate::storage::models::{EventDraft, GalleryDraft};
use std::collections::BTreeMap;

fn required(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LegioError::Validation {
            field,
            message: "is required".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

fn invalid(field: &'static str, message: impl Into<String>) -> LegioError {
    LegioError::Validation {
        field,
        message: message.into(),
    }
}

fn field(pairs: &BTreeMap<String, String>, key: &str) -> String {
    pairs.get(key).cloned().unwrap_or_default()
}

/// Gallery item form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryItemForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
}

impl GalleryItemForm {
    /// Builds a form from `key=value` pairs. Unknown keys are ignored and
    /// missing keys stay empty.
    #[must_use]
    pub fn from_pairs(pairs: &BTreeMap<String, String>) -> Self {
        Self {
            title: field(pairs, "title"),
            description: field(pairs, "description"),
            category: field(pairs, "category"),
            image_url: field(pairs, "image_url"),
        }
    }

    /// # Errors
    ///
    /// Returns [`LegioError::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<GalleryDraft> {
        let title = required("title", &self.title)?;
        let description = required("description", &self.description)?;
        let category = required("category", &self.category)?
            .parse::<Category>()
            .map_err(|_| invalid("category", format!("unknown category `{}`", self.category.trim())))?;
        let image_url = required("image_url", &self.image_url)?;

        Ok(GalleryDraft {
            title,
            description,
            category,
            image_url,
        })
    }
}

/// Event form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub category: String,
    pub image_url: String,
    pub max_participants: String,
}

impl EventForm {
    /// Builds a form from `key=value` pairs. Unknown keys are ignored and
    /// missing keys stay empty.
    #[must_use]
    pub fn from_pairs(pairs: &BTreeMap<String, String>) -> Self {
        Self {
            title: field(pairs, "title"),
            description: field(pairs, "description"),
            start_date: field(pairs, "start_date"),
            end_date: field(pairs, "end_date"),
            location: field(pairs, "location"),
            category: field(pairs, "category"),
            image_url: field(pairs, "image_url"),
            max_participants: field(pairs, "max_participants"),
        }
    }

    /// Validates the form.
    ///
    /// The image url is optional for events. An empty end date means a
    /// single-day event.
    ///
    /// # Errors
    ///
    /// Returns [`LegioError::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<EventDraft> {
        let title = required("title", &self.title)?;
        let description = required("description", &self.description)?;

        let start_raw = required("start_date", &self.start_date)?;
        let start_date = parse_item_date(&start_raw)
            .ok_or_else(|| invalid("start_date", format!("unrecognized date `{start_raw}`")))?;

        let end_date = match self.end_date.trim() {
            "" => start_date,
            raw => parse_item_date(raw)
                .ok_or_else(|| invalid("end_date", format!("unrecognized date `{raw}`")))?,
        };
        if end_date < start_date {
            return Err(invalid("end_date", "must not be before the start date"));
        }

        let location = required("location", &self.location)?;
        let category = required("category", &self.category)?
            .parse::<EventCategory>()
            .map_err(|_| invalid("category", format!("unknown category `{}`", self.category.trim())))?;

        let max_participants = required("max_participants", &self.max_participants)?
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| invalid("max_participants", "must be a positive whole number"))?;

        Ok(EventDraft {
            title,
            description,
            start_date,
            end_date,
            location,
            category,
            image_url: self.image_url.trim().to_string(),
            max_participants,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event_form() -> EventForm {
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
    fn valid_event_form_produces_draft() {
        let draft = event_form().validate().unwrap();
        assert_eq!(draft.start_date, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        assert_eq!(draft.end_date, NaiveDate::from_ymd_opt(2025, 6, 17).unwrap());
        assert_eq!(draft.category, EventCategory::Festival);
        assert_eq!(draft.max_participants, 500);
    }

    #[test]
    fn end_before_start_is_rejected() {
        let mut form = event_form();
        form.end_date = "2025-06-14".to_string();
        match form.validate() {
            Err(LegioError::Validation { field, .. }) => assert_eq!(field, "end_date"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn empty_end_date_means_single_day() {
        let mut form = event_form();
        form.end_date = "  ".to_string();
        let draft = form.validate().unwrap();
        assert_eq!(draft.start_date, draft.end_date);
    }

    #[test]
    fn participant_limit_must_be_positive() {
        for raw in ["0", "-3", "many"] {
            let mut form = event_form();
            form.max_participants = raw.to_string();
            assert!(
                matches!(form.validate(), Err(LegioError::Validation { field: "max_participants", .. })),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn gallery_form_requires_fields_and_known_category() {
        let mut pairs = BTreeMap::new();
        pairs.insert("title".to_string(), " Shield Wall ".to_string());
        pairs.insert("description".to_string(), "Drill".to_string());
        pairs.insert("category".to_string(), "formations".to_string());
        pairs.insert("image_url".to_string(), "https://example.org/s.jpeg".to_string());

        let draft = GalleryItemForm::from_pairs(&pairs).validate().unwrap();
        assert_eq!(draft.title, "Shield Wall");
        assert_eq!(draft.category, Category::Formations);

        pairs.insert("category".to_string(), "cooking".to_string());
        assert!(matches!(
            GalleryItemForm::from_pairs(&pairs).validate(),
            Err(LegioError::Validation { field: "category", .. })
        ));

        pairs.remove("title");
        assert!(matches!(
            GalleryItemForm::from_pairs(&pairs).validate(),
            Err(LegioError::Validation { field: "title", .. })
        ));
    }
}
