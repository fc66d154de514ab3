use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::events::core::event::{Event, TITLE_MAX_LENGTH};
use crate::shared::core::validation::{ValidationErrors, check_max_chars, check_not_blank};

/// Inbound body of `PATCH /api/v1/events/{id}`. Absent and `null` fields
/// leave the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct EventUpdateRequest {
    pub title: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl EventUpdateRequest {
    /// Checks that can run without the stored event.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(title) = &self.title {
            check_not_blank(&mut errors, "title", title);
            check_max_chars(&mut errors, "title", title, TITLE_MAX_LENGTH);
        }
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if start >= end {
                errors.add("end", "must be after start");
            }
        }
        errors.into_result(())
    }

    /// Merges the provided fields over `existing` and checks only the merged
    /// interval. Field checks belong to [`Self::validate`], run before lookup.
    pub fn apply_to(self, existing: Event) -> Result<Event, ValidationErrors> {
        let merged = Event {
            id: existing.id,
            title: self.title.unwrap_or(existing.title),
            start: self.start.unwrap_or(existing.start),
            end: self.end.unwrap_or(existing.end),
        };
        if merged.start >= merged.end {
            let (field, message) = match self.end {
                Some(_) => ("end", "must be after start"),
                None => ("start", "must be before end"),
            };
            return Err(ValidationErrors::single(field, message));
        }
        Ok(merged)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.start.is_none() && self.end.is_none()
    }
}
