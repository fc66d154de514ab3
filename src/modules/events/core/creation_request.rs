use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::events::core::event::{NewEvent, TITLE_MAX_LENGTH};
use crate::shared::core::validation::{ValidationErrors, check_max_chars, check_not_blank};

/// Inbound body of `POST /api/v1/events`. Every field is optional at the
/// wire level so that missing fields surface as field errors instead of a
/// deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct EventCreationRequest {
    pub title: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl EventCreationRequest {
    pub fn validate(self) -> Result<NewEvent, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match &self.title {
            Some(title) => {
                check_not_blank(&mut errors, "title", title);
                check_max_chars(&mut errors, "title", title, TITLE_MAX_LENGTH);
            }
            None => errors.add("title", "must not be blank"),
        }
        if self.start.is_none() {
            errors.add("start", "must not be null");
        }
        if self.end.is_none() {
            errors.add("end", "must not be null");
        }

        match (self.title, self.start, self.end) {
            (Some(title), Some(start), Some(end)) => {
                if start >= end {
                    errors.add("end", "must be after start");
                }
                errors.into_result(NewEvent { title, start, end })
            }
            _ => Err(errors),
        }
    }
}
