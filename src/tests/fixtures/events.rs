use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::events::core::event::{Event, NewEvent};

pub const FIXED_EVENT_ID: &str = "38a14a82-d5a2-4210-9d61-cc3577bfa5df";

pub fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("fixture timestamp should be RFC 3339")
        .with_timezone(&Utc)
}

pub fn make_new_event() -> NewEvent {
    NewEvent {
        title: "Some event".into(),
        start: at("2001-01-01T00:00:00Z"),
        end: at("2001-01-01T12:00:00Z"),
    }
}

pub fn make_event() -> Event {
    make_new_event().with_id(Uuid::parse_str(FIXED_EVENT_ID).expect("fixture id should be a uuid"))
}
