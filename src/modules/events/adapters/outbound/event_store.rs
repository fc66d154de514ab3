// Port for event persistence. The service codes against this trait; the
// in-memory and Postgres adapters implement it.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::events::core::event::{Event, EventId, NewEvent};
use crate::shared::core::pagination::{Page, PageRequest};

#[derive(Debug, Error)]
pub enum EventStoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EventStore: Send + Sync {
    /// Persists a new event under a freshly generated id.
    async fn insert(&self, event: NewEvent) -> Result<Event, EventStoreError>;

    /// Replaces every field of the event stored under `event.id`.
    async fn save(&self, event: Event) -> Result<Event, EventStoreError>;

    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, EventStoreError>;

    /// Events in creation order, sliced by `request`, with the total count.
    async fn find_all(&self, request: PageRequest) -> Result<Page<Event>, EventStoreError>;

    /// Removes the event if present. Absence is not an error.
    async fn delete_by_id(&self, id: EventId) -> Result<(), EventStoreError>;
}
