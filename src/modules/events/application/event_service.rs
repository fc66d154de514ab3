use std::sync::Arc;

use crate::modules::events::adapters::outbound::event_store::{EventStore, EventStoreError};
use crate::modules::events::application::errors::ApplicationError;
use crate::modules::events::core::creation_request::EventCreationRequest;
use crate::modules::events::core::event::{EventId, EventResponse};
use crate::modules::events::core::update_request::EventUpdateRequest;
use crate::shared::core::pagination::{Page, PageRequest};

/// Create/read/list/update/delete over the event store. Every operation is a
/// single store call except updates, which read before they write; two
/// concurrent updates of the same event race and the last write wins.
pub struct EventService {
    store: Arc<dyn EventStore>,
}

impl EventService {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    pub async fn create_event(
        &self,
        request: EventCreationRequest,
    ) -> Result<EventResponse, ApplicationError> {
        let new_event = request.validate()?;
        let event = self.store.insert(new_event).await?;
        tracing::info!(event_id = %event.id, "event created");
        Ok(event.into())
    }

    pub async fn get_events(
        &self,
        request: PageRequest,
    ) -> Result<Page<EventResponse>, EventStoreError> {
        let page = self.store.find_all(request).await?;
        Ok(page.map(EventResponse::from))
    }

    pub async fn get_event(&self, id: EventId) -> Result<Option<EventResponse>, EventStoreError> {
        Ok(self.store.find_by_id(id).await?.map(EventResponse::from))
    }

    /// `Ok(None)` when no event is stored under `id`.
    pub async fn update_event(
        &self,
        id: EventId,
        patch: EventUpdateRequest,
    ) -> Result<Option<EventResponse>, ApplicationError> {
        patch.validate()?;
        let Some(existing) = self.store.find_by_id(id).await? else {
            return Ok(None);
        };
        let merged = patch.apply_to(existing)?;
        let saved = self.store.save(merged).await?;
        tracing::info!(event_id = %saved.id, "event updated");
        Ok(Some(saved.into()))
    }

    pub async fn delete_event(&self, id: EventId) -> Result<(), EventStoreError> {
        self.store.delete_by_id(id).await?;
        tracing::info!(event_id = %id, "event deleted");
        Ok(())
    }
}
