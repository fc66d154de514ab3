// In memory implementation of the EventStore port.
//
// Purpose
// - Support service and router tests, and local runs without a database.
//
// Responsibilities
// - Keep events in a map keyed by id.
// - Order listings by id; v7 ids sort in creation order.

use std::collections::BTreeMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::events::adapters::outbound::event_store::{EventStore, EventStoreError};
use crate::modules::events::core::event::{Event, EventId, NewEvent};
use crate::shared::core::pagination::{Page, PageRequest};

#[derive(Default)]
pub struct InMemoryEventStore {
    rows: RwLock<BTreeMap<EventId, Event>>,
    is_offline: bool,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), EventStoreError> {
        if self.is_offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn insert(&self, event: NewEvent) -> Result<Event, EventStoreError> {
        self.ensure_online()?;
        let event = event.with_id(Uuid::now_v7());
        self.rows.write().await.insert(event.id, event.clone());
        Ok(event)
    }

    async fn save(&self, event: Event) -> Result<Event, EventStoreError> {
        self.ensure_online()?;
        self.rows.write().await.insert(event.id, event.clone());
        Ok(event)
    }

    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, EventStoreError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_all(&self, request: PageRequest) -> Result<Page<Event>, EventStoreError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        let content = guard
            .values()
            .skip(request.offset() as usize)
            .take(request.size as usize)
            .cloned()
            .collect();
        Ok(Page::new(content, request, guard.len() as u64))
    }

    async fn delete_by_id(&self, id: EventId) -> Result<(), EventStoreError> {
        self.ensure_online()?;
        self.rows.write().await.remove(&id);
        Ok(())
    }
}
