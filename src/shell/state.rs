use std::sync::Arc;

use crate::modules::events::adapters::outbound::event_store::{EventStore, EventStoreError};
use crate::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::modules::events::adapters::outbound::event_store_postgres::PostgresEventStore;
use crate::modules::events::application::event_service::EventService;
use crate::shared::core::pagination::PageLimits;
use crate::shell::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub events: Arc<EventService>,
    pub page_limits: PageLimits,
}

impl AppState {
    pub fn new(store: Arc<dyn EventStore>, page_limits: PageLimits) -> Self {
        Self {
            events: Arc::new(EventService::new(store)),
            page_limits,
        }
    }

    /// Picks the store from the config: Postgres when a database is
    /// configured, in memory otherwise.
    pub async fn from_config(config: &AppConfig) -> Result<Self, EventStoreError> {
        let store: Arc<dyn EventStore> = match &config.database {
            Some(database) => {
                let store = PostgresEventStore::connect(
                    &database.url,
                    database.max_connections,
                    database.acquire_timeout,
                )
                .await?;
                tracing::info!("using postgres event store");
                Arc::new(store)
            }
            None => {
                tracing::warn!("DATABASE_URL not set, events are kept in memory only");
                Arc::new(InMemoryEventStore::new())
            }
        };
        Ok(Self::new(store, config.page_limits))
    }
}
