use std::sync::Arc;

use crate::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::shared::core::pagination::PageLimits;
use crate::shell::state::AppState;

pub fn make_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryEventStore::new()), PageLimits::default())
}

pub fn make_offline_event_store_state() -> AppState {
    let mut store = InMemoryEventStore::new();
    store.toggle_offline();
    AppState::new(Arc::new(store), PageLimits::default())
}
