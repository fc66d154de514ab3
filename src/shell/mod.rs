// Composition root for the events service.
//
// Responsibilities
// - Read config from environment.
// - Pick and instantiate the event store.
// - Wire the store into the service and expose the HTTP router.

pub mod config;
pub mod http;
pub mod state;
