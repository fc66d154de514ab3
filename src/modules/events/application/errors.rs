use thiserror::Error;

use crate::modules::events::adapters::outbound::event_store::EventStoreError;
use crate::shared::core::validation::ValidationErrors;
use crate::shared::infrastructure::http::api_error::ApiError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Storage(#[from] EventStoreError),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

impl From<EventStoreError> for ApiError {
    fn from(error: EventStoreError) -> Self {
        ApiError::Internal(error.to_string())
    }
}

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        match error {
            ApplicationError::Storage(e) => e.into(),
            ApplicationError::Validation(e) => ApiError::Validation(e),
        }
    }
}
