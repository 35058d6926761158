use crate::shared::infrastructure::event_store::EventStoreError;
use thiserror::Error;

/// Failure of a command handler, generic over the use case's domain rejection.
#[derive(Debug, Error)]
pub enum ApplicationError<D>
where
    D: std::error::Error + 'static,
{
    #[error(transparent)]
    EventStore(#[from] EventStoreError),

    #[error("projection failed: {0}")]
    Projection(anyhow::Error),

    #[error("domain rejected: {0}")]
    Domain(D),
}

impl<D> ApplicationError<D>
where
    D: std::error::Error + 'static,
{
    pub fn is_version_conflict(&self) -> bool {
        matches!(
            self,
            ApplicationError::EventStore(EventStoreError::VersionMismatch { .. })
        )
    }
}
