use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteExhibitionError {
    #[error("exhibition not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

/// Deletes the row with its gallery and schedules its media for removal.
#[async_trait]
pub trait DeleteExhibitionUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Uuid, DeleteExhibitionError>;
}
