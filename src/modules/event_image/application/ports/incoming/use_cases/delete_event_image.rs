use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteEventImageError {
    #[error("event image not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteEventImageUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Uuid, DeleteEventImageError>;
}
