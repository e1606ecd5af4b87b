use async_trait::async_trait;
use uuid::Uuid;

use crate::carousel::application::domain::entities::SlideDeck;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteSlideError {
    #[error("slide not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteSlideUseCase: Send + Sync {
    async fn execute(&self, deck: SlideDeck, id: Uuid) -> Result<Uuid, DeleteSlideError>;
}
