use async_trait::async_trait;
use uuid::Uuid;

use crate::exhibition::application::domain::entities::ExhibitionDetail;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetSingleExhibitionError {
    #[error("exhibition not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSingleExhibitionUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ExhibitionDetail, GetSingleExhibitionError>;
}
