use async_trait::async_trait;
use uuid::Uuid;

use crate::exhibition::application::domain::entities::ExhibitionDetail;
use crate::exhibition::application::ports::outgoing::exhibition_repository::PatchExhibitionData;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateExhibitionError {
    #[error("{0}")]
    Validation(String),

    #[error("exhibition not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateExhibitionUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        data: PatchExhibitionData,
    ) -> Result<ExhibitionDetail, UpdateExhibitionError>;
}
