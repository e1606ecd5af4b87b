use async_trait::async_trait;
use uuid::Uuid;

use crate::exhibition::application::domain::entities::ExhibitionImage;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetExhibitionImagesError {
    #[error("exhibition not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetExhibitionImagesUseCase: Send + Sync {
    async fn execute(
        &self,
        exhibition_id: Uuid,
    ) -> Result<Vec<ExhibitionImage>, GetExhibitionImagesError>;
}
