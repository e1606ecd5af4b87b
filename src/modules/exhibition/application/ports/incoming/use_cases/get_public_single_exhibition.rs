use async_trait::async_trait;

use crate::exhibition::application::domain::entities::PublicExhibitionDetail;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetPublicSingleExhibitionError {
    /// Unknown slug, or the exhibition is archived.
    #[error("exhibition not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetPublicSingleExhibitionUseCase: Send + Sync {
    async fn execute(
        &self,
        slug: &str,
    ) -> Result<PublicExhibitionDetail, GetPublicSingleExhibitionError>;
}
