use async_trait::async_trait;

use crate::exhibition::application::domain::entities::PublicExhibitionList;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetPublicExhibitionsError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetPublicExhibitionsUseCase: Send + Sync {
    async fn execute(&self) -> Result<PublicExhibitionList, GetPublicExhibitionsError>;
}
