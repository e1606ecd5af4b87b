use async_trait::async_trait;

use crate::news::application::domain::entities::PublicNewsList;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetPublicNewsError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetPublicNewsUseCase: Send + Sync {
    async fn execute(&self) -> Result<PublicNewsList, GetPublicNewsError>;
}
