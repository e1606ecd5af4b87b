use async_trait::async_trait;

use crate::news::application::domain::entities::NewsItem;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetPublicSingleNewsError {
    /// Unknown slug, or an archived item.
    #[error("news item not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetPublicSingleNewsUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<NewsItem, GetPublicSingleNewsError>;
}
