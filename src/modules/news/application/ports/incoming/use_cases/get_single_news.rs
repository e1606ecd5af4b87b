use async_trait::async_trait;
use uuid::Uuid;

use crate::news::application::domain::entities::NewsItem;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetSingleNewsError {
    #[error("news item not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSingleNewsUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<NewsItem, GetSingleNewsError>;
}
