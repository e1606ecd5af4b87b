use async_trait::async_trait;
use uuid::Uuid;

use crate::news::application::domain::entities::NewsItem;
use crate::news::application::ports::outgoing::news_repository::PatchNewsData;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateNewsError {
    #[error("{0}")]
    Validation(String),

    #[error("news item not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateNewsUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, data: PatchNewsData) -> Result<NewsItem, UpdateNewsError>;
}
