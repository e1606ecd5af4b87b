use async_trait::async_trait;

use crate::news::application::domain::entities::NewsItem;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetNewsError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetNewsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<NewsItem>, GetNewsError>;
}
