use async_trait::async_trait;

use crate::exhibition::application::domain::entities::Exhibition;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetExhibitionsError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

/// Admin listing: archived rows included.
#[async_trait]
pub trait GetExhibitionsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Exhibition>, GetExhibitionsError>;
}
