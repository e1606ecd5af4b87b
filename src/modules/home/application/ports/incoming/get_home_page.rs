use async_trait::async_trait;

use crate::home::application::domain::entities::HomePage;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetHomePageError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetHomePageUseCase: Send + Sync {
    async fn execute(&self) -> Result<HomePage, GetHomePageError>;
}
