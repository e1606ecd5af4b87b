use async_trait::async_trait;

use crate::news::application::domain::entities::NewsItem;
use crate::shared::position::Position;

#[derive(Debug, Clone, Default)]
pub struct CreateNewsCommand {
    pub title: String,
    /// Requested slug; derived from the title when absent or blank.
    pub slug: Option<String>,
    pub subtitle: Option<String>,
    pub text: Option<String>,
    pub main_image: Option<String>,
    pub date: Option<String>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateNewsError {
    #[error("{0}")]
    Validation(String),

    #[error("slug already exists")]
    SlugAlreadyExists,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateNewsUseCase: Send + Sync {
    async fn execute(&self, command: CreateNewsCommand) -> Result<NewsItem, CreateNewsError>;
}
