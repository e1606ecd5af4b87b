use async_trait::async_trait;

use crate::exhibition::application::domain::entities::ExhibitionDetail;
use crate::shared::position::Position;

#[derive(Debug, Clone, Default)]
pub struct CreateExhibitionCommand {
    pub title: String,
    /// Requested slug; derived from the title when absent or blank.
    pub slug: Option<String>,
    pub subtitle: Option<String>,
    pub text: Option<String>,
    pub main_image: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub position: Position,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateExhibitionError {
    #[error("{0}")]
    Validation(String),

    #[error("slug already exists")]
    SlugAlreadyExists,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateExhibitionUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateExhibitionCommand,
    ) -> Result<ExhibitionDetail, CreateExhibitionError>;
}
