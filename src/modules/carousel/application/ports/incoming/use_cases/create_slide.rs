use async_trait::async_trait;

use crate::carousel::application::domain::entities::{CarouselSlide, SlideDeck};

#[derive(Debug, Clone, Default)]
pub struct CreateSlideCommand {
    pub image_url: String,
    pub link_url: String,
    pub position: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateSlideError {
    #[error("{0}")]
    Validation(String),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateSlideUseCase: Send + Sync {
    async fn execute(
        &self,
        deck: SlideDeck,
        command: CreateSlideCommand,
    ) -> Result<CarouselSlide, CreateSlideError>;
}
