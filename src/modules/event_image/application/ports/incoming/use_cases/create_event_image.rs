use async_trait::async_trait;

use crate::event_image::application::domain::entities::EventImage;

#[derive(Debug, Clone, Default)]
pub struct CreateEventImageCommand {
    pub image_url: String,
    pub caption: Option<String>,
    pub position: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateEventImageError {
    #[error("{0}")]
    Validation(String),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateEventImageUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateEventImageCommand,
    ) -> Result<EventImage, CreateEventImageError>;
}
