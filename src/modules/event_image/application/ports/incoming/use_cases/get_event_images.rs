use async_trait::async_trait;

use crate::event_image::application::domain::entities::EventImage;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetEventImagesError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetEventImagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<EventImage>, GetEventImagesError>;
}
