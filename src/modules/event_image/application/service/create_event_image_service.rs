use async_trait::async_trait;
use tracing::info;

use crate::event_image::application::domain::entities::EventImage;
use crate::event_image::application::ports::incoming::use_cases::{
    CreateEventImageCommand, CreateEventImageError, CreateEventImageUseCase,
};
use crate::event_image::application::ports::outgoing::event_image_repository::{
    EventImageRepository, NewEventImageData,
};
use crate::shared::position::validate_sort_key;
use crate::shared::text::{non_blank, required};

pub struct CreateEventImageService<R>
where
    R: EventImageRepository,
{
    repository: R,
}

impl<R> CreateEventImageService<R>
where
    R: EventImageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateEventImageUseCase for CreateEventImageService<R>
where
    R: EventImageRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateEventImageCommand,
    ) -> Result<EventImage, CreateEventImageError> {
        let data = NewEventImageData {
            image_url: required("image_url", &command.image_url)
                .map_err(CreateEventImageError::Validation)?,
            caption: non_blank(command.caption),
            position: validate_sort_key(command.position.unwrap_or(0))
                .map_err(CreateEventImageError::Validation)?,
        };

        let image = self
            .repository
            .create(data)
            .await
            .map_err(|e| CreateEventImageError::RepositoryError(e.to_string()))?;

        info!(event_image_id = %image.id, "Event image created");

        Ok(image)
    }
}
