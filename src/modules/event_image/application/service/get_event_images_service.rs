use async_trait::async_trait;

use crate::event_image::application::domain::entities::EventImage;
use crate::event_image::application::ports::incoming::use_cases::{
    GetEventImagesError, GetEventImagesUseCase,
};
use crate::event_image::application::ports::outgoing::event_image_repository::EventImageRepository;

pub struct GetEventImagesService<R>
where
    R: EventImageRepository,
{
    repository: R,
}

impl<R> GetEventImagesService<R>
where
    R: EventImageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetEventImagesUseCase for GetEventImagesService<R>
where
    R: EventImageRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<EventImage>, GetEventImagesError> {
        self.repository
            .list()
            .await
            .map_err(|e| GetEventImagesError::RepositoryError(e.to_string()))
    }
}
