use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::event_image::application::domain::entities::EventImage;
use crate::event_image::application::ports::incoming::use_cases::{
    UpdateEventImageError, UpdateEventImageUseCase,
};
use crate::event_image::application::ports::outgoing::event_image_repository::{
    EventImageRepository, EventImageRepositoryError, PatchEventImageData,
};
use crate::multimedia::application::ports::outgoing::MediaCleanup;
use crate::shared::position::validate_sort_key;
use crate::shared::text::{non_blank_patch, required};

pub struct UpdateEventImageService<R>
where
    R: EventImageRepository,
{
    repository: R,
    media_cleanup: Arc<dyn MediaCleanup>,
}

impl<R> UpdateEventImageService<R>
where
    R: EventImageRepository,
{
    pub fn new(repository: R, media_cleanup: Arc<dyn MediaCleanup>) -> Self {
        Self {
            repository,
            media_cleanup,
        }
    }
}

#[async_trait]
impl<R> UpdateEventImageUseCase for UpdateEventImageService<R>
where
    R: EventImageRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        data: PatchEventImageData,
    ) -> Result<EventImage, UpdateEventImageError> {
        let data = PatchEventImageData {
            image_url: data
                .image_url
                .map(|v| required("image_url", &v))
                .transpose()
                .map_err(UpdateEventImageError::Validation)?,
            caption: non_blank_patch(data.caption),
            position: data
                .position
                .map(validate_sort_key)
                .transpose()
                .map_err(UpdateEventImageError::Validation)?,
        };

        let written = self.repository.patch(id, data).await.map_err(|e| match e {
            EventImageRepositoryError::NotFound => UpdateEventImageError::NotFound,
            other => UpdateEventImageError::RepositoryError(other.to_string()),
        })?;

        if !written.released_urls.is_empty() {
            self.media_cleanup.schedule(written.released_urls);
        }

        Ok(written.image)
    }
}
