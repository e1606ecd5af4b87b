use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::event_image::application::ports::incoming::use_cases::{
    DeleteEventImageError, DeleteEventImageUseCase,
};
use crate::event_image::application::ports::outgoing::event_image_repository::{
    EventImageRepository, EventImageRepositoryError,
};
use crate::multimedia::application::ports::outgoing::MediaCleanup;

pub struct DeleteEventImageService<R>
where
    R: EventImageRepository,
{
    repository: R,
    media_cleanup: Arc<dyn MediaCleanup>,
}

impl<R> DeleteEventImageService<R>
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
impl<R> DeleteEventImageUseCase for DeleteEventImageService<R>
where
    R: EventImageRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Uuid, DeleteEventImageError> {
        let removed = self.repository.delete(id).await.map_err(|e| match e {
            EventImageRepositoryError::NotFound => DeleteEventImageError::NotFound,
            other => DeleteEventImageError::RepositoryError(other.to_string()),
        })?;

        info!(event_image_id = %removed.id, "Event image deleted");
        self.media_cleanup.schedule(vec![removed.image_url]);

        Ok(removed.id)
    }
}
