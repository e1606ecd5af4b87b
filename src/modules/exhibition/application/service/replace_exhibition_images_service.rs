use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::exhibition::application::domain::entities::ExhibitionImage;
use crate::exhibition::application::ports::incoming::use_cases::{
    ReplaceExhibitionImagesError, ReplaceExhibitionImagesUseCase,
};
use crate::exhibition::application::ports::outgoing::exhibition_repository::{
    ExhibitionRepository, ExhibitionRepositoryError,
};
use crate::multimedia::application::ports::outgoing::MediaCleanup;
use crate::shared::text::clean_urls;

pub struct ReplaceExhibitionImagesService<R>
where
    R: ExhibitionRepository,
{
    repository: R,
    media_cleanup: Arc<dyn MediaCleanup>,
}

impl<R> ReplaceExhibitionImagesService<R>
where
    R: ExhibitionRepository,
{
    pub fn new(repository: R, media_cleanup: Arc<dyn MediaCleanup>) -> Self {
        Self {
            repository,
            media_cleanup,
        }
    }
}

#[async_trait]
impl<R> ReplaceExhibitionImagesUseCase for ReplaceExhibitionImagesService<R>
where
    R: ExhibitionRepository + Send + Sync,
{
    async fn execute(
        &self,
        exhibition_id: Uuid,
        urls: Vec<String>,
    ) -> Result<Vec<ExhibitionImage>, ReplaceExhibitionImagesError> {
        let replaced = self
            .repository
            .replace_images(exhibition_id, clean_urls(urls))
            .await
            .map_err(|e| match e {
                ExhibitionRepositoryError::NotFound => ReplaceExhibitionImagesError::NotFound,
                other => ReplaceExhibitionImagesError::RepositoryError(other.to_string()),
            })?;

        if !replaced.released_urls.is_empty() {
            self.media_cleanup.schedule(replaced.released_urls);
        }

        Ok(replaced.images)
    }
}
