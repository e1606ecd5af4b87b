use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::exhibition::application::ports::incoming::use_cases::{
    DeleteExhibitionError, DeleteExhibitionUseCase,
};
use crate::exhibition::application::ports::outgoing::exhibition_repository::{
    ExhibitionRepository, ExhibitionRepositoryError,
};
use crate::multimedia::application::ports::outgoing::MediaCleanup;

pub struct DeleteExhibitionService<R>
where
    R: ExhibitionRepository,
{
    repository: R,
    media_cleanup: Arc<dyn MediaCleanup>,
}

impl<R> DeleteExhibitionService<R>
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
impl<R> DeleteExhibitionUseCase for DeleteExhibitionService<R>
where
    R: ExhibitionRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Uuid, DeleteExhibitionError> {
        // Media goes only after the row is gone; a failed delete leaves it referenced.
        let deleted = self.repository.delete(id).await.map_err(|e| match e {
            ExhibitionRepositoryError::NotFound => DeleteExhibitionError::NotFound,
            other => DeleteExhibitionError::RepositoryError(other.to_string()),
        })?;

        info!(
            exhibition_id = %deleted.id,
            media = deleted.owned_urls.len(),
            "Exhibition deleted"
        );

        if !deleted.owned_urls.is_empty() {
            self.media_cleanup.schedule(deleted.owned_urls);
        }

        Ok(deleted.id)
    }
}
