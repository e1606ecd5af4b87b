use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::multimedia::application::ports::outgoing::MediaCleanup;
use crate::news::application::ports::incoming::use_cases::{DeleteNewsError, DeleteNewsUseCase};
use crate::news::application::ports::outgoing::news_repository::{
    NewsRepository, NewsRepositoryError,
};

pub struct DeleteNewsService<R>
where
    R: NewsRepository,
{
    repository: R,
    media_cleanup: Arc<dyn MediaCleanup>,
}

impl<R> DeleteNewsService<R>
where
    R: NewsRepository,
{
    pub fn new(repository: R, media_cleanup: Arc<dyn MediaCleanup>) -> Self {
        Self {
            repository,
            media_cleanup,
        }
    }
}

#[async_trait]
impl<R> DeleteNewsUseCase for DeleteNewsService<R>
where
    R: NewsRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Uuid, DeleteNewsError> {
        let deleted = self.repository.delete(id).await.map_err(|e| match e {
            NewsRepositoryError::NotFound => DeleteNewsError::NotFound,
            other => DeleteNewsError::RepositoryError(other.to_string()),
        })?;

        info!(news_id = %deleted.id, "News item deleted");

        if !deleted.owned_urls.is_empty() {
            self.media_cleanup.schedule(deleted.owned_urls);
        }

        Ok(deleted.id)
    }
}
