use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::multimedia::application::ports::outgoing::MediaCleanup;
use crate::news::application::domain::entities::NewsItem;
use crate::news::application::ports::incoming::use_cases::{UpdateNewsError, UpdateNewsUseCase};
use crate::news::application::ports::outgoing::news_repository::{
    NewsRepository, NewsRepositoryError, PatchNewsData,
};
use crate::shared::text::{check_max_len, non_blank_patch, validate_title, MAX_DATE_LEN};

pub struct UpdateNewsService<R>
where
    R: NewsRepository,
{
    repository: R,
    media_cleanup: Arc<dyn MediaCleanup>,
}

impl<R> UpdateNewsService<R>
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
impl<R> UpdateNewsUseCase for UpdateNewsService<R>
where
    R: NewsRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, data: PatchNewsData) -> Result<NewsItem, UpdateNewsError> {
        let title = data
            .title
            .as_deref()
            .map(validate_title)
            .transpose()
            .map_err(UpdateNewsError::Validation)?;
        let date = non_blank_patch(data.date);
        check_max_len("date", date.as_value().map(String::as_str), MAX_DATE_LEN)
            .map_err(UpdateNewsError::Validation)?;

        let data = PatchNewsData {
            title,
            subtitle: non_blank_patch(data.subtitle),
            text: non_blank_patch(data.text),
            main_image: non_blank_patch(data.main_image),
            date,
            position: data.position,
        };

        let written = self.repository.patch(id, data).await.map_err(|e| match e {
            NewsRepositoryError::NotFound => UpdateNewsError::NotFound,
            other => UpdateNewsError::RepositoryError(other.to_string()),
        })?;

        if !written.released_urls.is_empty() {
            info!(news_id = %id, "Scheduling cleanup of replaced news image");
            self.media_cleanup.schedule(written.released_urls);
        }

        Ok(written.item)
    }
}
