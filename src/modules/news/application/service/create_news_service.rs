use async_trait::async_trait;
use tracing::info;

use crate::news::application::domain::entities::{NewsItem, NEWS_SLUG_FALLBACK_PREFIX};
use crate::news::application::ports::incoming::use_cases::{
    CreateNewsCommand, CreateNewsError, CreateNewsUseCase,
};
use crate::news::application::ports::outgoing::news_query::NewsQuery;
use crate::news::application::ports::outgoing::news_repository::{
    CreateNewsData, NewsRepository, NewsRepositoryError,
};
use crate::shared::slug::{derive_base_slug, resolve_unique_slug};
use crate::shared::text::{check_max_len, non_blank, validate_title, MAX_DATE_LEN};

pub struct CreateNewsService<Q, R>
where
    Q: NewsQuery,
    R: NewsRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateNewsService<Q, R>
where
    Q: NewsQuery,
    R: NewsRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> CreateNewsUseCase for CreateNewsService<Q, R>
where
    Q: NewsQuery + Send + Sync,
    R: NewsRepository + Send + Sync,
{
    async fn execute(&self, command: CreateNewsCommand) -> Result<NewsItem, CreateNewsError> {
        let title = validate_title(&command.title).map_err(CreateNewsError::Validation)?;
        let date = non_blank(command.date);
        check_max_len("date", date.as_deref(), MAX_DATE_LEN).map_err(CreateNewsError::Validation)?;

        let base = derive_base_slug(command.slug.as_deref(), &title, NEWS_SLUG_FALLBACK_PREFIX);
        let slug = resolve_unique_slug(base, |candidate| async move {
            self.query.slug_exists(&candidate).await
        })
        .await
        .map_err(|e| CreateNewsError::RepositoryError(e.to_string()))?;

        let data = CreateNewsData {
            title,
            slug,
            subtitle: non_blank(command.subtitle),
            text: non_blank(command.text),
            main_image: non_blank(command.main_image),
            date,
            position: command.position,
        };

        let written = self.repository.create(data).await.map_err(|e| match e {
            NewsRepositoryError::SlugAlreadyExists => CreateNewsError::SlugAlreadyExists,
            other => CreateNewsError::RepositoryError(other.to_string()),
        })?;

        info!(news_id = %written.item.id, slug = %written.item.slug, "News item created");

        Ok(written.item)
    }
}
