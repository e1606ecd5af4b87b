use async_trait::async_trait;

use crate::news::application::domain::entities::NewsItem;
use crate::news::application::ports::incoming::use_cases::{
    GetPublicSingleNewsError, GetPublicSingleNewsUseCase,
};
use crate::news::application::ports::outgoing::news_query::{NewsQuery, NewsQueryError};

pub struct GetPublicSingleNewsService<Q>
where
    Q: NewsQuery,
{
    query: Q,
}

impl<Q> GetPublicSingleNewsService<Q>
where
    Q: NewsQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPublicSingleNewsUseCase for GetPublicSingleNewsService<Q>
where
    Q: NewsQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<NewsItem, GetPublicSingleNewsError> {
        let item = self.query.get_by_slug(slug).await.map_err(|e| match e {
            NewsQueryError::NotFound => GetPublicSingleNewsError::NotFound,
            NewsQueryError::DatabaseError(msg) => GetPublicSingleNewsError::RepositoryError(msg),
        })?;

        if item.position.is_archived() {
            return Err(GetPublicSingleNewsError::NotFound);
        }

        Ok(item)
    }
}
