use async_trait::async_trait;
use uuid::Uuid;

use crate::news::application::domain::entities::NewsItem;
use crate::news::application::ports::incoming::use_cases::{
    GetSingleNewsError, GetSingleNewsUseCase,
};
use crate::news::application::ports::outgoing::news_query::{NewsQuery, NewsQueryError};

pub struct GetSingleNewsService<Q>
where
    Q: NewsQuery,
{
    query: Q,
}

impl<Q> GetSingleNewsService<Q>
where
    Q: NewsQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleNewsUseCase for GetSingleNewsService<Q>
where
    Q: NewsQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<NewsItem, GetSingleNewsError> {
        self.query.get_by_id(id).await.map_err(|e| match e {
            NewsQueryError::NotFound => GetSingleNewsError::NotFound,
            NewsQueryError::DatabaseError(msg) => GetSingleNewsError::RepositoryError(msg),
        })
    }
}
