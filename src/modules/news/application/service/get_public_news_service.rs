use async_trait::async_trait;

use crate::news::application::domain::entities::PublicNewsList;
use crate::news::application::ports::incoming::use_cases::{
    GetPublicNewsError, GetPublicNewsUseCase,
};
use crate::news::application::ports::outgoing::news_query::NewsQuery;

pub struct GetPublicNewsService<Q>
where
    Q: NewsQuery,
{
    query: Q,
}

impl<Q> GetPublicNewsService<Q>
where
    Q: NewsQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPublicNewsUseCase for GetPublicNewsService<Q>
where
    Q: NewsQuery + Send + Sync,
{
    async fn execute(&self) -> Result<PublicNewsList, GetPublicNewsError> {
        let items = self
            .query
            .list_public()
            .await
            .map_err(|e| GetPublicNewsError::RepositoryError(e.to_string()))?;

        Ok(PublicNewsList::from_items(items))
    }
}
