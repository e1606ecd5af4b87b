use async_trait::async_trait;

use crate::news::application::domain::entities::NewsItem;
use crate::news::application::ports::incoming::use_cases::{GetNewsError, GetNewsUseCase};
use crate::news::application::ports::outgoing::news_query::NewsQuery;

pub struct GetNewsService<Q>
where
    Q: NewsQuery,
{
    query: Q,
}

impl<Q> GetNewsService<Q>
where
    Q: NewsQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetNewsUseCase for GetNewsService<Q>
where
    Q: NewsQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<NewsItem>, GetNewsError> {
        self.query
            .list_all()
            .await
            .map_err(|e| GetNewsError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::application::domain::entities::fixtures::news_item;
    use crate::news::application::ports::outgoing::news_query::{MockNewsQuery, NewsQueryError};
    use crate::shared::position::Position;

    #[tokio::test]
    async fn test_admin_list_keeps_archived() {
        let mut query = MockNewsQuery::new();
        query.expect_list_all().returning(|| {
            Ok(vec![
                news_item("Top", Position::Current),
                news_item("Hidden", Position::Archived),
            ])
        });

        let items = GetNewsService::new(query).execute().await.unwrap();
        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn test_query_error_is_mapped() {
        let mut query = MockNewsQuery::new();
        query
            .expect_list_all()
            .returning(|| Err(NewsQueryError::DatabaseError("timeout".into())));

        let err = GetNewsService::new(query).execute().await.unwrap_err();
        assert!(matches!(err, GetNewsError::RepositoryError(msg) if msg.contains("timeout")));
    }
}
