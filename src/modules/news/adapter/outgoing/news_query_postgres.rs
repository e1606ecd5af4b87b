use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::news::adapter::outgoing::sea_orm_entity::news;
use crate::news::application::domain::entities::{sort_for_display, NewsItem};
use crate::news::application::ports::outgoing::news_query::{NewsQuery, NewsQueryError};
use crate::shared::position::Position;

#[derive(Clone)]
pub struct NewsQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl NewsQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<news::Model>, NewsQueryError> {
        news::Entity::find()
            .filter(news::Column::Slug.eq(slug.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

#[async_trait]
impl NewsQuery for NewsQueryPostgres {
    async fn list_all(&self) -> Result<Vec<NewsItem>, NewsQueryError> {
        let rows = news::Entity::find()
            .order_by_desc(news::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(in_display_order(rows))
    }

    async fn list_public(&self) -> Result<Vec<NewsItem>, NewsQueryError> {
        let rows = news::Entity::find()
            .filter(news::Column::Position.ne(Position::ARCHIVED_VALUE))
            .order_by_desc(news::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(in_display_order(rows))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<NewsItem, NewsQueryError> {
        news::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_news)
            .ok_or(NewsQueryError::NotFound)
    }

    async fn get_by_slug(&self, slug: &str) -> Result<NewsItem, NewsQueryError> {
        self.find_by_slug(slug)
            .await?
            .map(model_to_news)
            .ok_or(NewsQueryError::NotFound)
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, NewsQueryError> {
        Ok(self.find_by_slug(slug).await?.is_some())
    }
}

fn in_display_order(rows: Vec<news::Model>) -> Vec<NewsItem> {
    let mut items: Vec<NewsItem> = rows.into_iter().map(model_to_news).collect();
    sort_for_display(&mut items);
    items
}

pub(crate) fn model_to_news(model: news::Model) -> NewsItem {
    NewsItem {
        id: model.id,
        title: model.title,
        subtitle: model.subtitle,
        text: model.text,
        main_image: model.main_image,
        date: model.date,
        position: Position::from_stored(model.position),
        slug: model.slug,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> NewsQueryError {
    NewsQueryError::DatabaseError(e.to_string())
}
