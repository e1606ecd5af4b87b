use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::news_query_postgres::model_to_news;
use crate::news::adapter::outgoing::sea_orm_entity::news;
use crate::news::application::ports::outgoing::news_repository::{
    CreateNewsData, NewsDeleted, NewsRepository, NewsRepositoryError, NewsWritten, PatchNewsData,
};
use crate::shared::patch_field::PatchField;
use crate::shared::position::Position;
use crate::shared::text::released;

#[derive(Clone)]
pub struct NewsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl NewsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn demote_current<C: ConnectionTrait>(conn: &C, keep: Option<Uuid>) -> Result<(), DbErr> {
        let mut update = news::Entity::update_many()
            .col_expr(news::Column::Position, Expr::value(Position::ARCHIVED_VALUE))
            .filter(news::Column::Position.eq(Position::CURRENT_VALUE));

        if let Some(id) = keep {
            update = update.filter(news::Column::Id.ne(id));
        }

        let result = update.exec(conn).await?;
        if result.rows_affected > 0 {
            debug!(demoted = result.rows_affected, "Previous headline archived");
        }
        Ok(())
    }
}

#[async_trait]
impl NewsRepository for NewsRepositoryPostgres {
    async fn create(&self, data: CreateNewsData) -> Result<NewsWritten, NewsRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        if data.position.is_current() {
            Self::demote_current(&txn, None).await.map_err(map_db_err)?;
        }

        let now = Utc::now().fixed_offset();
        let model = news::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            subtitle: Set(data.subtitle),
            text: Set(data.text),
            main_image: Set(data.main_image),
            date: Set(data.date),
            position: Set(data.position.to_stored()),
            slug: Set(data.slug),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(map_slug_error)?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(NewsWritten {
            item: model_to_news(model),
            released_urls: vec![],
        })
    }

    async fn patch(&self, id: Uuid, data: PatchNewsData) -> Result<NewsWritten, NewsRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = news::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(NewsRepositoryError::NotFound)?;

        if data.position.is_some_and(Position::is_current) {
            Self::demote_current(&txn, Some(id))
                .await
                .map_err(map_db_err)?;
        }

        let before: Vec<String> = existing.main_image.iter().cloned().collect();
        let mut model: news::ActiveModel = existing.clone().into();

        if let Some(title) = data.title {
            model.title = Set(title);
        }
        if let Some(position) = data.position {
            model.position = Set(position.to_stored());
        }
        apply_nullable(&mut model.subtitle, data.subtitle);
        apply_nullable(&mut model.text, data.text);
        apply_nullable(&mut model.main_image, data.main_image);
        apply_nullable(&mut model.date, data.date);

        let updated = if model.is_changed() {
            model.update(&txn).await.map_err(map_db_err)?
        } else {
            existing
        };

        txn.commit().await.map_err(map_db_err)?;

        let after: Vec<String> = updated.main_image.iter().cloned().collect();

        Ok(NewsWritten {
            item: model_to_news(updated),
            released_urls: released(&before, &after),
        })
    }

    async fn delete(&self, id: Uuid) -> Result<NewsDeleted, NewsRepositoryError> {
        let existing = news::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(NewsRepositoryError::NotFound)?;

        let result = news::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(NewsRepositoryError::NotFound);
        }

        Ok(NewsDeleted {
            id,
            owned_urls: existing.main_image.into_iter().collect(),
        })
    }
}

fn apply_nullable(column: &mut sea_orm::ActiveValue<Option<String>>, field: PatchField<String>) {
    if let Some(change) = field.into_change() {
        *column = Set(change);
    }
}

fn map_slug_error(e: DbErr) -> NewsRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        NewsRepositoryError::SlugAlreadyExists
    } else {
        NewsRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> NewsRepositoryError {
    NewsRepositoryError::DatabaseError(e.to_string())
}
