// src/modules/exhibition/adapter/outgoing/exhibition_repository_postgres.rs

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::exhibition_query_postgres::{image_model_to_domain, model_to_exhibition};
use crate::exhibition::adapter::outgoing::sea_orm_entity::{exhibition_images, exhibitions};
use crate::exhibition::application::domain::entities::ExhibitionImage;
use crate::exhibition::application::ports::outgoing::exhibition_repository::{
    CreateExhibitionData, ExhibitionDeleted, ExhibitionRepository, ExhibitionRepositoryError,
    ExhibitionWritten, GalleryReplaced, PatchExhibitionData,
};
use crate::shared::patch_field::PatchField;
use crate::shared::position::Position;
use crate::shared::text::released;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ExhibitionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExhibitionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Moves whoever holds `Current` to `Archived`, except `keep`.
    async fn demote_current<C: ConnectionTrait>(conn: &C, keep: Option<Uuid>) -> Result<(), DbErr> {
        let mut update = exhibitions::Entity::update_many()
            .col_expr(
                exhibitions::Column::Position,
                Expr::value(Position::ARCHIVED_VALUE),
            )
            .filter(exhibitions::Column::Position.eq(Position::CURRENT_VALUE));

        if let Some(id) = keep {
            update = update.filter(exhibitions::Column::Id.ne(id));
        }

        let result = update.exec(conn).await?;
        if result.rows_affected > 0 {
            debug!(demoted = result.rows_affected, "Previous current exhibition archived");
        }
        Ok(())
    }

    async fn load_gallery<C: ConnectionTrait>(
        conn: &C,
        exhibition_id: Uuid,
    ) -> Result<Vec<ExhibitionImage>, DbErr> {
        let rows = exhibition_images::Entity::find()
            .filter(exhibition_images::Column::ExhibitionId.eq(exhibition_id))
            .order_by_asc(exhibition_images::Column::ImageOrder)
            .all(conn)
            .await?;

        Ok(rows.into_iter().map(image_model_to_domain).collect())
    }

    /// Deletes the current gallery rows and inserts `urls` with
    /// `image_order` = list index.
    async fn write_gallery<C: ConnectionTrait>(
        conn: &C,
        exhibition_id: Uuid,
        urls: Vec<String>,
        clear_first: bool,
    ) -> Result<Vec<ExhibitionImage>, DbErr> {
        if clear_first {
            exhibition_images::Entity::delete_many()
                .filter(exhibition_images::Column::ExhibitionId.eq(exhibition_id))
                .exec(conn)
                .await?;
        }

        if urls.is_empty() {
            return Ok(vec![]);
        }

        let now = Utc::now().fixed_offset();
        let images: Vec<ExhibitionImage> = urls
            .into_iter()
            .enumerate()
            .map(|(index, url)| ExhibitionImage {
                id: Uuid::new_v4(),
                exhibition_id,
                url,
                image_order: index as i32,
            })
            .collect();

        let rows = images.iter().map(|img| exhibition_images::ActiveModel {
            id: Set(img.id),
            exhibition_id: Set(img.exhibition_id),
            url: Set(img.url.clone()),
            image_order: Set(img.image_order),
            created_at: Set(now),
        });

        exhibition_images::Entity::insert_many(rows)
            .exec_without_returning(conn)
            .await?;

        Ok(images)
    }
}

#[async_trait]
impl ExhibitionRepository for ExhibitionRepositoryPostgres {
    async fn create(
        &self,
        data: CreateExhibitionData,
    ) -> Result<ExhibitionWritten, ExhibitionRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        if data.position.is_current() {
            Self::demote_current(&txn, None).await.map_err(map_db_err)?;
        }

        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        let model = exhibitions::ActiveModel {
            id: Set(id),
            title: Set(data.title),
            subtitle: Set(data.subtitle),
            text: Set(data.text),
            main_image: Set(data.main_image),
            author: Set(data.author),
            date: Set(data.date),
            position: Set(data.position.to_stored()),
            slug: Set(data.slug),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(map_slug_error)?;

        let images = Self::write_gallery(&txn, id, data.images, false)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(ExhibitionWritten {
            exhibition: model_to_exhibition(model),
            images,
            released_urls: vec![],
        })
    }

    async fn patch(
        &self,
        id: Uuid,
        data: PatchExhibitionData,
    ) -> Result<ExhibitionWritten, ExhibitionRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = exhibitions::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(ExhibitionRepositoryError::NotFound)?;

        let old_gallery = Self::load_gallery(&txn, id).await.map_err(map_db_err)?;

        let mut referenced_before: Vec<String> = existing.main_image.iter().cloned().collect();
        referenced_before.extend(old_gallery.iter().map(|img| img.url.clone()));

        if data.position.is_some_and(Position::is_current) {
            Self::demote_current(&txn, Some(id))
                .await
                .map_err(map_db_err)?;
        }

        let mut model: exhibitions::ActiveModel = existing.clone().into();

        if let Some(title) = data.title {
            model.title = Set(title);
        }
        if let Some(position) = data.position {
            model.position = Set(position.to_stored());
        }
        apply_nullable(&mut model.subtitle, data.subtitle);
        apply_nullable(&mut model.text, data.text);
        apply_nullable(&mut model.main_image, data.main_image);
        apply_nullable(&mut model.author, data.author);
        apply_nullable(&mut model.date, data.date);

        let updated = if model.is_changed() {
            model.update(&txn).await.map_err(map_db_err)?
        } else {
            existing
        };

        let images = match data.images {
            Some(urls) => Self::write_gallery(&txn, id, urls, true)
                .await
                .map_err(map_db_err)?,
            None => old_gallery,
        };

        txn.commit().await.map_err(map_db_err)?;

        let mut referenced_after: Vec<String> = updated.main_image.iter().cloned().collect();
        referenced_after.extend(images.iter().map(|img| img.url.clone()));

        Ok(ExhibitionWritten {
            exhibition: model_to_exhibition(updated),
            images,
            released_urls: released(&referenced_before, &referenced_after),
        })
    }

    async fn replace_images(
        &self,
        id: Uuid,
        urls: Vec<String>,
    ) -> Result<GalleryReplaced, ExhibitionRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = exhibitions::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(ExhibitionRepositoryError::NotFound)?;

        let old_urls: Vec<String> = Self::load_gallery(&txn, id)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|img| img.url)
            .collect();

        let images = Self::write_gallery(&txn, id, urls, true)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        let mut still_referenced: Vec<String> = existing.main_image.into_iter().collect();
        still_referenced.extend(images.iter().map(|img| img.url.clone()));

        Ok(GalleryReplaced {
            released_urls: released(&old_urls, &still_referenced),
            images,
        })
    }

    async fn delete(&self, id: Uuid) -> Result<ExhibitionDeleted, ExhibitionRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = exhibitions::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(ExhibitionRepositoryError::NotFound)?;

        let gallery = Self::load_gallery(&txn, id).await.map_err(map_db_err)?;

        // Gallery rows go with the FK cascade.
        let result = exhibitions::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ExhibitionRepositoryError::NotFound);
        }

        txn.commit().await.map_err(map_db_err)?;

        let mut owned: Vec<String> = existing.main_image.into_iter().collect();
        owned.extend(gallery.into_iter().map(|img| img.url));

        Ok(ExhibitionDeleted {
            id,
            owned_urls: released(&owned, &[]),
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn apply_nullable(column: &mut sea_orm::ActiveValue<Option<String>>, field: PatchField<String>) {
    if let Some(change) = field.into_change() {
        *column = Set(change);
    }
}

fn map_slug_error(e: DbErr) -> ExhibitionRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        ExhibitionRepositoryError::SlugAlreadyExists
    } else {
        ExhibitionRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> ExhibitionRepositoryError {
    ExhibitionRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
