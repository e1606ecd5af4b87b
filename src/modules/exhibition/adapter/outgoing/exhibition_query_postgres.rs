// src/modules/exhibition/adapter/outgoing/exhibition_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::exhibition::adapter::outgoing::sea_orm_entity::{exhibition_images, exhibitions};
use crate::exhibition::application::domain::entities::{Exhibition, ExhibitionImage};
use crate::exhibition::application::ports::outgoing::exhibition_query::{
    ExhibitionQuery, ExhibitionQueryError,
};
use crate::shared::position::Position;

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct ExhibitionQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExhibitionQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExhibitionQuery for ExhibitionQueryPostgres {
    async fn list_all(&self) -> Result<Vec<Exhibition>, ExhibitionQueryError> {
        let rows = exhibitions::Entity::find()
            .order_by_desc(exhibitions::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(in_display_order(rows))
    }

    async fn list_public(&self) -> Result<Vec<Exhibition>, ExhibitionQueryError> {
        let rows = exhibitions::Entity::find()
            .filter(exhibitions::Column::Position.ne(Position::ARCHIVED_VALUE))
            .order_by_desc(exhibitions::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(in_display_order(rows))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Exhibition, ExhibitionQueryError> {
        exhibitions::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_exhibition)
            .ok_or(ExhibitionQueryError::NotFound)
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Exhibition, ExhibitionQueryError> {
        let normalized_slug = slug.trim().to_lowercase();

        exhibitions::Entity::find()
            .filter(exhibitions::Column::Slug.eq(normalized_slug))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_exhibition)
            .ok_or(ExhibitionQueryError::NotFound)
    }

    async fn list_images(
        &self,
        exhibition_id: Uuid,
    ) -> Result<Vec<ExhibitionImage>, ExhibitionQueryError> {
        let rows = exhibition_images::Entity::find()
            .filter(exhibition_images::Column::ExhibitionId.eq(exhibition_id))
            .order_by_asc(exhibition_images::Column::ImageOrder)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(image_model_to_domain).collect())
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, ExhibitionQueryError> {
        let normalized_slug = slug.trim().to_lowercase();

        let found = exhibitions::Entity::find()
            .filter(exhibitions::Column::Slug.eq(normalized_slug))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.is_some())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Rows arrive newest first; the stable sort keeps that order within a rank.
fn in_display_order(rows: Vec<exhibitions::Model>) -> Vec<Exhibition> {
    let mut exhibitions: Vec<Exhibition> = rows.into_iter().map(model_to_exhibition).collect();
    exhibitions.sort_by_key(|e| e.position);
    exhibitions
}

pub(crate) fn model_to_exhibition(model: exhibitions::Model) -> Exhibition {
    Exhibition {
        id: model.id,
        title: model.title,
        subtitle: model.subtitle,
        text: model.text,
        main_image: model.main_image,
        author: model.author,
        date: model.date,
        position: Position::from_stored(model.position),
        slug: model.slug,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

pub(crate) fn image_model_to_domain(model: exhibition_images::Model) -> ExhibitionImage {
    ExhibitionImage {
        id: model.id,
        exhibition_id: model.exhibition_id,
        url: model.url,
        image_order: model.image_order,
    }
}

fn map_db_err(e: DbErr) -> ExhibitionQueryError {
    ExhibitionQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
