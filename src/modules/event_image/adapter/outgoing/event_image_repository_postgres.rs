use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::event_image::adapter::outgoing::sea_orm_entity::event_images;
use crate::event_image::application::domain::entities::EventImage;
use crate::event_image::application::ports::outgoing::event_image_repository::{
    EventImageRepository, EventImageRepositoryError, EventImageWritten, NewEventImageData,
    PatchEventImageData,
};

#[derive(Clone)]
pub struct EventImageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EventImageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventImageRepository for EventImageRepositoryPostgres {
    async fn list(&self) -> Result<Vec<EventImage>, EventImageRepositoryError> {
        let rows = event_images::Entity::find()
            .order_by_asc(event_images::Column::Position)
            .order_by_asc(event_images::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_event_image).collect())
    }

    async fn create(
        &self,
        data: NewEventImageData,
    ) -> Result<EventImage, EventImageRepositoryError> {
        let model = event_images::ActiveModel {
            id: Set(Uuid::new_v4()),
            image_url: Set(data.image_url),
            caption: Set(data.caption),
            position: Set(data.position),
            created_at: Set(Utc::now().fixed_offset()),
        }
        .insert(&*self.db)
        .await
        .map_err(map_db_err)?;

        Ok(model_to_event_image(model))
    }

    async fn patch(
        &self,
        id: Uuid,
        data: PatchEventImageData,
    ) -> Result<EventImageWritten, EventImageRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = event_images::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(EventImageRepositoryError::NotFound)?;

        let mut model: event_images::ActiveModel = existing.clone().into();
        if let Some(url) = data.image_url {
            model.image_url = Set(url);
        }
        if let Some(caption) = data.caption.into_change() {
            model.caption = Set(caption);
        }
        if let Some(position) = data.position {
            model.position = Set(position);
        }

        let updated = if model.is_changed() {
            model.update(&txn).await.map_err(map_db_err)?
        } else {
            existing.clone()
        };

        txn.commit().await.map_err(map_db_err)?;

        let released_urls = if updated.image_url != existing.image_url {
            vec![existing.image_url]
        } else {
            vec![]
        };

        Ok(EventImageWritten {
            image: model_to_event_image(updated),
            released_urls,
        })
    }

    async fn delete(&self, id: Uuid) -> Result<EventImage, EventImageRepositoryError> {
        let existing = event_images::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(EventImageRepositoryError::NotFound)?;

        let result = event_images::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(EventImageRepositoryError::NotFound);
        }

        Ok(model_to_event_image(existing))
    }
}

fn model_to_event_image(model: event_images::Model) -> EventImage {
    EventImage {
        id: model.id,
        image_url: model.image_url,
        caption: model.caption,
        position: model.position,
        created_at: model.created_at.into(),
    }
}

fn map_db_err(e: DbErr) -> EventImageRepositoryError {
    EventImageRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::patch_field::PatchField;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn row(image_url: &str, position: i32) -> event_images::Model {
        event_images::Model {
            id: Uuid::new_v4(),
            image_url: image_url.to_string(),
            caption: Some("Vernissage".to_string()),
            position,
            created_at: Utc::now().fixed_offset(),
        }
    }

    fn repo(db: MockDatabase) -> EventImageRepositoryPostgres {
        EventImageRepositoryPostgres::new(Arc::new(db.into_connection()))
    }

    #[tokio::test]
    async fn test_list_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row("a.jpg", 0), row("b.jpg", 1)]]);

        let images = repo(db).list().await.unwrap();

        assert_eq!(images.len(), 2);
        assert_eq!(images[0].caption.as_deref(), Some("Vernissage"));
    }

    #[tokio::test]
    async fn test_clearing_caption_keeps_image() {
        let existing = row("a.jpg", 0);
        let mut updated = existing.clone();
        updated.caption = None;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing]])
            .append_query_results([vec![updated]]);

        let written = repo(db)
            .patch(
                Uuid::new_v4(),
                PatchEventImageData {
                    caption: PatchField::Null,
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(written.image.caption.is_none());
        assert!(written.released_urls.is_empty());
    }

    #[tokio::test]
    async fn test_new_image_releases_old_url() {
        let existing = row("old.jpg", 0);
        let mut updated = existing.clone();
        updated.image_url = "new.jpg".to_string();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing]])
            .append_query_results([vec![updated]]);

        let written = repo(db)
            .patch(
                Uuid::new_v4(),
                PatchEventImageData {
                    image_url: Some("new.jpg".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(written.released_urls, vec!["old.jpg"]);
    }

    #[tokio::test]
    async fn test_delete_returns_removed_row() {
        let existing = row("gone.jpg", 3);
        let id = existing.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }]);

        let removed = repo(db).delete(id).await.unwrap();
        assert_eq!(removed.image_url, "gone.jpg");
    }

    #[tokio::test]
    async fn test_delete_unknown_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<event_images::Model>::new()]);

        let err = repo(db).delete(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err, EventImageRepositoryError::NotFound);
    }
}
