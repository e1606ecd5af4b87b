use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Query};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, FromQueryResult, TransactionTrait};
use std::sync::Arc;
use uuid::Uuid;

use super::slide_row::{deck_table, SlideColumn, SlideRow, ALL_COLUMNS};
use crate::carousel::application::domain::entities::{CarouselSlide, SlideDeck};
use crate::carousel::application::ports::outgoing::carousel_repository::{
    CarouselRepository, CarouselRepositoryError, NewSlideData, PatchSlideData, SlideDeleted,
    SlideWritten,
};

#[derive(Clone)]
pub struct CarouselRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CarouselRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CarouselRepository for CarouselRepositoryPostgres {
    async fn create(
        &self,
        deck: SlideDeck,
        data: NewSlideData,
    ) -> Result<CarouselSlide, CarouselRepositoryError> {
        let mut insert = Query::insert();
        insert.into_table(deck_table(deck)).columns([
            SlideColumn::Id,
            SlideColumn::ImageUrl,
            SlideColumn::LinkUrl,
            SlideColumn::Position,
        ]);
        insert
            .values([
                Expr::value(Uuid::new_v4()),
                Expr::value(data.image_url),
                Expr::value(data.link_url),
                Expr::value(data.position),
            ])
            .map_err(|e| CarouselRepositoryError::DatabaseError(e.to_string()))?;
        insert.returning_all();

        let row = SlideRow::find_by_statement(self.db.get_database_backend().build(&insert))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| {
                CarouselRepositoryError::DatabaseError("insert returned no row".to_string())
            })?;

        Ok(row.into())
    }

    async fn patch(
        &self,
        deck: SlideDeck,
        id: Uuid,
        data: PatchSlideData,
    ) -> Result<SlideWritten, CarouselRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;
        let backend = txn.get_database_backend();

        let select = Query::select()
            .columns(ALL_COLUMNS)
            .from(deck_table(deck))
            .and_where(Expr::col(SlideColumn::Id).eq(id))
            .lock_exclusive()
            .to_owned();

        let existing = SlideRow::find_by_statement(backend.build(&select))
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(CarouselRepositoryError::NotFound)?;

        if data.is_empty() {
            txn.commit().await.map_err(map_db_err)?;
            return Ok(SlideWritten {
                slide: existing.into(),
                released_urls: vec![],
            });
        }

        let mut update = Query::update();
        update
            .table(deck_table(deck))
            .and_where(Expr::col(SlideColumn::Id).eq(id));
        if let Some(url) = data.image_url {
            update.value(SlideColumn::ImageUrl, url);
        }
        if let Some(link) = data.link_url {
            update.value(SlideColumn::LinkUrl, link);
        }
        if let Some(position) = data.position {
            update.value(SlideColumn::Position, position);
        }
        update.returning_all();

        let updated = SlideRow::find_by_statement(backend.build(&update))
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(CarouselRepositoryError::NotFound)?;

        txn.commit().await.map_err(map_db_err)?;

        let released_urls = if updated.image_url != existing.image_url {
            vec![existing.image_url]
        } else {
            vec![]
        };

        Ok(SlideWritten {
            slide: updated.into(),
            released_urls,
        })
    }

    async fn delete(
        &self,
        deck: SlideDeck,
        id: Uuid,
    ) -> Result<SlideDeleted, CarouselRepositoryError> {
        let delete = Query::delete()
            .from_table(deck_table(deck))
            .and_where(Expr::col(SlideColumn::Id).eq(id))
            .returning_all()
            .to_owned();

        let removed = SlideRow::find_by_statement(self.db.get_database_backend().build(&delete))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(CarouselRepositoryError::NotFound)?;

        Ok(SlideDeleted {
            id: removed.id,
            owned_urls: vec![removed.image_url],
        })
    }
}

fn map_db_err(e: DbErr) -> CarouselRepositoryError {
    CarouselRepositoryError::DatabaseError(e.to_string())
}
