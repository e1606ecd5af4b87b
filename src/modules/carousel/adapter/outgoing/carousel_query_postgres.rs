use async_trait::async_trait;
use sea_orm::sea_query::{Order, Query};
use sea_orm::{ConnectionTrait, DatabaseConnection, FromQueryResult};
use std::sync::Arc;

use super::slide_row::{deck_table, SlideColumn, SlideRow, ALL_COLUMNS};
use crate::carousel::application::domain::entities::{CarouselSlide, SlideDeck};
use crate::carousel::application::ports::outgoing::carousel_query::{
    CarouselQuery, CarouselQueryError,
};

#[derive(Clone)]
pub struct CarouselQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CarouselQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CarouselQuery for CarouselQueryPostgres {
    async fn list(&self, deck: SlideDeck) -> Result<Vec<CarouselSlide>, CarouselQueryError> {
        let select = Query::select()
            .columns(ALL_COLUMNS)
            .from(deck_table(deck))
            .order_by(SlideColumn::Position, Order::Asc)
            .order_by(SlideColumn::CreatedAt, Order::Asc)
            .to_owned();

        let rows = SlideRow::find_by_statement(self.db.get_database_backend().build(&select))
            .all(&*self.db)
            .await
            .map_err(|e| CarouselQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(CarouselSlide::from).collect())
    }
}
