use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::Alias;
use sea_orm::{DeriveIden, FromQueryResult};
use uuid::Uuid;

use crate::carousel::application::domain::entities::{CarouselSlide, SlideDeck};

/// Columns shared by `carousel_slides` and `carousel_mobile_slides`.
#[derive(DeriveIden, Clone, Copy)]
pub(super) enum SlideColumn {
    Id,
    ImageUrl,
    LinkUrl,
    Position,
    CreatedAt,
}

pub(super) const ALL_COLUMNS: [SlideColumn; 5] = [
    SlideColumn::Id,
    SlideColumn::ImageUrl,
    SlideColumn::LinkUrl,
    SlideColumn::Position,
    SlideColumn::CreatedAt,
];

pub(super) fn deck_table(deck: SlideDeck) -> Alias {
    Alias::new(deck.table_name())
}

#[derive(Debug, Clone, FromQueryResult)]
pub(super) struct SlideRow {
    pub id: Uuid,
    pub image_url: String,
    pub link_url: String,
    pub position: i32,
    pub created_at: DateTimeWithTimeZone,
}

impl From<SlideRow> for CarouselSlide {
    fn from(row: SlideRow) -> Self {
        CarouselSlide {
            id: row.id,
            image_url: row.image_url,
            link_url: row.link_url,
            position: row.position,
            created_at: row.created_at.into(),
        }
    }
}
