// src/modules/carousel/application/domain/entities.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Which of the two independent slide tables a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDeck {
    Desktop,
    Mobile,
}

impl SlideDeck {
    pub fn table_name(self) -> &'static str {
        match self {
            SlideDeck::Desktop => "carousel_slides",
            SlideDeck::Mobile => "carousel_mobile_slides",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SlideDeck::Desktop => "carousel",
            SlideDeck::Mobile => "carousel-mobile",
        }
    }
}

/// Home page slide. `position` is a plain ascending sort key.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CarouselSlide {
    pub id: Uuid,
    #[schema(example = "https://res.cloudinary.com/demo/image/upload/v1/gallery/slide.jpg")]
    pub image_url: String,
    #[schema(example = "/izlozbe/prolecni-salon")]
    pub link_url: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decks_map_to_separate_tables() {
        assert_ne!(SlideDeck::Desktop.table_name(), SlideDeck::Mobile.table_name());
        assert_eq!(SlideDeck::Mobile.label(), "carousel-mobile");
    }
}
