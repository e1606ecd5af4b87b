// src/modules/exhibition/application/domain/entities.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::multimedia::application::domain::entities::split_by_kind;
use crate::shared::position::{split_current, Position};

pub const EXHIBITION_SLUG_FALLBACK_PREFIX: &str = "izlojba";

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Exhibition {
    pub id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub text: Option<String>,
    pub main_image: Option<String>,
    pub author: Option<String>,
    /// Free-form display date, e.g. "12 March – 4 April 2025".
    pub date: Option<String>,
    #[schema(value_type = i32, example = 0)]
    pub position: Position,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ExhibitionImage {
    pub id: Uuid,
    pub exhibition_id: Uuid,
    pub url: String,
    pub image_order: i32,
}

/// Admin view of a single exhibition.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExhibitionDetail {
    #[serde(flatten)]
    pub exhibition: Exhibition,
    pub images: Vec<ExhibitionImage>,
}

//
// ──────────────────────────────────────────────────────────
// Public views
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ExhibitionCard {
    pub id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub main_image: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub slug: String,
    #[schema(value_type = i32)]
    pub position: Position,
}

impl From<Exhibition> for ExhibitionCard {
    fn from(e: Exhibition) -> Self {
        ExhibitionCard {
            id: e.id,
            title: e.title,
            subtitle: e.subtitle,
            main_image: e.main_image,
            author: e.author,
            date: e.date,
            slug: e.slug,
            position: e.position,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublicExhibitionList {
    pub current: Option<ExhibitionCard>,
    pub past: Vec<ExhibitionCard>,
}

impl PublicExhibitionList {
    pub fn from_exhibitions(exhibitions: Vec<Exhibition>) -> Self {
        let (current, past) = split_current(exhibitions, |e| e.position);

        PublicExhibitionList {
            current: current.map(ExhibitionCard::from),
            past: past.into_iter().map(ExhibitionCard::from).collect(),
        }
    }
}

/// Public detail page: gallery entries split into images and video links.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublicExhibitionDetail {
    #[serde(flatten)]
    pub exhibition: Exhibition,
    pub images: Vec<String>,
    pub videos: Vec<String>,
}

impl PublicExhibitionDetail {
    pub fn new(exhibition: Exhibition, mut gallery: Vec<ExhibitionImage>) -> Self {
        gallery.sort_by_key(|img| img.image_order);
        let (images, videos) = split_by_kind(gallery.into_iter().map(|img| img.url));

        PublicExhibitionDetail {
            exhibition,
            images,
            videos,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn exhibition(title: &str, position: Position) -> Exhibition {
        let now = Utc::now();
        Exhibition {
            id: Uuid::new_v4(),
            title: title.to_string(),
            subtitle: None,
            text: Some("Catalogue text".to_string()),
            main_image: Some(format!(
                "https://res.cloudinary.com/demo/image/upload/v1/gallery/{}.jpg",
                title.to_lowercase()
            )),
            author: Some("Ana Petrova".to_string()),
            date: Some("March 2025".to_string()),
            position,
            slug: crate::shared::slug::slugify(title),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn gallery_image(exhibition_id: Uuid, url: &str, image_order: i32) -> ExhibitionImage {
        ExhibitionImage {
            id: Uuid::new_v4(),
            exhibition_id,
            url: url.to_string(),
            image_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn public_list_picks_current_and_orders_past() {
        let list = PublicExhibitionList::from_exhibitions(vec![
            exhibition("Three", Position::Past(3)),
            exhibition("Now", Position::Current),
            exhibition("Hidden", Position::Archived),
            exhibition("Five", Position::Past(5)),
        ]);

        assert_eq!(list.current.map(|c| c.title), Some("Now".to_string()));
        assert_eq!(
            list.past.iter().map(|c| c.title.as_str()).collect::<Vec<_>>(),
            vec!["Five", "Three"]
        );
    }

    #[test]
    fn public_list_without_current() {
        let list = PublicExhibitionList::from_exhibitions(vec![exhibition(
            "Old",
            Position::Past(1),
        )]);

        assert!(list.current.is_none());
        assert_eq!(list.past.len(), 1);
    }

    #[test]
    fn public_detail_splits_videos_and_keeps_order() {
        let e = exhibition("Show", Position::Current);
        let gallery = vec![
            gallery_image(e.id, "https://cdn.example/b.jpg", 2),
            gallery_image(e.id, "https://www.youtube.com/watch?v=abc", 1),
            gallery_image(e.id, "https://cdn.example/a.jpg", 0),
        ];

        let detail = PublicExhibitionDetail::new(e, gallery);

        assert_eq!(
            detail.images,
            vec!["https://cdn.example/a.jpg", "https://cdn.example/b.jpg"]
        );
        assert_eq!(detail.videos, vec!["https://www.youtube.com/watch?v=abc"]);
    }

    #[test]
    fn detail_serializes_flat() {
        let e = exhibition("Show", Position::Past(4));
        let json = serde_json::to_value(ExhibitionDetail {
            exhibition: e,
            images: vec![],
        })
        .unwrap();

        assert_eq!(json["title"], "Show");
        assert_eq!(json["position"], 4);
        assert!(json["images"].is_array());
    }
}
