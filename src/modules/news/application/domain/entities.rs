// src/modules/news/application/domain/entities.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::position::Position;

pub const NEWS_SLUG_FALLBACK_PREFIX: &str = "novina";

/// A news item. `position = 0` marks the headline.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct NewsItem {
    pub id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub text: Option<String>,
    pub main_image: Option<String>,
    pub date: Option<String>,
    #[schema(value_type = i32, example = 0)]
    pub position: Position,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct NewsCard {
    pub id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub main_image: Option<String>,
    pub date: Option<String>,
    pub slug: String,
    #[schema(value_type = i32)]
    pub position: Position,
}

impl From<NewsItem> for NewsCard {
    fn from(n: NewsItem) -> Self {
        NewsCard {
            id: n.id,
            title: n.title,
            subtitle: n.subtitle,
            main_image: n.main_image,
            date: n.date,
            slug: n.slug,
            position: n.position,
        }
    }
}

/// Public news page: the headline plus the remaining visible items.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublicNewsList {
    pub headline: Option<NewsCard>,
    pub items: Vec<NewsCard>,
}

/// News display order: headline first, then newest first, archived last.
/// Past ranks do not reorder news.
pub fn sort_for_display(items: &mut [NewsItem]) {
    fn group(position: Position) -> u8 {
        match position {
            Position::Current => 0,
            Position::Past(_) => 1,
            Position::Archived => 2,
        }
    }

    items.sort_by(|a, b| {
        group(a.position)
            .cmp(&group(b.position))
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

impl PublicNewsList {
    pub fn from_items(mut items: Vec<NewsItem>) -> Self {
        items.retain(|n| n.position.is_public());
        sort_for_display(&mut items);

        let headline = match items.first() {
            Some(first) if first.position.is_current() => Some(items.remove(0)),
            _ => None,
        };
        let rest = items;

        PublicNewsList {
            headline: headline.map(NewsCard::from),
            items: rest.into_iter().map(NewsCard::from).collect(),
        }
    }
}
