use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Picture shown on the public events page.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EventImage {
    pub id: Uuid,
    pub image_url: String,
    pub caption: Option<String>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn event_image(image_url: &str, position: i32) -> EventImage {
        EventImage {
            id: Uuid::new_v4(),
            image_url: image_url.to_string(),
            caption: None,
            position,
            created_at: Utc::now(),
        }
    }
}
