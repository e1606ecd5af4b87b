//! Request bodies and response mapping shared by the desktop and mobile
//! slide routes.

use actix_web::HttpResponse;
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::DeletedResponse;
use crate::carousel::application::domain::entities::SlideDeck;
use crate::carousel::application::ports::incoming::use_cases::{
    CreateSlideCommand, CreateSlideError, DeleteSlideError, GetSlidesError, UpdateSlideError,
};
use crate::carousel::application::ports::outgoing::carousel_repository::PatchSlideData;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSlideRequest {
    #[schema(example = "https://res.cloudinary.com/demo/image/upload/v1/gallery/slide.jpg")]
    pub image_url: String,

    #[schema(example = "/izlozbe/prolecni-salon")]
    pub link_url: String,

    /// Ascending sort key; defaults to 0.
    #[serde(default)]
    pub position: Option<i32>,
}

impl From<CreateSlideRequest> for CreateSlideCommand {
    fn from(req: CreateSlideRequest) -> Self {
        CreateSlideCommand {
            image_url: req.image_url,
            link_url: req.link_url,
            position: req.position,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSlideRequest {
    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub link_url: Option<String>,

    #[serde(default)]
    pub position: Option<i32>,
}

impl From<UpdateSlideRequest> for PatchSlideData {
    fn from(req: UpdateSlideRequest) -> Self {
        PatchSlideData {
            image_url: req.image_url,
            link_url: req.link_url,
            position: req.position,
        }
    }
}

pub(super) async fn list(deck: SlideDeck, data: &AppState) -> HttpResponse {
    match data.carousel.list.execute(deck).await {
        Ok(slides) => ApiResponse::list(slides),

        Err(GetSlidesError::RepositoryError(e)) => {
            error!("Failed to list {} slides: {}", deck.label(), e);
            ApiResponse::internal_error()
        }
    }
}

pub(super) async fn create(
    deck: SlideDeck,
    req: CreateSlideRequest,
    data: &AppState,
) -> HttpResponse {
    match data.carousel.create.execute(deck, req.into()).await {
        Ok(slide) => ApiResponse::created(slide),

        Err(CreateSlideError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(CreateSlideError::RepositoryError(e)) => {
            error!("Failed to create {} slide: {}", deck.label(), e);
            ApiResponse::internal_error()
        }
    }
}

pub(super) async fn update(
    deck: SlideDeck,
    id: Uuid,
    req: UpdateSlideRequest,
    data: &AppState,
) -> HttpResponse {
    match data.carousel.update.execute(deck, id, req.into()).await {
        Ok(slide) => ApiResponse::success(slide),

        Err(UpdateSlideError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(UpdateSlideError::NotFound) => {
            ApiResponse::not_found("SLIDE_NOT_FOUND", "Slide not found")
        }

        Err(UpdateSlideError::RepositoryError(e)) => {
            error!("Failed to update {} slide {}: {}", deck.label(), id, e);
            ApiResponse::internal_error()
        }
    }
}

pub(super) async fn delete(deck: SlideDeck, id: Uuid, data: &AppState) -> HttpResponse {
    match data.carousel.delete.execute(deck, id).await {
        Ok(id) => ApiResponse::success(DeletedResponse { id }),

        Err(DeleteSlideError::NotFound) => {
            ApiResponse::not_found("SLIDE_NOT_FOUND", "Slide not found")
        }

        Err(DeleteSlideError::RepositoryError(e)) => {
            error!("Failed to delete {} slide {}: {}", deck.label(), id, e);
            ApiResponse::internal_error()
        }
    }
}
