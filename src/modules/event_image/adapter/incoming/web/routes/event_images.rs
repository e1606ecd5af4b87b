use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{DeletedResponse, ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::event_image::application::domain::entities::EventImage;
use crate::event_image::application::ports::incoming::use_cases::{
    CreateEventImageCommand, CreateEventImageError, DeleteEventImageError, GetEventImagesError,
    UpdateEventImageError,
};
use crate::event_image::application::ports::outgoing::event_image_repository::PatchEventImageData;
use crate::shared::api::ApiResponse;
use crate::shared::patch_field::PatchField;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEventImageRequest {
    pub image_url: String,

    #[serde(default)]
    pub caption: Option<String>,

    #[serde(default)]
    pub position: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEventImageRequest {
    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub caption: PatchField<String>,

    #[serde(default)]
    pub position: Option<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

/// List event images
#[utoipa::path(
    get,
    path = "/api/event-images",
    tag = "event-images",
    responses(
        (status = 200, description = "Bare array, position ascending", body = [EventImage]),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
#[get("/api/event-images")]
pub async fn get_event_images_handler(data: web::Data<AppState>) -> impl Responder {
    match data.event_image.list.execute().await {
        Ok(images) => ApiResponse::list(images),

        Err(GetEventImagesError::RepositoryError(e)) => {
            error!("Failed to list event images: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Add an event image
#[utoipa::path(
    post,
    path = "/api/event-images",
    tag = "event-images",
    request_body = CreateEventImageRequest,
    responses(
        (status = 201, description = "Event image created", body = inline(SuccessResponse<EventImage>)),
        (status = 400, description = "Missing image_url", body = ErrorResponse),
        (status = 401, description = "No valid admin session", body = ErrorResponse),
    )
)]
#[post("/api/event-images")]
pub async fn create_event_image_handler(
    _admin: AdminUser,
    req: web::Json<CreateEventImageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let command = CreateEventImageCommand {
        image_url: req.image_url,
        caption: req.caption,
        position: req.position,
    };

    match data.event_image.create.execute(command).await {
        Ok(image) => ApiResponse::created(image),

        Err(CreateEventImageError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(CreateEventImageError::RepositoryError(e)) => {
            error!("Failed to create event image: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Update an event image
#[utoipa::path(
    put,
    path = "/api/event-images/{id}",
    tag = "event-images",
    params(("id" = Uuid, Path, description = "Event image id")),
    request_body = UpdateEventImageRequest,
    responses(
        (status = 200, description = "Event image updated", body = inline(SuccessResponse<EventImage>)),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 401, description = "No valid admin session", body = ErrorResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse),
    )
)]
#[put("/api/event-images/{id}")]
pub async fn update_event_image_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateEventImageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let req = req.into_inner();
    let patch = PatchEventImageData {
        image_url: req.image_url,
        caption: req.caption,
        position: req.position,
    };

    match data.event_image.update.execute(id, patch).await {
        Ok(image) => ApiResponse::success(image),

        Err(UpdateEventImageError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(UpdateEventImageError::NotFound) => {
            ApiResponse::not_found("EVENT_IMAGE_NOT_FOUND", "Event image not found")
        }

        Err(UpdateEventImageError::RepositoryError(e)) => {
            error!("Failed to update event image {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

/// Delete an event image
#[utoipa::path(
    delete,
    path = "/api/event-images/{id}",
    tag = "event-images",
    params(("id" = Uuid, Path, description = "Event image id")),
    responses(
        (status = 200, description = "Event image deleted", body = inline(SuccessResponse<DeletedResponse>)),
        (status = 401, description = "No valid admin session", body = ErrorResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse),
    )
)]
#[delete("/api/event-images/{id}")]
pub async fn delete_event_image_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.event_image.delete.execute(id).await {
        Ok(id) => ApiResponse::success(DeletedResponse { id }),

        Err(DeleteEventImageError::NotFound) => {
            ApiResponse::not_found("EVENT_IMAGE_NOT_FOUND", "Event image not found")
        }

        Err(DeleteEventImageError::RepositoryError(e)) => {
            error!("Failed to delete event image {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
