use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use super::slides::{self, CreateSlideRequest, UpdateSlideRequest};
use crate::api::schemas::{DeletedResponse, ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::carousel::application::domain::entities::{CarouselSlide, SlideDeck};
use crate::AppState;

/// List mobile carousel slides
#[utoipa::path(
    get,
    path = "/api/carousel-mobile",
    tag = "carousel",
    responses(
        (status = 200, description = "Bare array of slides, position ascending", body = [CarouselSlide]),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
#[get("/api/carousel-mobile")]
pub async fn get_carousel_mobile_handler(data: web::Data<AppState>) -> impl Responder {
    slides::list(SlideDeck::Mobile, &data).await
}

/// Create a mobile carousel slide
#[utoipa::path(
    post,
    path = "/api/carousel-mobile",
    tag = "carousel",
    request_body = CreateSlideRequest,
    responses(
        (status = 201, description = "Slide created", body = inline(SuccessResponse<CarouselSlide>)),
        (status = 400, description = "Missing image_url or link_url", body = ErrorResponse),
        (status = 401, description = "No valid admin session", body = ErrorResponse),
    )
)]
#[post("/api/carousel-mobile")]
pub async fn create_carousel_mobile_slide_handler(
    _admin: AdminUser,
    req: web::Json<CreateSlideRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    slides::create(SlideDeck::Mobile, req.into_inner(), &data).await
}

/// Update a mobile carousel slide
#[utoipa::path(
    put,
    path = "/api/carousel-mobile/{id}",
    tag = "carousel",
    params(("id" = Uuid, Path, description = "Slide id")),
    request_body = UpdateSlideRequest,
    responses(
        (status = 200, description = "Slide updated", body = inline(SuccessResponse<CarouselSlide>)),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 401, description = "No valid admin session", body = ErrorResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse),
    )
)]
#[put("/api/carousel-mobile/{id}")]
pub async fn update_carousel_mobile_slide_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateSlideRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    slides::update(SlideDeck::Mobile, path.into_inner(), req.into_inner(), &data).await
}

/// Delete a mobile carousel slide
#[utoipa::path(
    delete,
    path = "/api/carousel-mobile/{id}",
    tag = "carousel",
    params(("id" = Uuid, Path, description = "Slide id")),
    responses(
        (status = 200, description = "Slide deleted", body = inline(SuccessResponse<DeletedResponse>)),
        (status = 401, description = "No valid admin session", body = ErrorResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse),
    )
)]
#[delete("/api/carousel-mobile/{id}")]
pub async fn delete_carousel_mobile_slide_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    slides::delete(SlideDeck::Mobile, path.into_inner(), &data).await
}
