use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::exhibition::application::domain::entities::PublicExhibitionDetail;
use crate::exhibition::application::ports::incoming::use_cases::GetPublicSingleExhibitionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public exhibition page by slug
///
/// Archived exhibitions answer 404 even when the slug exists.
#[utoipa::path(
    get,
    path = "/api/public/exhibitions/{slug}",
    tag = "public",
    params(("slug" = String, Path, description = "Exhibition slug")),
    responses(
        (status = 200, description = "Exhibition with images and video links", body = inline(SuccessResponse<PublicExhibitionDetail>)),
        (status = 404, description = "Unknown or archived", body = ErrorResponse),
    )
)]
#[get("/api/public/exhibitions/{slug}")]
pub async fn get_public_single_exhibition_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.exhibition.get_public_single.execute(&slug).await {
        Ok(detail) => ApiResponse::success(detail),

        Err(GetPublicSingleExhibitionError::NotFound) => {
            ApiResponse::not_found("EXHIBITION_NOT_FOUND", "Exhibition not found")
        }

        Err(GetPublicSingleExhibitionError::RepositoryError(e)) => {
            error!("Failed to load public exhibition '{}': {}", slug, e);
            ApiResponse::internal_error()
        }
    }
}
