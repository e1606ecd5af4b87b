use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::exhibition::application::domain::entities::ExhibitionDetail;
use crate::exhibition::application::ports::incoming::use_cases::GetSingleExhibitionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get an exhibition with its gallery (admin)
#[utoipa::path(
    get,
    path = "/api/exhibitions/{id}",
    tag = "exhibitions",
    params(("id" = Uuid, Path, description = "Exhibition id")),
    responses(
        (status = 200, description = "Exhibition found", body = inline(SuccessResponse<ExhibitionDetail>)),
        (status = 404, description = "Unknown id", body = ErrorResponse),
    )
)]
#[get("/api/exhibitions/{id}")]
pub async fn get_single_exhibition_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.exhibition.get_single.execute(id).await {
        Ok(detail) => ApiResponse::success(detail),

        Err(GetSingleExhibitionError::NotFound) => {
            ApiResponse::not_found("EXHIBITION_NOT_FOUND", "Exhibition not found")
        }

        Err(GetSingleExhibitionError::RepositoryError(e)) => {
            error!("Failed to load exhibition {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
