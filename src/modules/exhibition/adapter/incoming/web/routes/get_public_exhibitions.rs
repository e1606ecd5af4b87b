use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::exhibition::application::domain::entities::PublicExhibitionList;
use crate::exhibition::application::ports::incoming::use_cases::GetPublicExhibitionsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public exhibitions page
///
/// The current exhibition and the past ones by rank; archived exhibitions
/// are never listed. Read from the store on every request.
#[utoipa::path(
    get,
    path = "/api/public/exhibitions",
    tag = "public",
    responses(
        (status = 200, description = "Current and past exhibitions", body = inline(SuccessResponse<PublicExhibitionList>)),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
#[get("/api/public/exhibitions")]
pub async fn get_public_exhibitions_handler(data: web::Data<AppState>) -> impl Responder {
    match data.exhibition.get_public_list.execute().await {
        Ok(list) => ApiResponse::success(list),

        Err(GetPublicExhibitionsError::RepositoryError(e)) => {
            error!("Failed to list public exhibitions: {}", e);
            ApiResponse::internal_error()
        }
    }
}
