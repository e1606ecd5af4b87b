use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::exhibition::application::domain::entities::Exhibition;
use crate::exhibition::application::ports::incoming::use_cases::GetExhibitionsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List exhibitions (admin)
///
/// Every exhibition, archived ones included, in display order: current
/// first, then past by rank descending, archived last.
#[utoipa::path(
    get,
    path = "/api/exhibitions",
    tag = "exhibitions",
    responses(
        (status = 200, description = "Bare array of exhibitions", body = [Exhibition]),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
#[get("/api/exhibitions")]
pub async fn get_exhibitions_handler(data: web::Data<AppState>) -> impl Responder {
    match data.exhibition.get_list.execute().await {
        Ok(exhibitions) => ApiResponse::list(exhibitions),

        Err(GetExhibitionsError::RepositoryError(e)) => {
            error!("Failed to list exhibitions: {}", e);
            ApiResponse::internal_error()
        }
    }
}
