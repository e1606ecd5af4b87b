use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::{DeletedResponse, ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::news::application::ports::incoming::use_cases::DeleteNewsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a news item
#[utoipa::path(
    delete,
    path = "/api/news/{id}",
    tag = "news",
    params(("id" = Uuid, Path, description = "News id")),
    responses(
        (status = 200, description = "News item deleted", body = inline(SuccessResponse<DeletedResponse>)),
        (status = 401, description = "No valid admin session", body = ErrorResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse),
    )
)]
#[delete("/api/news/{id}")]
pub async fn delete_news_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.news.delete.execute(id).await {
        Ok(id) => {
            info!(news_id = %id, "News item deleted");
            ApiResponse::success(DeletedResponse { id })
        }

        Err(DeleteNewsError::NotFound) => {
            ApiResponse::not_found("NEWS_NOT_FOUND", "News item not found")
        }

        Err(DeleteNewsError::RepositoryError(e)) => {
            error!("Failed to delete news {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
