use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::news::application::domain::entities::NewsItem;
use crate::news::application::ports::incoming::use_cases::GetPublicSingleNewsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public news item by slug
#[utoipa::path(
    get,
    path = "/api/public/news/{slug}",
    tag = "public",
    params(("slug" = String, Path, description = "News slug")),
    responses(
        (status = 200, description = "News item", body = inline(SuccessResponse<NewsItem>)),
        (status = 404, description = "Unknown or archived", body = ErrorResponse),
    )
)]
#[get("/api/public/news/{slug}")]
pub async fn get_public_single_news_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.news.get_public_single.execute(&slug).await {
        Ok(item) => ApiResponse::success(item),

        Err(GetPublicSingleNewsError::NotFound) => {
            ApiResponse::not_found("NEWS_NOT_FOUND", "News item not found")
        }

        Err(GetPublicSingleNewsError::RepositoryError(e)) => {
            error!("Failed to load public news '{}': {}", slug, e);
            ApiResponse::internal_error()
        }
    }
}
