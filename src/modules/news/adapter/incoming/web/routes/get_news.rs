use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::news::application::domain::entities::NewsItem;
use crate::news::application::ports::incoming::use_cases::GetNewsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List news (admin)
#[utoipa::path(
    get,
    path = "/api/news",
    tag = "news",
    responses(
        (status = 200, description = "Bare array of news items in display order", body = [NewsItem]),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
#[get("/api/news")]
pub async fn get_news_handler(data: web::Data<AppState>) -> impl Responder {
    match data.news.get_list.execute().await {
        Ok(items) => ApiResponse::list(items),

        Err(GetNewsError::RepositoryError(e)) => {
            error!("Failed to list news: {}", e);
            ApiResponse::internal_error()
        }
    }
}
