use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::news::application::domain::entities::PublicNewsList;
use crate::news::application::ports::incoming::use_cases::GetPublicNewsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public news page
///
/// The headline (`position = 0`) is returned separately; archived items are
/// left out.
#[utoipa::path(
    get,
    path = "/api/public/news",
    tag = "public",
    responses(
        (status = 200, description = "Headline and remaining items", body = inline(SuccessResponse<PublicNewsList>)),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
#[get("/api/public/news")]
pub async fn get_public_news_handler(data: web::Data<AppState>) -> impl Responder {
    match data.news.get_public_list.execute().await {
        Ok(list) => ApiResponse::success(list),

        Err(GetPublicNewsError::RepositoryError(e)) => {
            error!("Failed to list public news: {}", e);
            ApiResponse::internal_error()
        }
    }
}
