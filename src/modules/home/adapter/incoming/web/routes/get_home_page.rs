use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::home::application::domain::entities::HomePage;
use crate::home::application::ports::incoming::get_home_page::GetHomePageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public landing page data
#[utoipa::path(
    get,
    path = "/api/public/home",
    tag = "public",
    responses(
        (status = 200, description = "Current exhibition, headline news and both carousels", body = inline(SuccessResponse<HomePage>)),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
#[get("/api/public/home")]
pub async fn get_home_page_handler(data: web::Data<AppState>) -> impl Responder {
    match data.home.execute().await {
        Ok(page) => ApiResponse::success(page),

        Err(GetHomePageError::RepositoryError(e)) => {
            error!("Failed to build home page: {}", e);
            ApiResponse::internal_error()
        }
    }
}
