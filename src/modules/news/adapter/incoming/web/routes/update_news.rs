use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::news::application::domain::entities::NewsItem;
use crate::news::application::ports::incoming::use_cases::UpdateNewsError;
use crate::news::application::ports::outgoing::news_repository::PatchNewsData;
use crate::shared::api::ApiResponse;
use crate::shared::patch_field::PatchField;
use crate::shared::position::Position;
use crate::AppState;

/// Partial update; `null` clears a nullable field.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateNewsRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub subtitle: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub text: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub main_image: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub date: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub position: Option<Position>,
}

impl From<UpdateNewsRequest> for PatchNewsData {
    fn from(req: UpdateNewsRequest) -> Self {
        PatchNewsData {
            title: req.title,
            subtitle: req.subtitle,
            text: req.text,
            main_image: req.main_image,
            date: req.date,
            position: req.position,
        }
    }
}

/// Update a news item
#[utoipa::path(
    put,
    path = "/api/news/{id}",
    tag = "news",
    params(("id" = Uuid, Path, description = "News id")),
    request_body = UpdateNewsRequest,
    responses(
        (status = 200, description = "News item updated", body = inline(SuccessResponse<NewsItem>)),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 401, description = "No valid admin session", body = ErrorResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse),
    )
)]
#[put("/api/news/{id}")]
pub async fn update_news_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateNewsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.news.update.execute(id, req.into_inner().into()).await {
        Ok(item) => ApiResponse::success(item),

        Err(UpdateNewsError::Validation(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),

        Err(UpdateNewsError::NotFound) => {
            ApiResponse::not_found("NEWS_NOT_FOUND", "News item not found")
        }

        Err(UpdateNewsError::RepositoryError(e)) => {
            error!("Failed to update news {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
