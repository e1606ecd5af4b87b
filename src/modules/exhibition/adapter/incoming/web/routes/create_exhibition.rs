use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::exhibition::application::domain::entities::ExhibitionDetail;
use crate::exhibition::application::ports::incoming::use_cases::{
    CreateExhibitionCommand, CreateExhibitionError,
};
use crate::shared::api::ApiResponse;
use crate::shared::position::Position;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateExhibitionRequest {
    #[schema(example = "Spring Salon")]
    pub title: String,

    /// Optional; derived from the title when omitted or blank.
    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub subtitle: Option<String>,

    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub main_image: Option<String>,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub date: Option<String>,

    /// 0 = current, 1..=999 = past rank, 1000 = archived. Defaults to archived.
    #[serde(default)]
    #[schema(value_type = Option<i32>, example = 0)]
    pub position: Option<Position>,

    /// Gallery URLs in display order.
    #[serde(default)]
    pub images: Vec<String>,
}

impl From<CreateExhibitionRequest> for CreateExhibitionCommand {
    fn from(req: CreateExhibitionRequest) -> Self {
        CreateExhibitionCommand {
            title: req.title,
            slug: req.slug,
            subtitle: req.subtitle,
            text: req.text,
            main_image: req.main_image,
            author: req.author,
            date: req.date,
            position: req.position.unwrap_or_default(),
            images: req.images,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Create an exhibition
///
/// Creating a `position: 0` exhibition archives the previous current one in
/// the same transaction.
#[utoipa::path(
    post,
    path = "/api/exhibitions",
    tag = "exhibitions",
    request_body = CreateExhibitionRequest,
    responses(
        (status = 201, description = "Exhibition created", body = inline(SuccessResponse<ExhibitionDetail>)),
        (status = 400, description = "Missing title or invalid field", body = ErrorResponse),
        (status = 401, description = "No valid admin session", body = ErrorResponse),
        (status = 409, description = "Slug already taken", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
#[post("/api/exhibitions")]
pub async fn create_exhibition_handler(
    _admin: AdminUser,
    req: web::Json<CreateExhibitionRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command: CreateExhibitionCommand = req.into_inner().into();

    match data.exhibition.create.execute(command).await {
        Ok(created) => {
            info!(
                exhibition_id = %created.exhibition.id,
                slug = %created.exhibition.slug,
                "Exhibition created"
            );
            ApiResponse::created(created)
        }

        Err(CreateExhibitionError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(CreateExhibitionError::SlugAlreadyExists) => {
            ApiResponse::conflict("SLUG_ALREADY_EXISTS", "Slug already exists")
        }

        Err(CreateExhibitionError::RepositoryError(e)) => {
            error!("Failed to create exhibition: {}", e);
            ApiResponse::internal_error()
        }
    }
}
