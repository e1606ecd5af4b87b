use actix_web::{get, web, HttpRequest, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::auth::adapter::incoming::web::extractors::extract_access_token;
use crate::auth::application::domain::entities::{AdminIdentity, SessionStatus};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AdminIdentity>,
}

/// Session status
///
/// Always answers 200; anything short of a confirmed session reports
/// `authenticated: false`.
#[utoipa::path(
    get,
    path = "/api/auth/check",
    tag = "auth",
    responses(
        (status = 200, description = "Current session status", body = inline(SuccessResponse<SessionStatusResponse>)),
    )
)]
#[get("/api/auth/check")]
pub async fn check_session_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let status = match extract_access_token(&req) {
        Some(token) => data.auth.check.execute(&token).await,
        None => SessionStatus::Anonymous,
    };

    let body = match status {
        SessionStatus::Authenticated(user) => SessionStatusResponse {
            authenticated: true,
            user: Some(user),
        },
        SessionStatus::Anonymous => SessionStatusResponse {
            authenticated: false,
            user: None,
        },
    };

    ApiResponse::success(body)
}
