use actix_web::{post, web, HttpRequest, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::auth::adapter::incoming::web::cookies::with_cookies;
use crate::auth::adapter::incoming::web::extractors::extract_access_token;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    #[schema(example = "Logged out")]
    pub message: String,
}

/// Admin logout
///
/// Revokes the session at the identity provider when possible and always
/// clears both session cookies.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Cookies cleared", body = inline(SuccessResponse<LogoutResponseBody>)),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let token = extract_access_token(&req);

    data.auth.logout.execute(token.as_deref()).await;

    with_cookies(
        ApiResponse::success(LogoutResponseBody {
            message: "Logged out".to_string(),
        }),
        &data.session_cookies.cleared_cookies(),
    )
}
