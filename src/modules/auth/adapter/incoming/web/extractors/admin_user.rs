use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;

use crate::auth::adapter::incoming::web::cookies::ACCESS_TOKEN_COOKIE;
use crate::auth::application::domain::entities::{AdminIdentity, SessionStatus};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// An authenticated administrator. Handlers that take this extractor are
/// never entered without a session the identity provider confirmed.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub identity: AdminIdentity,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn unauthorized(message: &str) -> ActixError {
    create_api_error(ApiResponse::unauthorized("UNAUTHORIZED", message))
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = extract_access_token(req);

        Box::pin(async move {
            let state = state.ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;
            let token = token.ok_or_else(|| unauthorized("Authentication required"))?;

            match state.auth.check.execute(&token).await {
                SessionStatus::Authenticated(identity) => Ok(AdminUser { identity }),
                SessionStatus::Anonymous => Err(unauthorized("Invalid or expired session")),
            }
        })
    }
}

/// Session cookie first, then `Authorization: Bearer <token>`.
pub fn extract_access_token(req: &HttpRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(ACCESS_TOKEN_COOKIE) {
        let value = cookie.value().trim();
        if !value.is_empty() {
            return Some(value.to_string());
        }
    }

    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}
