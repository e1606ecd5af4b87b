use actix_web::{post, web, HttpRequest, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::cookies::{with_cookies, REFRESH_TOKEN_COOKIE};
use crate::auth::application::use_cases::refresh_session::RefreshSessionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::login::SessionUserResponse;

/// Refresh the admin session
///
/// Exchanges the refresh cookie for a new session and re-sets both cookies.
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    responses(
        (status = 200, description = "Session renewed", body = inline(SuccessResponse<SessionUserResponse>)),
        (status = 401, description = "Missing or invalid refresh token; cookies cleared", body = ErrorResponse),
        (status = 502, description = "Identity provider unavailable", body = ErrorResponse),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_session_handler(
    req: HttpRequest,
    data: web::Data<AppState>,
) -> impl Responder {
    let refresh_token = req
        .cookie(REFRESH_TOKEN_COOKIE)
        .map(|c| c.value().to_string())
        .unwrap_or_default();

    match data.auth.refresh.execute(&refresh_token).await {
        Ok(session) => {
            let cookies = data.session_cookies.session_cookies(&session);
            with_cookies(
                ApiResponse::success(SessionUserResponse { user: session.user }),
                &cookies,
            )
        }

        Err(RefreshSessionError::InvalidSession) => with_cookies(
            ApiResponse::unauthorized("UNAUTHORIZED", "Session expired, please log in again"),
            &data.session_cookies.cleared_cookies(),
        ),

        Err(RefreshSessionError::ProviderError(e)) => {
            error!("Session refresh failed at identity provider: {}", e);
            ApiResponse::bad_gateway(
                "IDENTITY_PROVIDER_ERROR",
                "Authentication service unavailable",
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::auth::adapter::incoming::web::cookies::ACCESS_TOKEN_COOKIE;
    use crate::auth::application::domain::entities::{AdminIdentity, Session};
    use crate::auth::application::use_cases::refresh_session::IRefreshSessionUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    /// Accepts only `refresh-ok`.
    struct MockRefreshUseCase;

    #[async_trait]
    impl IRefreshSessionUseCase for MockRefreshUseCase {
        async fn execute(&self, refresh_token: &str) -> Result<Session, RefreshSessionError> {
            if refresh_token != "refresh-ok" {
                return Err(RefreshSessionError::InvalidSession);
            }
            Ok(Session {
                access_token: "access-new".into(),
                refresh_token: "refresh-new".into(),
                expires_in: Some(600),
                user: AdminIdentity {
                    id: "admin-1".into(),
                    email: None,
                },
            })
        }
    }

    #[actix_web::test]
    async fn test_refresh_success_rotates_cookies() {
        let app_state = TestAppStateBuilder::default()
            .with_refresh(MockRefreshUseCase)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(refresh_session_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/refresh")
            .cookie(Cookie::new(REFRESH_TOKEN_COOKIE, "refresh-ok"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let access = resp
            .response()
            .cookies()
            .find(|c| c.name() == ACCESS_TOKEN_COOKIE)
            .map(|c| c.value().to_string());
        assert_eq!(access.as_deref(), Some("access-new"));

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["user"]["id"], "admin-1");
    }

    #[actix_web::test]
    async fn test_refresh_without_cookie_is_unauthorized_and_clears() {
        let app_state = TestAppStateBuilder::default()
            .with_refresh(MockRefreshUseCase)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(refresh_session_handler))
                .await;

        let req = test::TestRequest::post().uri("/api/auth/refresh").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(resp.response().cookies().all(|c| c.value().is_empty()));
        assert_eq!(resp.response().cookies().count(), 2);
    }
}
