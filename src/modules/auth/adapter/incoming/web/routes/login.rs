use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::cookies::with_cookies;
use crate::auth::application::domain::entities::AdminIdentity;
use crate::auth::application::use_cases::login::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Login request from the admin panel
#[derive(Deserialize, Serialize, ToSchema)]
pub struct LoginRequestDto {
    /// Email address
    #[schema(example = "curator@gallery.example")]
    pub email: String,

    /// Password
    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct SessionUserResponse {
    /// The signed-in administrator
    pub user: AdminIdentity,
}

/// Admin login
///
/// Signs in at the identity provider and stores the session in HTTP-only
/// cookies. Tokens are never returned in the body.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful, session cookies set",
            body = inline(SuccessResponse<SessionUserResponse>),
            example = json!({
                "success": true,
                "data": {
                    "user": {
                        "id": "6c2b3f7e-2a0d-4a47-9a0e-1c4f5d9e8b21",
                        "email": "curator@gallery.example"
                    }
                }
            })
        ),
        (
            status = 400,
            description = "Missing or malformed email/password",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": "Invalid email format",
                "code": "VALIDATION_ERROR"
            })
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": "Invalid email or password",
                "code": "INVALID_CREDENTIALS"
            })
        ),
        (status = 502, description = "Identity provider unavailable", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    info!(email = %request.email(), "Login attempt");

    match data.auth.login.execute(request).await {
        Ok(session) => {
            let cookies = data.session_cookies.session_cookies(&session);
            with_cookies(
                ApiResponse::success(SessionUserResponse { user: session.user }),
                &cookies,
            )
        }

        Err(LoginError::InvalidCredentials) => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::ProviderError(e)) => {
            error!("Login failed at identity provider: {}", e);
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
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::auth::adapter::incoming::web::cookies::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};
    use crate::auth::application::domain::entities::Session;
    use crate::auth::application::use_cases::login::ILoginUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct MockLoginUseCase {
        result: Result<Session, LoginError>,
    }

    #[async_trait]
    impl ILoginUseCase for MockLoginUseCase {
        async fn execute(&self, _request: LoginRequest) -> Result<Session, LoginError> {
            self.result.clone()
        }
    }

    fn session() -> Session {
        Session {
            access_token: "access-abc".into(),
            refresh_token: "refresh-xyz".into(),
            expires_in: Some(3600),
            user: AdminIdentity {
                id: "admin-1".into(),
                email: Some("curator@gallery.test".into()),
            },
        }
    }

    fn login_body(email: &str, password: &str) -> LoginRequestDto {
        LoginRequestDto {
            email: email.into(),
            password: password.into(),
        }
    }

    #[actix_web::test]
    async fn test_login_success_sets_cookies_and_hides_tokens() {
        let app_state = TestAppStateBuilder::default()
            .with_login(MockLoginUseCase {
                result: Ok(session()),
            })
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(login_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(login_body("curator@gallery.test", "pw"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let cookies: Vec<_> = resp.response().cookies().collect();
        let access = cookies
            .iter()
            .find(|c| c.name() == ACCESS_TOKEN_COOKIE)
            .expect("access cookie");
        assert_eq!(access.value(), "access-abc");
        assert_eq!(access.http_only(), Some(true));
        assert!(cookies.iter().any(|c| c.name() == REFRESH_TOKEN_COOKIE));

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["user"]["id"], "admin-1");
        assert!(body.to_string().find("access-abc").is_none());
    }

    #[actix_web::test]
    async fn test_login_invalid_email_is_bad_request() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(app_state).service(login_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(login_body("nope", "pw"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_login_bad_credentials_is_unauthorized() {
        let app_state = TestAppStateBuilder::default()
            .with_login(MockLoginUseCase {
                result: Err(LoginError::InvalidCredentials),
            })
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(login_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(login_body("curator@gallery.test", "wrong"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(resp.response().cookies().count(), 0);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "INVALID_CREDENTIALS");
    }

    #[actix_web::test]
    async fn test_login_provider_outage_is_bad_gateway() {
        let app_state = TestAppStateBuilder::default()
            .with_login(MockLoginUseCase {
                result: Err(LoginError::ProviderError("timeout".into())),
            })
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(login_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(login_body("curator@gallery.test", "pw"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }
}
