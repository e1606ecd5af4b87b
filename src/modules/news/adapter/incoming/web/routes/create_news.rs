use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::news::application::domain::entities::NewsItem;
use crate::news::application::ports::incoming::use_cases::{CreateNewsCommand, CreateNewsError};
use crate::shared::api::ApiResponse;
use crate::shared::position::Position;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNewsRequest {
    #[schema(example = "Gallery reopens")]
    pub title: String,

    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub subtitle: Option<String>,

    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub main_image: Option<String>,

    #[serde(default)]
    pub date: Option<String>,

    /// 0 = headline, 1..=999 = rank, 1000 = archived. Defaults to archived.
    #[serde(default)]
    #[schema(value_type = Option<i32>, example = 0)]
    pub position: Option<Position>,
}

impl From<CreateNewsRequest> for CreateNewsCommand {
    fn from(req: CreateNewsRequest) -> Self {
        CreateNewsCommand {
            title: req.title,
            slug: req.slug,
            subtitle: req.subtitle,
            text: req.text,
            main_image: req.main_image,
            date: req.date,
            position: req.position.unwrap_or_default(),
        }
    }
}

/// Create a news item
///
/// A `position: 0` item becomes the headline and archives the previous one.
#[utoipa::path(
    post,
    path = "/api/news",
    tag = "news",
    request_body = CreateNewsRequest,
    responses(
        (status = 201, description = "News item created", body = inline(SuccessResponse<NewsItem>)),
        (status = 400, description = "Missing title or invalid field", body = ErrorResponse),
        (status = 401, description = "No valid admin session", body = ErrorResponse),
        (status = 409, description = "Slug already taken", body = ErrorResponse),
    )
)]
#[post("/api/news")]
pub async fn create_news_handler(
    _admin: AdminUser,
    req: web::Json<CreateNewsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.news.create.execute(req.into_inner().into()).await {
        Ok(item) => ApiResponse::created(item),

        Err(CreateNewsError::Validation(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),

        Err(CreateNewsError::SlugAlreadyExists) => {
            ApiResponse::conflict("SLUG_ALREADY_EXISTS", "Slug already exists")
        }

        Err(CreateNewsError::RepositoryError(e)) => {
            error!("Failed to create news: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    use crate::news::application::domain::entities::fixtures::news_item;
    use crate::news::application::ports::incoming::use_cases::CreateNewsUseCase;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::admin_bearer;

    #[derive(Clone, Default)]
    struct RecordingCreate {
        received: Arc<Mutex<Vec<CreateNewsCommand>>>,
    }

    #[async_trait]
    impl CreateNewsUseCase for RecordingCreate {
        async fn execute(&self, command: CreateNewsCommand) -> Result<NewsItem, CreateNewsError> {
            self.received.lock().unwrap().push(command.clone());
            Ok(news_item(&command.title, command.position))
        }
    }

    async fn post_news(
        use_case: RecordingCreate,
        body: Value,
        authenticated: bool,
    ) -> actix_web::dev::ServiceResponse {
        let app_state = TestAppStateBuilder::default()
            .with_create_news(use_case)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(create_news_handler),
        )
        .await;

        let mut req = test::TestRequest::post().uri("/api/news").set_json(body);
        if authenticated {
            req = req.insert_header(admin_bearer());
        }
        test::call_service(&app, req.to_request()).await
    }

    #[actix_web::test]
    async fn test_create_returns_201() {
        let use_case = RecordingCreate::default();
        let received = use_case.received.clone();

        let resp = post_news(use_case, json!({ "title": "Reopening", "position": 0 }), true).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["title"], "Reopening");
        assert_eq!(received.lock().unwrap()[0].position, Position::Current);
    }

    #[actix_web::test]
    async fn test_missing_title_is_validation_error() {
        let resp = post_news(RecordingCreate::default(), json!({ "text": "Body" }), true).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_without_session_is_unauthorized() {
        let use_case = RecordingCreate::default();
        let received = use_case.received.clone();

        let resp = post_news(use_case, json!({ "title": "Reopening" }), false).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(received.lock().unwrap().is_empty());
    }
}
