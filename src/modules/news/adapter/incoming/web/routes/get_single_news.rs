use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::news::application::domain::entities::NewsItem;
use crate::news::application::ports::incoming::use_cases::GetSingleNewsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a news item (admin)
#[utoipa::path(
    get,
    path = "/api/news/{id}",
    tag = "news",
    params(("id" = Uuid, Path, description = "News id")),
    responses(
        (status = 200, description = "News item found", body = inline(SuccessResponse<NewsItem>)),
        (status = 404, description = "Unknown id", body = ErrorResponse),
    )
)]
#[get("/api/news/{id}")]
pub async fn get_single_news_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.news.get_single.execute(id).await {
        Ok(item) => ApiResponse::success(item),

        Err(GetSingleNewsError::NotFound) => {
            ApiResponse::not_found("NEWS_NOT_FOUND", "News item not found")
        }

        Err(GetSingleNewsError::RepositoryError(e)) => {
            error!("Failed to load news {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::news::application::ports::incoming::use_cases::GetSingleNewsUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct Missing;

    #[async_trait]
    impl GetSingleNewsUseCase for Missing {
        async fn execute(&self, _id: Uuid) -> Result<NewsItem, GetSingleNewsError> {
            Err(GetSingleNewsError::NotFound)
        }
    }

    #[actix_web::test]
    async fn test_unknown_id_is_404() {
        let app_state = TestAppStateBuilder::default()
            .with_get_single_news(Missing)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_single_news_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/news/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "NEWS_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_malformed_id_is_rejected() {
        let app_state = TestAppStateBuilder::default()
            .with_get_single_news(Missing)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(crate::shared::api::custom_path_config())
                .service(get_single_news_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/news/not-a-uuid")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
