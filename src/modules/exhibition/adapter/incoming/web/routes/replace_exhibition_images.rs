use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::exhibition::application::domain::entities::ExhibitionImage;
use crate::exhibition::application::ports::incoming::use_cases::ReplaceExhibitionImagesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReplaceExhibitionImagesRequest {
    /// New gallery in display order; an empty list clears it.
    pub images: Vec<String>,
}

/// Replace an exhibition's gallery
///
/// Rewrites every gallery row in one transaction. URLs that drop out of
/// the gallery are scheduled for deletion at the media host.
#[utoipa::path(
    put,
    path = "/api/exhibitions/{id}/images",
    tag = "exhibitions",
    params(("id" = Uuid, Path, description = "Exhibition id")),
    request_body = ReplaceExhibitionImagesRequest,
    responses(
        (status = 200, description = "New gallery as a bare array", body = [ExhibitionImage]),
        (status = 401, description = "No valid admin session", body = ErrorResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse),
    )
)]
#[put("/api/exhibitions/{id}/images")]
pub async fn replace_exhibition_images_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<ReplaceExhibitionImagesRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data
        .exhibition
        .replace_images
        .execute(id, req.into_inner().images)
        .await
    {
        Ok(images) => ApiResponse::list(images),

        Err(ReplaceExhibitionImagesError::NotFound) => {
            ApiResponse::not_found("EXHIBITION_NOT_FOUND", "Exhibition not found")
        }

        Err(ReplaceExhibitionImagesError::RepositoryError(e)) => {
            error!("Failed to replace images of exhibition {}: {}", id, e);
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

    use crate::exhibition::application::domain::entities::fixtures::gallery_image;
    use crate::exhibition::application::ports::incoming::use_cases::ReplaceExhibitionImagesUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::admin_bearer;

    #[derive(Clone, Default)]
    struct RecordingReplace {
        received: Arc<Mutex<Vec<Vec<String>>>>,
    }

    #[async_trait]
    impl ReplaceExhibitionImagesUseCase for RecordingReplace {
        async fn execute(
            &self,
            id: Uuid,
            urls: Vec<String>,
        ) -> Result<Vec<ExhibitionImage>, ReplaceExhibitionImagesError> {
            self.received.lock().unwrap().push(urls.clone());
            Ok(urls
                .iter()
                .enumerate()
                .map(|(i, url)| gallery_image(id, url, i as i32))
                .collect())
        }
    }

    async fn put(
        use_case: RecordingReplace,
        body: Value,
        authenticated: bool,
    ) -> actix_web::dev::ServiceResponse {
        let app_state = TestAppStateBuilder::default()
            .with_replace_exhibition_images(use_case)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(replace_exhibition_images_handler),
        )
        .await;

        let mut req = test::TestRequest::put()
            .uri(&format!("/api/exhibitions/{}/images", Uuid::new_v4()))
            .set_json(body);
        if authenticated {
            req = req.insert_header(admin_bearer());
        }

        test::call_service(&app, req.to_request()).await
    }

    #[actix_web::test]
    async fn test_replace_returns_new_gallery() {
        let use_case = RecordingReplace::default();
        let received = use_case.received.clone();

        let resp = put(use_case, json!({ "images": ["b.jpg", "a.jpg"] }), true).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body[0]["url"], "b.jpg");
        assert_eq!(body[0]["image_order"], 0);
        assert_eq!(received.lock().unwrap()[0], vec!["b.jpg", "a.jpg"]);
    }

    #[actix_web::test]
    async fn test_replace_without_session_is_unauthorized() {
        let use_case = RecordingReplace::default();
        let received = use_case.received.clone();

        let resp = put(use_case, json!({ "images": [] }), false).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(received.lock().unwrap().is_empty());
    }
}
