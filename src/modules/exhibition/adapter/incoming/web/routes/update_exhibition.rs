use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::exhibition::application::domain::entities::ExhibitionDetail;
use crate::exhibition::application::ports::incoming::use_cases::UpdateExhibitionError;
use crate::exhibition::application::ports::outgoing::exhibition_repository::PatchExhibitionData;
use crate::shared::api::ApiResponse;
use crate::shared::patch_field::PatchField;
use crate::shared::position::Position;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Partial update: omitted keys keep their value, `null` clears a
/// nullable column.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateExhibitionRequest {
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
    pub author: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub date: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub position: Option<Position>,

    /// Replaces the whole gallery when present.
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

impl From<UpdateExhibitionRequest> for PatchExhibitionData {
    fn from(req: UpdateExhibitionRequest) -> Self {
        PatchExhibitionData {
            title: req.title,
            subtitle: req.subtitle,
            text: req.text,
            main_image: req.main_image,
            author: req.author,
            date: req.date,
            position: req.position,
            images: req.images,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Update an exhibition
///
/// Media no longer referenced after the update (replaced main image,
/// removed gallery entries) is scheduled for deletion at the media host.
#[utoipa::path(
    put,
    path = "/api/exhibitions/{id}",
    tag = "exhibitions",
    params(("id" = Uuid, Path, description = "Exhibition id")),
    request_body = UpdateExhibitionRequest,
    responses(
        (status = 200, description = "Exhibition updated", body = inline(SuccessResponse<ExhibitionDetail>)),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 401, description = "No valid admin session", body = ErrorResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse),
    )
)]
#[put("/api/exhibitions/{id}")]
pub async fn update_exhibition_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateExhibitionRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.exhibition.update.execute(id, req.into_inner().into()).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdateExhibitionError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(UpdateExhibitionError::NotFound) => {
            ApiResponse::not_found("EXHIBITION_NOT_FOUND", "Exhibition not found")
        }

        Err(UpdateExhibitionError::RepositoryError(e)) => {
            error!("Failed to update exhibition {}: {}", id, e);
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

    use crate::exhibition::application::domain::entities::fixtures::exhibition;
    use crate::exhibition::application::ports::incoming::use_cases::UpdateExhibitionUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::admin_bearer;

    #[derive(Clone, Default)]
    struct RecordingUpdate {
        not_found: bool,
        received: Arc<Mutex<Vec<PatchExhibitionData>>>,
    }

    #[async_trait]
    impl UpdateExhibitionUseCase for RecordingUpdate {
        async fn execute(
            &self,
            _id: Uuid,
            data: PatchExhibitionData,
        ) -> Result<ExhibitionDetail, UpdateExhibitionError> {
            if self.not_found {
                return Err(UpdateExhibitionError::NotFound);
            }
            let mut e = exhibition("Show", data.position.unwrap_or(Position::Past(3)));
            if let Some(url) = data.main_image.as_value() {
                e.main_image = Some(url.clone());
            }
            self.received.lock().unwrap().push(data);
            Ok(ExhibitionDetail {
                exhibition: e,
                images: vec![],
            })
        }
    }

    async fn put(
        use_case: RecordingUpdate,
        body: Value,
        authenticated: bool,
    ) -> actix_web::dev::ServiceResponse {
        let app_state = TestAppStateBuilder::default()
            .with_update_exhibition(use_case)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(update_exhibition_handler),
        )
        .await;

        let mut req = test::TestRequest::put()
            .uri(&format!("/api/exhibitions/{}", Uuid::new_v4()))
            .set_json(body);
        if authenticated {
            req = req.insert_header(admin_bearer());
        }

        test::call_service(&app, req.to_request()).await
    }

    #[actix_web::test]
    async fn test_omitted_keys_stay_unset_and_null_clears() {
        let use_case = RecordingUpdate::default();
        let received = use_case.received.clone();

        let resp = put(
            use_case,
            json!({ "main_image": "https://cdn.example/b.jpg", "subtitle": null }),
            true,
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["main_image"], "https://cdn.example/b.jpg");

        let received = received.lock().unwrap();
        let data = &received[0];
        assert_eq!(data.subtitle, PatchField::Null);
        assert!(data.text.is_unset());
        assert!(data.title.is_none());
        assert!(data.images.is_none());
    }

    #[actix_web::test]
    async fn test_images_key_replaces_gallery() {
        let use_case = RecordingUpdate::default();
        let received = use_case.received.clone();

        let resp = put(
            use_case,
            json!({ "images": ["x.jpg", "y.jpg"], "position": 0 }),
            true,
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let received = received.lock().unwrap();
        assert_eq!(
            received[0].images,
            Some(vec!["x.jpg".to_string(), "y.jpg".to_string()])
        );
        assert_eq!(received[0].position, Some(Position::Current));
    }

    #[actix_web::test]
    async fn test_without_session_is_unauthorized() {
        let use_case = RecordingUpdate::default();
        let received = use_case.received.clone();

        let resp = put(use_case, json!({ "title": "New" }), false).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(received.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_unknown_id_is_404() {
        let resp = put(
            RecordingUpdate {
                not_found: true,
                ..Default::default()
            },
            json!({ "title": "New" }),
            true,
        )
        .await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "EXHIBITION_NOT_FOUND");
    }
}
