use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::exhibition::application::domain::entities::ExhibitionImage;
use crate::exhibition::application::ports::incoming::use_cases::GetExhibitionImagesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List an exhibition's gallery in display order
#[utoipa::path(
    get,
    path = "/api/exhibitions/{id}/images",
    tag = "exhibitions",
    params(("id" = Uuid, Path, description = "Exhibition id")),
    responses(
        (status = 200, description = "Bare array ordered by image_order", body = [ExhibitionImage]),
        (status = 404, description = "Unknown id", body = ErrorResponse),
    )
)]
#[get("/api/exhibitions/{id}/images")]
pub async fn get_exhibition_images_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.exhibition.get_images.execute(id).await {
        Ok(images) => ApiResponse::list(images),

        Err(GetExhibitionImagesError::NotFound) => {
            ApiResponse::not_found("EXHIBITION_NOT_FOUND", "Exhibition not found")
        }

        Err(GetExhibitionImagesError::RepositoryError(e)) => {
            error!("Failed to list images of exhibition {}: {}", id, e);
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

    use crate::exhibition::application::domain::entities::fixtures::gallery_image;
    use crate::exhibition::application::ports::incoming::use_cases::GetExhibitionImagesUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct MockGetImages {
        result: Result<Vec<ExhibitionImage>, GetExhibitionImagesError>,
    }

    #[async_trait]
    impl GetExhibitionImagesUseCase for MockGetImages {
        async fn execute(
            &self,
            _id: Uuid,
        ) -> Result<Vec<ExhibitionImage>, GetExhibitionImagesError> {
            self.result.clone()
        }
    }

    async fn get(use_case: MockGetImages, id: Uuid) -> actix_web::dev::ServiceResponse {
        let app_state = TestAppStateBuilder::default()
            .with_get_exhibition_images(use_case)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_exhibition_images_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/exhibitions/{}/images", id))
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_gallery_is_bare_array() {
        let id = Uuid::new_v4();
        let resp = get(
            MockGetImages {
                result: Ok(vec![
                    gallery_image(id, "a.jpg", 0),
                    gallery_image(id, "b.jpg", 1),
                ]),
            },
            id,
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body[0]["url"], "a.jpg");
        assert_eq!(body[1]["image_order"], 1);
    }

    #[actix_web::test]
    async fn test_unknown_exhibition_is_404() {
        let resp = get(
            MockGetImages {
                result: Err(GetExhibitionImagesError::NotFound),
            },
            Uuid::new_v4(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
