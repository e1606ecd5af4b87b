use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::{DeletedResponse, ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::exhibition::application::ports::incoming::use_cases::DeleteExhibitionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete an exhibition
///
/// Removes the row and its gallery, then schedules deletion of every image
/// the exhibition referenced.
#[utoipa::path(
    delete,
    path = "/api/exhibitions/{id}",
    tag = "exhibitions",
    params(("id" = Uuid, Path, description = "Exhibition id")),
    responses(
        (status = 200, description = "Exhibition deleted", body = inline(SuccessResponse<DeletedResponse>)),
        (status = 401, description = "No valid admin session", body = ErrorResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse),
    )
)]
#[delete("/api/exhibitions/{id}")]
pub async fn delete_exhibition_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.exhibition.delete.execute(id).await {
        Ok(id) => {
            info!(exhibition_id = %id, "Exhibition deleted");
            ApiResponse::success(DeletedResponse { id })
        }

        Err(DeleteExhibitionError::NotFound) => {
            ApiResponse::not_found("EXHIBITION_NOT_FOUND", "Exhibition not found")
        }

        Err(DeleteExhibitionError::RepositoryError(e)) => {
            error!("Failed to delete exhibition {}: {}", id, e);
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
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::exhibition::application::ports::incoming::use_cases::DeleteExhibitionUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::admin_bearer;

    #[derive(Clone, Default)]
    struct CountingDelete {
        not_found: bool,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl DeleteExhibitionUseCase for CountingDelete {
        async fn execute(&self, id: Uuid) -> Result<Uuid, DeleteExhibitionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.not_found {
                Err(DeleteExhibitionError::NotFound)
            } else {
                Ok(id)
            }
        }
    }

    async fn send_delete(
        use_case: CountingDelete,
        id: Uuid,
        authenticated: bool,
    ) -> actix_web::dev::ServiceResponse {
        let app_state = TestAppStateBuilder::default()
            .with_delete_exhibition(use_case)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(delete_exhibition_handler),
        )
        .await;

        let mut req = test::TestRequest::delete().uri(&format!("/api/exhibitions/{}", id));
        if authenticated {
            req = req.insert_header(admin_bearer());
        }

        test::call_service(&app, req.to_request()).await
    }

    #[actix_web::test]
    async fn test_delete_returns_id() {
        let id = Uuid::new_v4();
        let resp = send_delete(CountingDelete::default(), id, true).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], id.to_string());
    }

    #[actix_web::test]
    async fn test_delete_without_session_is_unauthorized() {
        let use_case = CountingDelete::default();
        let calls = use_case.calls.clone();

        let resp = send_delete(use_case, Uuid::new_v4(), false).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_delete_unknown_id_is_404() {
        let resp = send_delete(
            CountingDelete {
                not_found: true,
                ..Default::default()
            },
            Uuid::new_v4(),
            true,
        )
        .await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
