use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::email::application::ports::incoming::send_contact_message::{
    ContactMessage, SendContactMessageError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    #[schema(example = "Ana Petrović")]
    pub name: String,

    #[schema(example = "ana@example.com")]
    pub email: String,

    /// At most 5000 characters.
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactAccepted {
    pub sent: bool,
}

/// Send a message from the public contact form
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "public",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message forwarded", body = inline(SuccessResponse<ContactAccepted>)),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 502, description = "Mail relay failed", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn send_contact_message_handler(
    req: web::Json<ContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let message = ContactMessage {
        name: req.name,
        email: req.email,
        message: req.message,
    };

    match data.contact.send.execute(message).await {
        Ok(()) => ApiResponse::success(ContactAccepted { sent: true }),

        Err(SendContactMessageError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(SendContactMessageError::DeliveryFailed(e)) => {
            error!("Contact form delivery failed: {}", e);
            ApiResponse::bad_gateway("EMAIL_SEND_FAILED", "Message could not be sent")
        }
    }
}
