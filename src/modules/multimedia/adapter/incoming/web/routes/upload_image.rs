use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse, Responder};
use futures::StreamExt;
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::multimedia::application::domain::entities::{ImageUpload, UploadedImage};
use crate::multimedia::application::domain::policies::UploadPolicyError;
use crate::multimedia::application::ports::incoming::use_cases::UploadImageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

const FILE_FIELD: &str = "file";

/// Upload an image
///
/// Accepts `multipart/form-data` with a single `file` part and forwards it
/// to the media host. Returns the public URL to store on a row.
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "media",
    request_body(content_type = "multipart/form-data", description = "Form with one `file` part"),
    responses(
        (status = 200, description = "Image stored", body = inline(SuccessResponse<UploadedImage>)),
        (status = 400, description = "Missing, empty or non-image file", body = ErrorResponse),
        (status = 401, description = "No valid admin session", body = ErrorResponse),
        (status = 413, description = "File exceeds the upload limit", body = ErrorResponse),
        (status = 502, description = "Media host failure", body = ErrorResponse),
    )
)]
#[post("/api/upload")]
pub async fn upload_image_handler(
    _admin: AdminUser,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let max_bytes = data.upload_policy.max_file_size_bytes;

    let upload = match read_file_part(payload, max_bytes).await {
        Ok(upload) => upload,
        Err(resp) => return resp,
    };

    match data.upload_image.execute(upload).await {
        Ok(uploaded) => ApiResponse::success(uploaded),

        Err(UploadImageError::Rejected(e)) => map_policy_error(e),

        Err(UploadImageError::HostError(e)) => {
            error!("Image upload failed: {}", e);
            ApiResponse::bad_gateway("UPLOAD_FAILED", "Image upload failed")
        }
    }
}

fn map_policy_error(e: UploadPolicyError) -> HttpResponse {
    match e {
        UploadPolicyError::EmptyFile => ApiResponse::bad_request("NO_FILE", "No file provided"),
        UploadPolicyError::UnsupportedContentType(_) => {
            ApiResponse::bad_request("INVALID_FILE_TYPE", &e.to_string())
        }
        UploadPolicyError::TooLarge { .. } => {
            ApiResponse::payload_too_large("FILE_TOO_LARGE", &e.to_string())
        }
    }
}

/// Buffers the `file` part, stopping as soon as it grows past `max_bytes`
/// so oversized uploads are never held in memory in full.
async fn read_file_part(mut payload: Multipart, max_bytes: u64) -> Result<ImageUpload, HttpResponse> {
    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| {
            warn!("Malformed multipart payload: {}", e);
            ApiResponse::bad_request("INVALID_MULTIPART", "Malformed multipart payload")
        })?;

        let (name, file_name) = match field.content_disposition() {
            Some(cd) => (
                cd.get_name().unwrap_or_default().to_string(),
                cd.get_filename().unwrap_or("upload").to_string(),
            ),
            None => (String::new(), String::new()),
        };

        if name != FILE_FIELD {
            // Drain unrelated parts so the stream can advance.
            while let Some(chunk) = field.next().await {
                if chunk.is_err() {
                    break;
                }
            }
            continue;
        }

        let content_type = field
            .content_type()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_default();

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| {
                warn!("Failed reading upload chunk: {}", e);
                ApiResponse::bad_request("INVALID_MULTIPART", "Malformed multipart payload")
            })?;

            if (bytes.len() + chunk.len()) as u64 > max_bytes {
                return Err(map_policy_error(UploadPolicyError::TooLarge {
                    size: (bytes.len() + chunk.len()) as u64,
                    max: max_bytes,
                }));
            }
            bytes.extend_from_slice(&chunk);
        }

        return Ok(ImageUpload {
            file_name,
            content_type,
            bytes,
        });
    }

    Err(map_policy_error(UploadPolicyError::EmptyFile))
}
