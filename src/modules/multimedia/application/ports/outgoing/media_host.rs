// src/modules/multimedia/application/ports/outgoing/media_host.rs

use async_trait::async_trait;

use crate::multimedia::application::domain::entities::{ImageUpload, UploadedImage};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaHostError {
    /// The host answered with a non-success status.
    #[error("Media host rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// Connection, timeout or TLS failure before a response arrived.
    #[error("Media host unreachable: {0}")]
    Transport(String),

    /// The host answered 2xx but the body was not what we expected.
    #[error("Unexpected media host response: {0}")]
    UnexpectedResponse(String),
}

/// Third-party image hosting.
///
/// `upload` stores the image under `folder` with the delivery
/// transformation applied and returns its public URL; `destroy` removes
/// a previously uploaded image by public id.
#[async_trait]
pub trait MediaHost: Send + Sync {
    async fn upload(
        &self,
        upload: ImageUpload,
        folder: &str,
        transformation: &str,
    ) -> Result<UploadedImage, MediaHostError>;

    async fn destroy(&self, public_id: &str) -> Result<(), MediaHostError>;
}
