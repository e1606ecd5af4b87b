use async_trait::async_trait;

use crate::multimedia::application::domain::entities::{ImageUpload, UploadedImage};
use crate::multimedia::application::domain::policies::UploadPolicyError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadImageError {
    #[error(transparent)]
    Rejected(#[from] UploadPolicyError),

    #[error("Upload failed: {0}")]
    HostError(String),
}

#[async_trait]
pub trait UploadImageUseCase: Send + Sync {
    async fn execute(&self, upload: ImageUpload) -> Result<UploadedImage, UploadImageError>;
}
