use async_trait::async_trait;
use tracing::{error, info};

use crate::multimedia::application::domain::entities::{ImageUpload, UploadedImage};
use crate::multimedia::application::domain::policies::UploadPolicy;
use crate::multimedia::application::ports::incoming::use_cases::{
    UploadImageError, UploadImageUseCase,
};
use crate::multimedia::application::ports::outgoing::MediaHost;

pub struct UploadImageService<H>
where
    H: MediaHost,
{
    media_host: H,
    policy: UploadPolicy,
}

impl<H> UploadImageService<H>
where
    H: MediaHost,
{
    pub fn new(media_host: H, policy: UploadPolicy) -> Self {
        Self { media_host, policy }
    }
}

#[async_trait]
impl<H> UploadImageUseCase for UploadImageService<H>
where
    H: MediaHost + Send + Sync,
{
    async fn execute(&self, upload: ImageUpload) -> Result<UploadedImage, UploadImageError> {
        self.policy.validate(&upload)?;

        let file_name = upload.file_name.clone();
        let size = upload.size();

        let uploaded = self
            .media_host
            .upload(upload, &self.policy.folder, UploadPolicy::TRANSFORMATION)
            .await
            .map_err(|e| {
                error!(file_name = %file_name, size, "Media host upload failed: {}", e);
                UploadImageError::HostError(e.to_string())
            })?;

        info!(url = %uploaded.url, size, "Image uploaded");
        Ok(uploaded)
    }
}
