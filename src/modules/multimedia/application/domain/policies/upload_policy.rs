use crate::multimedia::application::domain::entities::ImageUpload;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadPolicyError {
    #[error("No file provided")]
    EmptyFile,

    #[error("Only image files are accepted, got {0}")]
    UnsupportedContentType(String),

    #[error("File is {size} bytes, limit is {max} bytes")]
    TooLarge { size: u64, max: u64 },
}

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub folder: String,
}

impl UploadPolicy {
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
    pub const DEFAULT_FOLDER: &'static str = "gallery";

    /// Delivery transformation applied to every upload: cap the longest
    /// side at 2000px, automatic quality and format.
    pub const TRANSFORMATION: &'static str = "c_limit,w_2000,h_2000/q_auto/f_auto";

    /// Reads `MEDIA_UPLOAD_FOLDER` and `MEDIA_MAX_UPLOAD_BYTES`, falling back
    /// to the defaults when unset or unparsable.
    pub fn from_env() -> Self {
        let folder = std::env::var("MEDIA_UPLOAD_FOLDER")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_FOLDER.to_string());

        let max_file_size_bytes = std::env::var("MEDIA_MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(Self::DEFAULT_MAX_FILE_SIZE_BYTES);

        Self {
            max_file_size_bytes,
            folder,
        }
    }

    pub fn new(folder: impl Into<String>, max_file_size_bytes: u64) -> Self {
        Self {
            max_file_size_bytes,
            folder: folder.into(),
        }
    }

    pub fn validate(&self, upload: &ImageUpload) -> Result<(), UploadPolicyError> {
        if upload.bytes.is_empty() {
            return Err(UploadPolicyError::EmptyFile);
        }

        let content_type = upload.content_type.trim().to_ascii_lowercase();
        if !content_type.starts_with("image/") {
            return Err(UploadPolicyError::UnsupportedContentType(
                upload.content_type.clone(),
            ));
        }

        if upload.size() > self.max_file_size_bytes {
            return Err(UploadPolicyError::TooLarge {
                size: upload.size(),
                max: self.max_file_size_bytes,
            });
        }

        Ok(())
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FOLDER, Self::DEFAULT_MAX_FILE_SIZE_BYTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(content_type: &str, size: usize) -> ImageUpload {
        ImageUpload {
            file_name: "photo.jpg".to_string(),
            content_type: content_type.to_string(),
            bytes: vec![7u8; size],
        }
    }

    #[test]
    fn accepts_any_image_subtype() {
        let policy = UploadPolicy::default();

        assert!(policy.validate(&upload("image/jpeg", 10)).is_ok());
        assert!(policy.validate(&upload("image/avif", 10)).is_ok());
        assert!(policy.validate(&upload("IMAGE/PNG", 10)).is_ok());
    }

    #[test]
    fn rejects_empty_payload() {
        let policy = UploadPolicy::default();

        assert_eq!(
            policy.validate(&upload("image/png", 0)),
            Err(UploadPolicyError::EmptyFile)
        );
    }

    #[test]
    fn rejects_non_images() {
        let policy = UploadPolicy::default();

        assert!(matches!(
            policy.validate(&upload("application/pdf", 10)),
            Err(UploadPolicyError::UnsupportedContentType(ct)) if ct == "application/pdf"
        ));
    }

    #[test]
    fn rejects_oversized_payload() {
        let policy = UploadPolicy::new("gallery", 8);

        assert_eq!(
            policy.validate(&upload("image/png", 9)),
            Err(UploadPolicyError::TooLarge { size: 9, max: 8 })
        );
        assert!(policy.validate(&upload("image/png", 8)).is_ok());
    }
}
