pub mod media_cleanup_worker;
pub mod upload_image_service;

pub use media_cleanup_worker::{spawn_media_cleanup_worker, ChannelMediaCleanup};
pub use upload_image_service::UploadImageService;
