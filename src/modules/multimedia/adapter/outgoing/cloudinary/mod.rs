mod cloudinary_media_host;
mod config;

pub use cloudinary_media_host::CloudinaryMediaHost;
pub use config::{CloudinaryConfig, CloudinaryConfigError, SignatureAlgorithm};
