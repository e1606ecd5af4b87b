pub mod media_cleanup;
pub mod media_host;

pub use media_cleanup::MediaCleanup;
pub use media_host::{MediaHost, MediaHostError};
