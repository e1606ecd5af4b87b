// src/modules/multimedia/application/ports/outgoing/media_cleanup.rs

/// Fire-and-forget removal of media that is no longer referenced by any row.
///
/// Implementations never block the caller and never report failure.
pub trait MediaCleanup: Send + Sync {
    fn schedule(&self, urls: Vec<String>);
}
