// src/modules/multimedia/application/services/media_cleanup_worker.rs

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::multimedia::application::domain::entities::MediaKind;
use crate::multimedia::application::domain::public_id::public_id_from_url;
use crate::multimedia::application::ports::outgoing::{MediaCleanup, MediaHost};

//
// ──────────────────────────────────────────────────────────
// Producer side (held by use cases)
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct ChannelMediaCleanup {
    sender: UnboundedSender<Vec<String>>,
}

impl ChannelMediaCleanup {
    pub fn new(sender: UnboundedSender<Vec<String>>) -> Self {
        Self { sender }
    }
}

impl MediaCleanup for ChannelMediaCleanup {
    fn schedule(&self, urls: Vec<String>) {
        let urls: Vec<String> = urls
            .into_iter()
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .collect();

        if urls.is_empty() {
            return;
        }

        if let Err(e) = self.sender.send(urls) {
            warn!(
                count = e.0.len(),
                "Media cleanup worker has stopped, dropping batch"
            );
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Consumer side (one background task)
// ──────────────────────────────────────────────────────────
//

pub struct MediaCleanupWorker<H>
where
    H: MediaHost,
{
    media_host: H,
    receiver: UnboundedReceiver<Vec<String>>,
}

impl<H> MediaCleanupWorker<H>
where
    H: MediaHost,
{
    pub fn new(media_host: H, receiver: UnboundedReceiver<Vec<String>>) -> Self {
        Self {
            media_host,
            receiver,
        }
    }

    /// Runs until every `ChannelMediaCleanup` handle is dropped.
    pub async fn run(mut self) {
        while let Some(batch) = self.receiver.recv().await {
            for url in batch {
                self.destroy_one(&url).await;
            }
        }

        debug!("Media cleanup worker stopped");
    }

    /// Exactly one attempt per URL; failures are logged and forgotten.
    async fn destroy_one(&self, url: &str) {
        if MediaKind::of_url(url).is_video() {
            debug!(url, "Skipping cleanup of video link");
            return;
        }

        let Some(public_id) = public_id_from_url(url) else {
            warn!(url, "Cannot derive media public id, skipping cleanup");
            return;
        };

        match self.media_host.destroy(&public_id).await {
            Ok(()) => info!(public_id = %public_id, "Orphaned media deleted"),
            Err(e) => warn!(public_id = %public_id, "Failed to delete orphaned media: {}", e),
        }
    }
}

/// Starts the background worker and returns the handle use cases schedule
/// deletions through.
pub fn spawn_media_cleanup_worker<H>(media_host: H) -> (ChannelMediaCleanup, JoinHandle<()>)
where
    H: MediaHost + 'static,
{
    let (sender, receiver) = mpsc::unbounded_channel();
    let worker = MediaCleanupWorker::new(media_host, receiver);
    let handle = tokio::spawn(worker.run());

    (ChannelMediaCleanup::new(sender), handle)
}
