// src/modules/multimedia/application/domain/entities.rs

use serde::Serialize;
use utoipa::ToSchema;

//
// ──────────────────────────────────────────────────────────
// MediaKind
// ──────────────────────────────────────────────────────────
//

/// What a stored media URL points at.
///
/// Gallery rows store plain URLs; an entry pointing at a video host is
/// rendered as an embed instead of an image and is never sent to the
/// media host for deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

const VIDEO_HOSTS: &[&str] = &[
    "youtube.com",
    "www.youtube.com",
    "m.youtube.com",
    "youtu.be",
    "vimeo.com",
    "www.vimeo.com",
    "player.vimeo.com",
];

impl MediaKind {
    pub fn of_url(url: &str) -> Self {
        let host = url
            .trim()
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(url)
            .split(['/', '?', '#'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        if VIDEO_HOSTS.contains(&host.as_str()) {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    pub fn is_video(self) -> bool {
        matches!(self, MediaKind::Video)
    }
}

/// Splits stored gallery URLs into `(images, videos)`, keeping order.
pub fn split_by_kind<I>(urls: I) -> (Vec<String>, Vec<String>)
where
    I: IntoIterator<Item = String>,
{
    urls.into_iter()
        .partition(|url| !MediaKind::of_url(url).is_video())
}

//
// ──────────────────────────────────────────────────────────
// Upload
// ──────────────────────────────────────────────────────────
//

/// A single image received from the admin panel, fully buffered.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UploadedImage {
    /// Public URL on the media host
    #[schema(example = "https://res.cloudinary.com/demo/image/upload/v1712/gallery/abc.jpg")]
    pub url: String,
}
