// src/modules/multimedia/application/domain/public_id.rs

use std::sync::LazyLock;

use regex::Regex;

// `<anything>/image/upload/<rest>` where rest is
// `[transformation/...][v<digits>/]<public_id>[.<ext>]`
static UPLOAD_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[^/]+/(?:[^/]+/)?image/upload/(?P<rest>[^?#]+)").expect("valid regex")
});

static VERSION_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v\d+$").expect("valid regex"));

static TRANSFORMATION_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{1,3}_[^/]*$").expect("valid regex"));

/// Recovers the media host's public id from a delivery URL.
///
/// Returns `None` for URLs that were not produced by the media host
/// (foreign hosts, video links, hand-typed paths).
pub fn public_id_from_url(url: &str) -> Option<String> {
    let rest = UPLOAD_PATH.captures(url.trim())?.name("rest")?.as_str();

    let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();

    // Transformation segments always precede the version marker.
    let mut start = 0;
    if let Some(pos) = segments.iter().position(|s| VERSION_SEGMENT.is_match(s)) {
        start = pos + 1;
    } else {
        while start < segments.len().saturating_sub(1)
            && TRANSFORMATION_SEGMENT.is_match(segments[start])
        {
            start += 1;
        }
    }

    let id_segments = segments.get(start..)?;
    if id_segments.is_empty() {
        return None;
    }

    let joined = id_segments.join("/");
    let public_id = match joined.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.contains('/') => stem.to_string(),
        _ => joined,
    };

    if public_id.is_empty() {
        None
    } else {
        Some(public_id)
    }
}
