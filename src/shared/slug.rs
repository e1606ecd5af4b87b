// src/shared/slug.rs

use std::future::Future;

use chrono::Utc;
use rand::Rng;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Width of the `slug` column, suffix included.
pub const MAX_SLUG_LEN: usize = 200;

/// Lowercase ASCII slug: diacritics are stripped (`é` -> `e`), every run of
/// other characters becomes a single `-`, and leading/trailing `-` are
/// trimmed. Scripts without an ASCII decomposition (Cyrillic, Greek, CJK)
/// normalize to an empty string.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for c in input.nfd().filter(|c| !is_combining_mark(*c)) {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Shortens an ASCII slug to at most `max` bytes, cutting at the last `-`
/// that fits when there is one, and never leaves a trailing `-`.
fn truncate_slug(slug: &str, max: usize) -> &str {
    if slug.len() <= max {
        return slug;
    }

    let cut = match slug.as_bytes().get(max) {
        Some(b'-') => &slug[..max],
        _ => match slug[..max].rfind('-') {
            Some(i) if i > 0 => &slug[..i],
            _ => &slug[..max],
        },
    };
    cut.trim_end_matches('-')
}

/// `<prefix><unix-millis><digit>`, used when the title has no ASCII form.
pub fn fallback_slug(prefix: &str) -> String {
    let digit: u8 = rand::thread_rng().gen_range(0..10);
    format!("{}{}{}", prefix, Utc::now().timestamp_millis(), digit)
}

/// Base slug for a new row: the requested slug when one is given, otherwise
/// the title; falls back to a generated slug when normalization leaves
/// nothing.
pub fn derive_base_slug(requested: Option<&str>, title: &str, fallback_prefix: &str) -> String {
    let source = requested
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(title);

    let slug = slugify(source);
    if slug.is_empty() {
        fallback_slug(fallback_prefix)
    } else {
        truncate_slug(&slug, MAX_SLUG_LEN).to_string()
    }
}

/// Probes `is_taken` with `base`, `base-1`, `base-2`, … and returns the first
/// free candidate, shortening `base` so every candidate fits in
/// `MAX_SLUG_LEN`. Unbounded: at gallery scale collisions are rare, and the
/// unique index on `lower(slug)` still catches a concurrent insert.
pub async fn resolve_unique_slug<F, Fut, E>(base: String, mut is_taken: F) -> Result<String, E>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    if !is_taken(base.clone()).await? {
        return Ok(base);
    }

    let mut suffix: u64 = 1;
    loop {
        let suffix_text = suffix.to_string();
        let room = MAX_SLUG_LEN.saturating_sub(suffix_text.len() + 1);
        let candidate = format!("{}-{}", truncate_slug(&base, room), suffix_text);
        if !is_taken(candidate.clone()).await? {
            return Ok(candidate);
        }
        suffix += 1;
    }
}
