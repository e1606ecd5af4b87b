// src/shared/text.rs

use crate::shared::patch_field::PatchField;

/// Matches the `title` / `slug` column width.
pub const MAX_TITLE_LEN: usize = 200;

/// `author` column width.
pub const MAX_AUTHOR_LEN: usize = 200;

/// `date` column width.
pub const MAX_DATE_LEN: usize = 100;

/// Rejects an optional field longer than `max` characters.
pub fn check_max_len(field: &str, value: Option<&str>, max: usize) -> Result<(), String> {
    match value {
        Some(v) if v.chars().count() > max => Err(format!(
            "{} must be at most {} characters",
            field, max
        )),
        _ => Ok(()),
    }
}

/// Trimmed title; required and at most `MAX_TITLE_LEN` characters.
pub fn validate_title(title: &str) -> Result<String, String> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Title is required".to_string());
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(format!("Title must be at most {} characters", MAX_TITLE_LEN));
    }
    Ok(title.to_string())
}

/// Trimmed value of a required text field.
pub fn required(field: &str, value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("{} is required", field));
    }
    Ok(value.to_string())
}

/// Trims; blank input becomes `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trims a patch value; a blank `Value` clears the column like `Null`.
pub fn non_blank_patch(field: PatchField<String>) -> PatchField<String> {
    match field {
        PatchField::Value(v) if v.trim().is_empty() => PatchField::Null,
        PatchField::Value(v) => PatchField::Value(v.trim().to_string()),
        other => other,
    }
}

/// Trimmed, non-empty URLs in their original order.
pub fn clean_urls(urls: Vec<String>) -> Vec<String> {
    urls.into_iter()
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .collect()
}

/// Entries of `before` missing from `after`, first occurrence only.
pub fn released(before: &[String], after: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for url in before {
        if !after.contains(url) && !out.contains(url) {
            out.push(url.clone());
        }
    }
    out
}
