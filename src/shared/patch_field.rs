// src/shared/patch_field.rs

use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit partial-update semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field not provided => keep stored value
// - Null: explicitly null => clear the column (nullable fields only)
// - Value(v): replace with v
//
// Request DTOs mark every PatchField with #[serde(default)] so an
// omitted key deserializes to Unset.
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Resolves the field against the stored value:
    /// `None` means "leave the column alone".
    pub fn into_change(self) -> Option<Option<T>> {
        match self {
            PatchField::Unset => None,
            PatchField::Null => Some(None),
            PatchField::Value(v) => Some(Some(v)),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> PatchField<U> {
        match self {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(v) => PatchField::Value(f(v)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Body {
        #[serde(default)]
        subtitle: PatchField<String>,
    }

    #[test]
    fn omitted_key_is_unset() {
        let body: Body = serde_json::from_str("{}").unwrap();
        assert!(body.subtitle.is_unset());
    }

    #[test]
    fn explicit_null_clears() {
        let body: Body = serde_json::from_str(r#"{"subtitle": null}"#).unwrap();
        assert_eq!(body.subtitle, PatchField::Null);
        assert_eq!(body.subtitle.into_change(), Some(None));
    }

    #[test]
    fn value_replaces() {
        let body: Body = serde_json::from_str(r#"{"subtitle": "Spring"}"#).unwrap();
        assert_eq!(body.subtitle.as_value().map(String::as_str), Some("Spring"));
        assert_eq!(
            body.subtitle.into_change(),
            Some(Some("Spring".to_string()))
        );
    }

    #[test]
    fn map_keeps_state() {
        let field: PatchField<&str> = PatchField::Value(" a ");
        assert_eq!(field.map(str::trim), PatchField::Value("a"));
        assert_eq!(PatchField::<&str>::Null.map(str::trim), PatchField::Null);
    }
}
