// src/shared/position.rs

use std::cmp::Ordering;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Placement of an exhibition or news item.
///
/// Stored as a single integer column:
/// - `0` => `Current` (the one item currently showing / the headline)
/// - `1..=999` => `Past(rank)`, listed by rank, highest first
/// - `1000` => `Archived`, hidden from every public listing
///
/// The integer encoding only exists at the store and JSON boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    Current,
    Past(u16),
    #[default]
    Archived,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("position must be between 0 and 1000, got {0}")]
pub struct InvalidPosition(pub i64);

impl Position {
    pub const CURRENT_VALUE: i32 = 0;
    pub const ARCHIVED_VALUE: i32 = 1000;

    pub fn to_stored(self) -> i32 {
        match self {
            Position::Current => Self::CURRENT_VALUE,
            Position::Past(rank) => i32::from(rank),
            Position::Archived => Self::ARCHIVED_VALUE,
        }
    }

    /// Read-side conversion. Rows written before the range check existed
    /// may hold anything; out-of-range values are treated as archived so
    /// they never leak into public listings.
    pub fn from_stored(value: i32) -> Self {
        Self::try_from(i64::from(value)).unwrap_or_else(|_| {
            tracing::warn!(value, "Out-of-range position in store, treating as archived");
            Position::Archived
        })
    }

    pub fn is_current(self) -> bool {
        matches!(self, Position::Current)
    }

    pub fn is_archived(self) -> bool {
        matches!(self, Position::Archived)
    }

    /// Visible on the public site.
    pub fn is_public(self) -> bool {
        !self.is_archived()
    }

    fn display_key(self) -> (u8, i32) {
        match self {
            Position::Current => (0, 0),
            Position::Past(rank) => (1, -i32::from(rank)),
            Position::Archived => (2, 0),
        }
    }
}

impl TryFrom<i64> for Position {
    type Error = InvalidPosition;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Position::Current),
            1..=999 => Ok(Position::Past(value as u16)),
            1000 => Ok(Position::Archived),
            other => Err(InvalidPosition(other)),
        }
    }
}

/// Display order: current first, then past items by rank descending,
/// archived last.
impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.display_key().cmp(&other.display_key())
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.to_stored())
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        Position::try_from(raw).map_err(serde::de::Error::custom)
    }
}

/// Public view of a position-ranked listing: archived items are dropped, the
/// first `Current` item is returned separately and the rest follow in display
/// order. A second `Current` row (possible in data written before the single
/// holder index existed) is listed first among the rest.
pub fn split_current<T, F>(mut items: Vec<T>, position_of: F) -> (Option<T>, Vec<T>)
where
    F: Fn(&T) -> Position,
{
    items.retain(|item| position_of(item).is_public());
    items.sort_by_key(|item| position_of(item));

    match items.first() {
        Some(first) if position_of(first).is_current() => {
            let current = items.remove(0);
            (Some(current), items)
        }
        _ => (None, items),
    }
}

/// Carousel slides and event images sort by a plain non-negative key.
pub fn validate_sort_key(value: i32) -> Result<i32, String> {
    if value < 0 {
        return Err("Position must not be negative".to_string());
    }
    Ok(value)
}
