//! Domain primitives for the anime collection.
//!
//! Identifiers are wrapped in a newtype so raw integers coming from the
//! transport layer have to be parsed once before they reach the store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unique identifier for an anime record.
///
/// Ids are assigned by the store, start at 1 and only ever grow.
///
/// # Examples
///
/// ```rust
/// use animedex::domain::AnimeId;
///
/// let id: AnimeId = "42".parse().unwrap();
/// assert_eq!(id.value(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AnimeId(i32);

impl AnimeId {
    /// First id handed out by an empty store.
    pub const FIRST: Self = Self(1);

    #[must_use]
    pub const fn new(id: i32) -> Self {
        debug_assert!(id >= 0, "AnimeId should be non-negative");
        Self(id)
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }

    /// Returns the id following this one, or `None` once `i32::MAX` is used.
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(next) => Some(Self(next)),
            None => None,
        }
    }
}

impl fmt::Display for AnimeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<AnimeId> for i32 {
    fn from(id: AnimeId) -> Self {
        id.0
    }
}

impl From<i32> for AnimeId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

/// Reasons a textual id (usually a path segment) is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAnimeIdError {
    #[error("'{0}' is not a valid integer")]
    NotAnInteger(String),

    #[error("{0} is not a positive integer")]
    NotPositive(i64),
}

impl FromStr for AnimeId {
    type Err = ParseAnimeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s
            .parse()
            .map_err(|_| ParseAnimeIdError::NotAnInteger(s.to_string()))?;

        if raw <= 0 {
            return Err(ParseAnimeIdError::NotPositive(raw));
        }

        // Anything above i32::MAX can never have been assigned.
        i32::try_from(raw)
            .map(Self)
            .map_err(|_| ParseAnimeIdError::NotAnInteger(s.to_string()))
    }
}

impl Serialize for AnimeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(self.0)
    }
}

impl<'de> Deserialize<'de> for AnimeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = i32::deserialize(deserializer)?;
        Ok(Self::new(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anime_id_conversions() {
        let id = AnimeId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(i32::from(id), 42);
        assert_eq!(AnimeId::from(42), id);
        assert_eq!(id.next(), Some(AnimeId::new(43)));
    }

    #[test]
    fn anime_id_next_stops_at_max() {
        assert_eq!(AnimeId::new(i32::MAX).next(), None);
        assert_eq!(
            AnimeId::new(i32::MAX - 1).next(),
            Some(AnimeId::new(i32::MAX))
        );
    }

    #[test]
    fn anime_id_parsing() {
        assert_eq!("3".parse::<AnimeId>(), Ok(AnimeId::new(3)));
        assert_eq!(
            "abc".parse::<AnimeId>(),
            Err(ParseAnimeIdError::NotAnInteger("abc".to_string()))
        );
        assert_eq!("0".parse::<AnimeId>(), Err(ParseAnimeIdError::NotPositive(0)));
        assert_eq!("-4".parse::<AnimeId>(), Err(ParseAnimeIdError::NotPositive(-4)));
        assert!("3.5".parse::<AnimeId>().is_err());
        assert!("99999999999".parse::<AnimeId>().is_err());
    }

    #[test]
    fn anime_id_serialization() {
        let id = AnimeId::new(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");
        let deserialized: AnimeId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, id);
    }
}
