use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::AnimeId;

/// A single entry in the collection.
///
/// Only `id` and the two timestamps are guaranteed; every other field is
/// stored exactly as the caller supplied it, including not at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeRecord {
    pub id: AnimeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episodes: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub studio: Option<String>,
    /// Comma-joined genre tags, e.g. `"Action,Drama"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client supplied fields for create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub episodes: Option<i32>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub studio: Option<String>,
    #[serde(default)]
    pub genres: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Values that can be "falsy": a falsy update value never overwrites.
///
/// Empty strings, zero and NaN count as not supplied, the same as a missing
/// field. Clients cannot clear a field or set it to zero through an update.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for i32 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

fn overwrite_if_truthy<T: Truthy>(slot: &mut Option<T>, incoming: Option<T>) {
    if let Some(value) = incoming.filter(T::is_truthy) {
        *slot = Some(value);
    }
}

impl AnimeRecord {
    /// Builds a fresh record. Both timestamps share the same instant.
    #[must_use]
    pub fn new(id: AnimeId, fields: AnimeFields, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            episodes: fields.episodes,
            release_year: fields.release_year,
            studio: fields.studio,
            genres: fields.genres,
            rating: fields.rating,
            image_url: fields.image_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a partial update. Only truthy values replace existing ones.
    pub fn apply(&mut self, fields: AnimeFields) {
        overwrite_if_truthy(&mut self.title, fields.title);
        overwrite_if_truthy(&mut self.description, fields.description);
        overwrite_if_truthy(&mut self.episodes, fields.episodes);
        overwrite_if_truthy(&mut self.release_year, fields.release_year);
        overwrite_if_truthy(&mut self.studio, fields.studio);
        overwrite_if_truthy(&mut self.genres, fields.genres);
        overwrite_if_truthy(&mut self.rating, fields.rating);
        overwrite_if_truthy(&mut self.image_url, fields.image_url);
    }

    /// Moves `updated_at` forward to `now`, or by one microsecond when the
    /// clock has not advanced past the previous value.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + chrono::Duration::microseconds(1)
        };
    }
}

/// Records present in a freshly started collection.
#[must_use]
pub fn seed_records() -> Vec<AnimeFields> {
    vec![
        AnimeFields {
            title: Some("Attack on Titan".to_string()),
            description: Some(
                "Humanity fighting titans in a post-apocalyptic world".to_string(),
            ),
            episodes: Some(75),
            release_year: Some(2013),
            studio: Some("MAPPA".to_string()),
            genres: Some("Action,Drama,Fantasy".to_string()),
            rating: Some(4.8),
            image_url: Some("https://example.com/aot.jpg".to_string()),
        },
        AnimeFields {
            title: Some("My Hero Academia".to_string()),
            description: Some(
                "In a world where almost everyone has superpowers, a boy without powers fights to become a hero"
                    .to_string(),
            ),
            episodes: Some(113),
            release_year: Some(2016),
            studio: Some("Bones".to_string()),
            genres: Some("Action,Comedy,Superhero".to_string()),
            rating: Some(4.6),
            image_url: Some("https://example.com/mha.jpg".to_string()),
        },
    ]
}
