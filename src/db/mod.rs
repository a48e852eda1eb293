use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::AnimeId;
use crate::models::anime::{AnimeFields, AnimeRecord, seed_records};

/// Result of removing a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Anime id space exhausted")]
    IdsExhausted,
}

#[derive(Debug)]
struct Collection {
    records: Vec<AnimeRecord>,
    /// `None` once `i32::MAX` has been handed out.
    next_id: Option<AnimeId>,
}

/// In-memory record store.
///
/// Owns the collection and the id counter. Clones share the same data, and
/// every operation holds the lock for its full duration so callers never
/// observe a half-applied change.
#[derive(Clone, Debug)]
pub struct Store {
    inner: Arc<RwLock<Collection>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Creates an empty store whose first record will get id 1.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(AnimeId::FIRST)
    }

    fn starting_at(first: AnimeId) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Collection {
                records: Vec::new(),
                next_id: Some(first),
            })),
        }
    }

    /// Creates a store pre-populated with the startup records.
    pub async fn seeded() -> Result<Self, StoreError> {
        let store = Self::new();
        for fields in seed_records() {
            store.create(fields).await?;
        }
        info!("Store seeded with {} records", store.count().await);
        Ok(store)
    }

    /// Returns every record in insertion order.
    pub async fn find_all(&self) -> Vec<AnimeRecord> {
        self.inner.read().await.records.clone()
    }

    pub async fn find_by_id(&self, id: AnimeId) -> Option<AnimeRecord> {
        self.inner
            .read()
            .await
            .records
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    /// Appends a new record with the next id. The supplied fields are
    /// never validated; the only failure is running out of ids.
    pub async fn create(&self, fields: AnimeFields) -> Result<AnimeRecord, StoreError> {
        let mut collection = self.inner.write().await;

        let id = collection.next_id.ok_or(StoreError::IdsExhausted)?;
        collection.next_id = id.next();

        let record = AnimeRecord::new(id, fields, Utc::now());
        collection.records.push(record.clone());
        Ok(record)
    }

    /// Applies a partial update and refreshes `updated_at`.
    ///
    /// Returns `None` without touching anything when the id is unknown.
    pub async fn update(&self, id: AnimeId, fields: AnimeFields) -> Option<AnimeRecord> {
        let mut collection = self.inner.write().await;
        let record = collection.records.iter_mut().find(|r| r.id == id)?;

        record.apply(fields);
        record.touch(Utc::now());
        Some(record.clone())
    }

    pub async fn delete(&self, id: AnimeId) -> DeleteOutcome {
        let mut collection = self.inner.write().await;
        let before = collection.records.len();
        collection.records.retain(|r| r.id != id);

        if collection.records.len() == before {
            DeleteOutcome::NotFound
        } else {
            DeleteOutcome::Deleted
        }
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.records.len()
    }
}
