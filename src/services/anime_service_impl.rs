//! [`AnimeService`] backed by the in-memory [`Store`].

use crate::constants::metric_names;
use crate::db::{DeleteOutcome, Store};
use crate::domain::AnimeId;
use crate::models::anime::{AnimeFields, AnimeRecord};
use crate::services::anime_service::{AnimeError, AnimeService};
use tracing::{debug, info};

/// Publishes the current collection size on the `anime_records` gauge.
#[allow(clippy::cast_precision_loss)]
pub fn record_collection_size(count: usize) {
    metrics::gauge!(metric_names::ANIME_RECORDS).set(count as f64);
}

pub struct InMemoryAnimeService {
    store: Store,
}

impl InMemoryAnimeService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    async fn publish_count(&self) {
        record_collection_size(self.store.count().await);
    }
}

#[async_trait::async_trait]
impl AnimeService for InMemoryAnimeService {
    async fn list_anime(&self) -> Vec<AnimeRecord> {
        let records = self.store.find_all().await;
        debug!(count = records.len(), "Listed anime");
        records
    }

    async fn get_anime(&self, id: AnimeId) -> Result<AnimeRecord, AnimeError> {
        debug!(%id, "Fetching anime");
        self.store
            .find_by_id(id)
            .await
            .ok_or(AnimeError::NotFound(id))
    }

    async fn create_anime(&self, fields: AnimeFields) -> Result<AnimeRecord, AnimeError> {
        let record = self.store.create(fields).await?;
        info!(
            id = %record.id,
            title = record.title.as_deref().unwrap_or("<untitled>"),
            "Anime created"
        );
        metrics::counter!(metric_names::ANIME_CREATED).increment(1);
        self.publish_count().await;
        Ok(record)
    }

    async fn update_anime(
        &self,
        id: AnimeId,
        fields: AnimeFields,
    ) -> Result<AnimeRecord, AnimeError> {
        let record = self
            .store
            .update(id, fields)
            .await
            .ok_or(AnimeError::NotFound(id))?;
        info!(%id, "Anime updated");
        metrics::counter!(metric_names::ANIME_UPDATED).increment(1);
        Ok(record)
    }

    async fn delete_anime(&self, id: AnimeId) -> Result<(), AnimeError> {
        match self.store.delete(id).await {
            DeleteOutcome::Deleted => {
                info!(%id, "Anime deleted");
                metrics::counter!(metric_names::ANIME_DELETED).increment(1);
                self.publish_count().await;
                Ok(())
            }
            DeleteOutcome::NotFound => Err(AnimeError::NotFound(id)),
        }
    }

    async fn count(&self) -> usize {
        self.store.count().await
    }
}
