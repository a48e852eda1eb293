//! Domain service for the anime collection.
//!
//! Handlers depend on this trait rather than on [`crate::db::Store`], which
//! keeps the absent-means-not-found convention of the store out of the HTTP
//! layer.

use crate::db::StoreError;
use crate::domain::AnimeId;
use crate::models::anime::{AnimeFields, AnimeRecord};
use thiserror::Error;

/// Domain errors for anime operations.
///
/// Storage is in memory; apart from a missing id it can only fail once the
/// id space is used up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimeError {
    #[error("Anime not found: {0}")]
    NotFound(AnimeId),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Domain service trait for anime operations.
///
/// # Examples
///
/// ```rust,ignore
/// use animedex::services::{AnimeError, AnimeService};
/// use animedex::domain::AnimeId;
/// use std::sync::Arc;
///
/// async fn example(service: Arc<dyn AnimeService>) -> Result<(), AnimeError> {
///     let anime = service.get_anime(AnimeId::new(1)).await?;
///     println!("{:?}", anime.title);
///     Ok(())
/// }
/// ```
#[async_trait::async_trait]
pub trait AnimeService: Send + Sync {
    /// Lists every record in insertion order.
    async fn list_anime(&self) -> Vec<AnimeRecord>;

    /// Fetches a single record.
    ///
    /// # Errors
    ///
    /// Returns [`AnimeError::NotFound`] if the id is unknown.
    async fn get_anime(&self, id: AnimeId) -> Result<AnimeRecord, AnimeError>;

    /// Adds a record. Fields are stored as given.
    ///
    /// # Errors
    ///
    /// Returns [`AnimeError::Storage`] if no further id can be assigned.
    async fn create_anime(&self, fields: AnimeFields) -> Result<AnimeRecord, AnimeError>;

    /// Partially updates a record. Empty strings and zeros are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AnimeError::NotFound`] if the id is unknown.
    async fn update_anime(
        &self,
        id: AnimeId,
        fields: AnimeFields,
    ) -> Result<AnimeRecord, AnimeError>;

    /// Removes a record permanently.
    ///
    /// # Errors
    ///
    /// Returns [`AnimeError::NotFound`] if the id is unknown.
    async fn delete_anime(&self, id: AnimeId) -> Result<(), AnimeError>;

    /// Number of records currently stored.
    async fn count(&self) -> usize;
}
