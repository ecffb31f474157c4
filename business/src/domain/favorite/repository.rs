use async_trait::async_trait;

use crate::domain::errors::StorageError;

use super::model::FavoriteSet;

/// Port over the `favorites` blob of the local persistent store.
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn load(&self) -> Result<FavoriteSet, StorageError>;
    async fn save(&self, favorites: &FavoriteSet) -> Result<(), StorageError>;
}
