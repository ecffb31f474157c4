use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::StorageError;
use business::domain::favorite::model::FavoriteSet;
use business::domain::favorite::repository::FavoriteRepository;
use business::domain::shared::value_objects::CoffeeId;

use crate::store::{LocalStore, StorageKey};

/// Favorites are stored as a JSON array of coffee ids.
pub struct FavoriteRepositoryLocal {
    store: Arc<dyn LocalStore>,
}

impl FavoriteRepositoryLocal {
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FavoriteRepository for FavoriteRepositoryLocal {
    async fn load(&self) -> Result<FavoriteSet, StorageError> {
        let Some(raw) = self.store.get(StorageKey::Favorites).await? else {
            return Ok(FavoriteSet::new());
        };
        match serde_json::from_str::<Vec<CoffeeId>>(&raw) {
            Ok(ids) => Ok(FavoriteSet::from_ids(ids)),
            Err(err) => {
                tracing::warn!(target: "zodiac_brew", "Ignoring malformed favorites: {}", err);
                Ok(FavoriteSet::new())
            }
        }
    }

    async fn save(&self, favorites: &FavoriteSet) -> Result<(), StorageError> {
        let raw = serde_json::to_string(favorites.ids()).map_err(|_| StorageError::Malformed)?;
        self.store.set(StorageKey::Favorites, raw).await
    }
}
