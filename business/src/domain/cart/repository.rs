use async_trait::async_trait;

use crate::domain::errors::StorageError;

use super::model::Cart;

/// Port over the `cart` blob of the local persistent store.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Missing or malformed data loads as an empty cart; only an unreadable
    /// store is an error.
    async fn load(&self) -> Result<Cart, StorageError>;
    async fn save(&self, cart: &Cart) -> Result<(), StorageError>;
    async fn clear(&self) -> Result<(), StorageError>;
}
