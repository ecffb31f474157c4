use std::sync::Arc;

use async_trait::async_trait;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::StorageError;

use super::entity::{CartItemEntity, cart_from_entities};
use crate::store::{LocalStore, StorageKey};

pub struct CartRepositoryLocal {
    store: Arc<dyn LocalStore>,
}

impl CartRepositoryLocal {
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryLocal {
    async fn load(&self) -> Result<Cart, StorageError> {
        let Some(raw) = self.store.get(StorageKey::Cart).await? else {
            return Ok(Cart::new());
        };
        match serde_json::from_str::<Vec<CartItemEntity>>(&raw) {
            Ok(entities) => Ok(cart_from_entities(entities)),
            Err(err) => {
                tracing::warn!(target: "zodiac_brew", "Ignoring malformed cart data: {}", err);
                Ok(Cart::new())
            }
        }
    }

    async fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        let entities: Vec<CartItemEntity> =
            cart.items().iter().map(CartItemEntity::from_domain).collect();
        let raw = serde_json::to_string(&entities).map_err(|_| StorageError::Malformed)?;
        self.store.set(StorageKey::Cart, raw).await
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(StorageKey::Cart).await
    }
}
