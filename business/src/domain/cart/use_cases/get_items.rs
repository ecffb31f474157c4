use async_trait::async_trait;

use crate::domain::cart::model::Cart;

/// Reading the cart never fails: an unreadable store yields an empty cart.
#[async_trait]
pub trait GetCartItemsUseCase: Send + Sync {
    async fn execute(&self) -> Cart;
}
