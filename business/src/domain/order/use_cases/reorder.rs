use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::order::errors::ReorderError;
use crate::domain::order::model::OrderHistoryEntry;

pub struct ReorderParams {
    pub order: OrderHistoryEntry,
}

/// Replaces the cart with the lines of a previous order.
#[async_trait]
pub trait ReorderUseCase: Send + Sync {
    async fn execute(&self, params: ReorderParams) -> Result<Cart, ReorderError>;
}
