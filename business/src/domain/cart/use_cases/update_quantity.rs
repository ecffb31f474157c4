use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::CoffeeId;

pub struct UpdateCartQuantityParams {
    pub coffee_id: CoffeeId,
    pub quantity: i64,
}

#[async_trait]
pub trait UpdateCartQuantityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCartQuantityParams) -> Result<Cart, CartError>;
}
