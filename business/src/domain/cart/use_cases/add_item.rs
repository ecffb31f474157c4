use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartProduct};

pub struct AddCartItemParams {
    pub product: CartProduct,
    pub quantity: u32,
}

impl AddCartItemParams {
    /// One unit of `product`, what the "Add to Cart" button does.
    pub fn single(product: CartProduct) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }
}

#[async_trait]
pub trait AddCartItemUseCase: Send + Sync {
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError>;
}
