use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::order::errors::CheckoutError;
use crate::domain::order::model::OrderConfirmation;
use crate::domain::shared::value_objects::UserId;

pub struct CheckoutParams {
    pub cart: Cart,
    pub user_id: Option<UserId>,
}

#[async_trait]
pub trait CheckoutUseCase: Send + Sync {
    async fn execute(&self, params: CheckoutParams) -> Result<OrderConfirmation, CheckoutError>;
}
