use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::events::{EventBus, StoreEvent};
use crate::domain::logger::Logger;

pub struct AddCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub events: Arc<EventBus>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Adding {} x {} to cart",
            params.quantity, params.product.id
        ));

        let mut cart = self.repository.load().await?;
        if params.quantity == 0 {
            return Ok(cart);
        }

        cart.add(params.product, params.quantity);
        self.repository.save(&cart).await?;
        self.events.publish(StoreEvent::CartChanged);

        self.logger
            .info(&format!("Cart now holds {} line(s)", cart.len()));
        Ok(cart)
    }
}
