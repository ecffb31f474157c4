use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use crate::domain::events::{EventBus, StoreEvent};
use crate::domain::logger::Logger;

pub struct UpdateCartQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub events: Arc<EventBus>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartQuantityUseCase for UpdateCartQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateCartQuantityParams) -> Result<Cart, CartError> {
        let mut cart = self.repository.load().await?;

        if !cart.set_quantity(&params.coffee_id, params.quantity) {
            self.logger.debug(&format!(
                "Ignoring quantity {} for {}",
                params.quantity, params.coffee_id
            ));
            return Ok(cart);
        }

        self.repository.save(&cart).await?;
        self.events.publish(StoreEvent::CartChanged);
        self.logger.info(&format!(
            "Set quantity of {} to {}",
            params.coffee_id, params.quantity
        ));
        Ok(cart)
    }
}
