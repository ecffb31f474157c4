use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::cart::repository::CartRepository;
use crate::domain::events::{EventBus, StoreEvent};
use crate::domain::logger::Logger;
use crate::domain::order::errors::ReorderError;
use crate::domain::order::use_cases::reorder::{ReorderParams, ReorderUseCase};

/// Replaces the cart with the lines of a previous order at their recorded prices.
pub struct ReorderUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub events: Arc<EventBus>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ReorderUseCase for ReorderUseCaseImpl {
    async fn execute(&self, params: ReorderParams) -> Result<Cart, ReorderError> {
        let cart = Cart::from_items(params.order.lines.iter().map(|line| CartItem {
            product: line.to_cart_product(),
            quantity: line.line.quantity,
        }));
        if cart.is_empty() {
            return Err(ReorderError::EmptyOrder);
        }

        self.repository.save(&cart).await?;
        self.events.publish(StoreEvent::CartChanged);
        self.logger.info(&format!(
            "Cart replaced with {} line(s) from order {}",
            cart.len(),
            params.order.id
        ));
        Ok(cart)
    }
}
