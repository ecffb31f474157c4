use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::model::{Cart, CartSummary};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::summary::GetCartSummaryUseCase;
use crate::domain::logger::Logger;

/// Line count, unit count and subtotal for the header badge and checkout page.
pub struct GetCartSummaryUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartSummaryUseCase for GetCartSummaryUseCaseImpl {
    async fn execute(&self) -> CartSummary {
        let cart = self.repository.load().await.unwrap_or_else(|err| {
            self.logger
                .warn(&format!("Cart could not be read for summary: {}", err));
            Cart::new()
        });
        cart.summary()
    }
}
