use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::repository::SessionRepository;
use crate::domain::cart::repository::CartRepository;
use crate::domain::errors::ValidationError;
use crate::domain::events::{EventBus, StoreEvent};
use crate::domain::logger::Logger;
use crate::domain::order::errors::CheckoutError;
use crate::domain::order::model::{OrderConfirmation, OrderDraft};
use crate::domain::order::services::OrderService;
use crate::domain::order::use_cases::checkout::{CheckoutParams, CheckoutUseCase};

pub struct CheckoutUseCaseImpl {
    pub service: Arc<dyn OrderService>,
    pub cart: Arc<dyn CartRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub events: Arc<EventBus>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckoutUseCase for CheckoutUseCaseImpl {
    async fn execute(&self, params: CheckoutParams) -> Result<OrderConfirmation, CheckoutError> {
        if params.cart.is_empty() {
            return Err(ValidationError::EmptyCart.into());
        }
        let user_id = params.user_id.ok_or(CheckoutError::AuthRequired)?;
        let draft = OrderDraft::from_cart(&params.cart, user_id)?;

        let token = match self.sessions.load().await {
            Ok(session) => session.map(|session| session.token),
            Err(err) => {
                self.logger.warn(&format!(
                    "Stored session could not be read, submitting without token: {}",
                    err
                ));
                None
            }
        };

        self.logger.info(&format!(
            "Submitting order of {} line(s) totalling {} for {}",
            draft.lines.len(),
            draft.total_price,
            draft.user_id
        ));

        let confirmation = self
            .service
            .submit_order(&draft, token)
            .await
            .map_err(|err| {
                self.logger
                    .error(&format!("Order submission failed: {:?}", err));
                CheckoutError::Submission(err)
            })?;

        // Order is already placed: a failed clear is logged, not returned.
        if let Err(err) = self.cart.clear().await {
            self.logger
                .error(&format!("Order placed but cart could not be cleared: {}", err));
        }
        self.events.publish(StoreEvent::CartChanged);

        self.logger.info(&format!(
            "Order placed: {}",
            confirmation.order_id.as_deref().unwrap_or("<no id>")
        ));
        Ok(confirmation)
    }
}
