use async_trait::async_trait;

use crate::domain::auth::model::AuthToken;
use crate::domain::errors::ApiError;

use super::model::{OrderConfirmation, OrderDraft};

/// Service port for the remote order endpoint.
#[async_trait]
pub trait OrderService: Send + Sync {
    async fn submit_order(
        &self,
        draft: &OrderDraft,
        token: Option<AuthToken>,
    ) -> Result<OrderConfirmation, ApiError>;
}
