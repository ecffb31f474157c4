use async_trait::async_trait;

use crate::domain::order::errors::OrderHistoryError;
use crate::domain::order::model::OrderHistoryEntry;

#[async_trait]
pub trait GetOrderHistoryUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<OrderHistoryEntry>, OrderHistoryError>;
}
