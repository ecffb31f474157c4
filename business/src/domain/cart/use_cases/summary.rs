use async_trait::async_trait;

use crate::domain::cart::model::CartSummary;

#[async_trait]
pub trait GetCartSummaryUseCase: Send + Sync {
    async fn execute(&self) -> CartSummary;
}
