use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::shared::value_objects::CoffeeId;

pub struct ToggleFavoriteParams {
    pub coffee_id: CoffeeId,
}

#[async_trait]
pub trait ToggleFavoriteUseCase: Send + Sync {
    /// Returns whether the coffee is a favorite after the toggle.
    async fn execute(&self, params: ToggleFavoriteParams) -> Result<bool, FavoriteError>;
}
