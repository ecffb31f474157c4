use async_trait::async_trait;

use crate::domain::errors::ApiError;
use crate::domain::shared::value_objects::CoffeeId;

use super::model::Coffee;

/// Service port for the remote coffee catalog (`/coffees`).
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn list_coffees(&self) -> Result<Vec<Coffee>, ApiError>;
    async fn get_coffee(&self, id: &CoffeeId) -> Result<Coffee, ApiError>;
}
