use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Coffee;
use crate::domain::shared::value_objects::CoffeeId;

pub struct GetCoffeeByIdParams {
    pub id: CoffeeId,
}

#[async_trait]
pub trait GetCoffeeByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetCoffeeByIdParams) -> Result<Coffee, CatalogError>;
}
