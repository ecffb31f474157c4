use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Coffee;

#[async_trait]
pub trait GetAllCoffeesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Coffee>, CatalogError>;
}
