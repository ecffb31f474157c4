use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Coffee;
use crate::domain::catalog::services::CatalogService;
use crate::domain::catalog::use_cases::get_by_id::{GetCoffeeByIdParams, GetCoffeeByIdUseCase};
use crate::domain::logger::Logger;

pub struct GetCoffeeByIdUseCaseImpl {
    pub catalog: Arc<dyn CatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCoffeeByIdUseCase for GetCoffeeByIdUseCaseImpl {
    async fn execute(&self, params: GetCoffeeByIdParams) -> Result<Coffee, CatalogError> {
        self.logger
            .info(&format!("Fetching coffee with id: {}", params.id));

        match self.catalog.get_coffee(&params.id).await {
            Ok(coffee) => Ok(coffee),
            Err(err) if err.is_not_found() => {
                self.logger
                    .warn(&format!("Coffee not found: {}", params.id));
                Err(CatalogError::NotFound)
            }
            Err(err) => {
                self.logger.error(&format!(
                    "Error fetching coffee {}: {:?}",
                    params.id, err
                ));
                Err(CatalogError::Unavailable(err))
            }
        }
    }
}
