use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Coffee;
use crate::domain::catalog::services::CatalogService;
use crate::domain::catalog::use_cases::get_all::GetAllCoffeesUseCase;
use crate::domain::logger::Logger;

pub struct GetAllCoffeesUseCaseImpl {
    pub catalog: Arc<dyn CatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllCoffeesUseCase for GetAllCoffeesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Coffee>, CatalogError> {
        self.logger.info("Fetching coffee catalog");
        let coffees = self.catalog.list_coffees().await.map_err(|err| {
            self.logger
                .error(&format!("Error fetching coffees: {:?}", err));
            CatalogError::Unavailable(err)
        })?;
        self.logger
            .debug(&format!("Catalog returned {} coffee(s)", coffees.len()));
        Ok(coffees)
    }
}
