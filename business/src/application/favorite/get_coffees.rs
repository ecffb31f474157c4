use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::model::Coffee;
use crate::domain::catalog::services::CatalogService;
use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::get_coffees::GetFavoriteCoffeesUseCase;
use crate::domain::logger::Logger;

/// Resolves favorite ids against the catalog, in favorite order.
///
/// Ids the catalog no longer lists are dropped silently.
pub struct GetFavoriteCoffeesUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub catalog: Arc<dyn CatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFavoriteCoffeesUseCase for GetFavoriteCoffeesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Coffee>, FavoriteError> {
        let favorites = self.repository.load().await?;
        if favorites.is_empty() {
            return Ok(vec![]);
        }

        let catalog = self.catalog.list_coffees().await?;
        let coffees: Vec<Coffee> = favorites
            .ids()
            .iter()
            .filter_map(|id| catalog.iter().find(|coffee| &coffee.id == id).cloned())
            .collect();

        if coffees.len() < favorites.len() {
            self.logger.debug(&format!(
                "{} favorite(s) no longer in the catalog",
                favorites.len() - coffees.len()
            ));
        }
        Ok(coffees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{ApiError, StorageError};
    use crate::domain::favorite::model::FavoriteSet;
    use crate::domain::shared::value_objects::{CoffeeId, Money};
    use mockall::mock;

    mock! {
        pub FavoriteRepo {}

        #[async_trait]
        impl FavoriteRepository for FavoriteRepo {
            async fn load(&self) -> Result<FavoriteSet, StorageError>;
            async fn save(&self, favorites: &FavoriteSet) -> Result<(), StorageError>;
        }
    }

    mock! {
        pub Catalog {}

        #[async_trait]
        impl CatalogService for Catalog {
            async fn list_coffees(&self) -> Result<Vec<Coffee>, ApiError>;
            async fn get_coffee(&self, id: &CoffeeId) -> Result<Coffee, ApiError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn coffee(id: &str) -> Coffee {
        Coffee {
            id: CoffeeId::new(id),
            name: format!("Coffee {id}"),
            description: String::new(),
            image: String::new(),
            price: Money::from_major(190),
            zodiac_signs: vec![],
            moods: vec![],
        }
    }

    #[tokio::test]
    async fn should_resolve_favorites_in_favorite_order_and_drop_unknown_ids() {
        let mut mock_repo = MockFavoriteRepo::new();
        mock_repo.expect_load().returning(|| {
            Ok(FavoriteSet::from_ids(vec![
                CoffeeId::new("3"),
                CoffeeId::new("gone"),
                CoffeeId::new("1"),
            ]))
        });
        let mut mock_catalog = MockCatalog::new();
        mock_catalog
            .expect_list_coffees()
            .returning(|| Ok(vec![coffee("1"), coffee("2"), coffee("3")]));

        let use_case = GetFavoriteCoffeesUseCaseImpl {
            repository: Arc::new(mock_repo),
            catalog: Arc::new(mock_catalog),
            logger: mock_logger(),
        };

        let coffees = use_case.execute().await.unwrap();
        let ids: Vec<&str> = coffees.iter().map(|c| c.id.as_str()).collect();

        assert_eq!(ids, vec!["3", "1"]);
    }

    #[tokio::test]
    async fn should_skip_catalog_when_no_favorites() {
        let mut mock_repo = MockFavoriteRepo::new();
        mock_repo.expect_load().returning(|| Ok(FavoriteSet::new()));
        let mut mock_catalog = MockCatalog::new();
        mock_catalog.expect_list_coffees().never();

        let use_case = GetFavoriteCoffeesUseCaseImpl {
            repository: Arc::new(mock_repo),
            catalog: Arc::new(mock_catalog),
            logger: mock_logger(),
        };

        assert!(use_case.execute().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_report_catalog_failure() {
        let mut mock_repo = MockFavoriteRepo::new();
        mock_repo
            .expect_load()
            .returning(|| Ok(FavoriteSet::from_ids(vec![CoffeeId::new("1")])));
        let mut mock_catalog = MockCatalog::new();
        mock_catalog
            .expect_list_coffees()
            .returning(|| Err(ApiError::network("timeout")));

        let use_case = GetFavoriteCoffeesUseCaseImpl {
            repository: Arc::new(mock_repo),
            catalog: Arc::new(mock_catalog),
            logger: mock_logger(),
        };

        assert!(matches!(
            use_case.execute().await,
            Err(FavoriteError::Catalog(_))
        ));
    }
}
