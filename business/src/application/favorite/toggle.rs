use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::toggle::{ToggleFavoriteParams, ToggleFavoriteUseCase};
use crate::domain::logger::Logger;

pub struct ToggleFavoriteUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleFavoriteUseCase for ToggleFavoriteUseCaseImpl {
    /// Returns true when the coffee is a favorite after the call.
    async fn execute(&self, params: ToggleFavoriteParams) -> Result<bool, FavoriteError> {
        let mut favorites = self.repository.load().await?;
        let added = favorites.toggle(params.coffee_id.clone());
        self.repository.save(&favorites).await?;

        self.logger.info(&format!(
            "{} {} {} favorites",
            if added { "Added" } else { "Removed" },
            params.coffee_id,
            if added { "to" } else { "from" }
        ));
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::StorageError;
    use crate::domain::favorite::model::FavoriteSet;
    use crate::domain::shared::value_objects::CoffeeId;
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

    #[tokio::test]
    async fn should_add_missing_favorite() {
        let mut mock_repo = MockFavoriteRepo::new();
        mock_repo.expect_load().returning(|| Ok(FavoriteSet::new()));
        mock_repo
            .expect_save()
            .withf(|favorites| favorites.contains(&CoffeeId::new("3")))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = ToggleFavoriteUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let added = use_case
            .execute(ToggleFavoriteParams {
                coffee_id: CoffeeId::new("3"),
            })
            .await
            .unwrap();

        assert!(added);
    }

    #[tokio::test]
    async fn should_remove_existing_favorite() {
        let mut mock_repo = MockFavoriteRepo::new();
        mock_repo
            .expect_load()
            .returning(|| Ok(FavoriteSet::from_ids(vec![CoffeeId::new("3")])));
        mock_repo
            .expect_save()
            .withf(|favorites| favorites.is_empty())
            .times(1)
            .returning(|_| Ok(()));

        let use_case = ToggleFavoriteUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let added = use_case
            .execute(ToggleFavoriteParams {
                coffee_id: CoffeeId::new("3"),
            })
            .await
            .unwrap();

        assert!(!added);
    }

    #[tokio::test]
    async fn should_surface_storage_failure() {
        let mut mock_repo = MockFavoriteRepo::new();
        mock_repo
            .expect_load()
            .returning(|| Err(StorageError::Unavailable));
        mock_repo.expect_save().never();

        let use_case = ToggleFavoriteUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ToggleFavoriteParams {
                coffee_id: CoffeeId::new("3"),
            })
            .await;

        assert!(matches!(result, Err(FavoriteError::Storage(_))));
    }
}
