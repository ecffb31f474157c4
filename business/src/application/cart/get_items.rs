use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get_items::GetCartItemsUseCase;
use crate::domain::logger::Logger;

pub struct GetCartItemsUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartItemsUseCase for GetCartItemsUseCaseImpl {
    async fn execute(&self) -> Cart {
        match self.repository.load().await {
            Ok(cart) => cart,
            Err(err) => {
                self.logger
                    .warn(&format!("Cart could not be read, showing it empty: {}", err));
                Cart::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartProduct;
    use crate::domain::errors::StorageError;
    use crate::domain::shared::value_objects::{CoffeeId, Money};
    use mockall::mock;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn load(&self) -> Result<Cart, StorageError>;
            async fn save(&self, cart: &Cart) -> Result<(), StorageError>;
            async fn clear(&self) -> Result<(), StorageError>;
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
    async fn should_return_stored_cart() {
        let mut stored = Cart::new();
        stored.add(
            CartProduct {
                id: CoffeeId::new("4"),
                name: "Gemini Cold Brew".to_string(),
                description: String::new(),
                image: String::new(),
                price: Money::from_major(200),
            },
            2,
        );
        let expected = stored.clone();

        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_load().returning(move || Ok(stored.clone()));

        let use_case = GetCartItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert_eq!(use_case.execute().await, expected);
    }

    #[tokio::test]
    async fn should_fall_back_to_empty_cart_when_store_unreadable() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_load()
            .returning(|| Err(StorageError::Unavailable));

        let mut logger = MockLog::new();
        logger.expect_warn().times(1).returning(|_| ());

        let use_case = GetCartItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: Arc::new(logger),
        };

        assert!(use_case.execute().await.is_empty());
    }
}
