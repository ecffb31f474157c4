use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::events::{EventBus, StoreEvent};
use crate::domain::logger::Logger;

pub struct RemoveCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub events: Arc<EventBus>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<Cart, CartError> {
        let mut cart = self.repository.load().await?;

        if !cart.remove(&params.coffee_id) {
            self.logger.debug(&format!(
                "Product {} is not in the cart",
                params.coffee_id
            ));
            return Ok(cart);
        }

        self.repository.save(&cart).await?;
        self.events.publish(StoreEvent::CartChanged);
        self.logger
            .info(&format!("Removed {} from cart", params.coffee_id));
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartProduct;
    use crate::domain::errors::StorageError;
    use crate::domain::events::{EventListener, Topic};
    use crate::domain::shared::value_objects::{CoffeeId, Money};
    use mockall::mock;
    use std::sync::atomic::{AtomicUsize, Ordering};

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

    fn counted_bus() -> (Arc<EventBus>, Arc<AtomicUsize>) {
        let bus = Arc::new(EventBus::new(mock_logger()));
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let listener: Arc<dyn EventListener> =
            Arc::new(move |_: &StoreEvent| -> anyhow::Result<()> {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            });
        bus.subscribe(Topic::CartChanged, listener);
        (bus, hits)
    }

    fn product(id: &str, rupees: i64) -> CartProduct {
        CartProduct {
            id: CoffeeId::new(id),
            name: format!("Coffee {id}"),
            description: String::new(),
            image: String::new(),
            price: Money::from_major(rupees),
        }
    }

    fn two_line_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(product("1", 180), 2);
        cart.add(product("2", 220), 1);
        cart
    }

    #[tokio::test]
    async fn should_drop_line_and_notify() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_load().returning(|| Ok(two_line_cart()));
        mock_repo
            .expect_save()
            .withf(|cart| cart.len() == 1 && cart.find(&CoffeeId::new("1")).is_none())
            .times(1)
            .returning(|_| Ok(()));
        let (events, hits) = counted_bus();

        let use_case = RemoveCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            events,
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(RemoveCartItemParams {
                coffee_id: CoffeeId::new("1"),
            })
            .await
            .unwrap();

        assert_eq!(cart.total(), Money::from_major(220));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_not_write_when_product_absent() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_load().returning(|| Ok(two_line_cart()));
        mock_repo.expect_save().never();
        let (events, hits) = counted_bus();

        let use_case = RemoveCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            events,
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(RemoveCartItemParams {
                coffee_id: CoffeeId::new("7"),
            })
            .await
            .unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }
}
