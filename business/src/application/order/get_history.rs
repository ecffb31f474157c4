use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::repository::SessionRepository;
use crate::domain::auth::services::AuthService;
use crate::domain::catalog::model::Coffee;
use crate::domain::catalog::services::CatalogService;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderHistoryError;
use crate::domain::order::model::{HistoryLine, OrderHistoryEntry};
use crate::domain::order::use_cases::get_history::GetOrderHistoryUseCase;
use crate::domain::shared::value_objects::CoffeeId;

pub struct GetOrderHistoryUseCaseImpl {
    pub service: Arc<dyn AuthService>,
    pub catalog: Arc<dyn CatalogService>,
    pub sessions: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

impl GetOrderHistoryUseCaseImpl {
    async fn resolve(
        &self,
        id: &CoffeeId,
        cache: &mut HashMap<CoffeeId, Option<Coffee>>,
    ) -> Option<Coffee> {
        if let Some(known) = cache.get(id) {
            return known.clone();
        }
        let coffee = match self.catalog.get_coffee(id).await {
            Ok(coffee) => Some(coffee),
            Err(err) => {
                self.logger
                    .debug(&format!("No catalog details for {}: {:?}", id, err));
                None
            }
        };
        cache.insert(id.clone(), coffee.clone());
        coffee
    }
}

#[async_trait]
impl GetOrderHistoryUseCase for GetOrderHistoryUseCaseImpl {
    async fn execute(&self) -> Result<Vec<OrderHistoryEntry>, OrderHistoryError> {
        let session = match self.sessions.load().await {
            Ok(Some(session)) => session,
            Ok(None) => return Err(OrderHistoryError::AuthRequired),
            Err(err) => {
                self.logger
                    .warn(&format!("Stored session could not be read: {}", err));
                return Err(OrderHistoryError::AuthRequired);
            }
        };

        let user = self
            .service
            .fetch_user(&session.user_id, Some(session.token))
            .await?;
        self.logger.info(&format!(
            "Loaded {} previous order(s) for {}",
            user.previous_orders.len(),
            user.id
        ));

        let mut cache = HashMap::new();
        let mut history = Vec::with_capacity(user.previous_orders.len());
        for order in user.previous_orders {
            let mut lines = Vec::with_capacity(order.lines.len());
            for line in order.lines {
                let coffee = self.resolve(&line.coffee_id, &mut cache).await;
                lines.push(HistoryLine { line, coffee });
            }
            history.push(OrderHistoryEntry {
                id: order.id,
                lines,
                total_price: order.total_price,
                created_at: order.created_at,
            });
        }
        Ok(history)
    }
}
