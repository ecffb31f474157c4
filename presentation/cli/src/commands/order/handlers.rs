use std::sync::Arc;

use business::domain::auth::use_cases::restore_session::RestoreSessionUseCase;
use business::domain::cart::use_cases::get_items::GetCartItemsUseCase;
use business::domain::order::model::{OrderConfirmation, OrderHistoryEntry};
use business::domain::order::use_cases::checkout::{CheckoutParams, CheckoutUseCase};
use business::domain::order::use_cases::get_history::GetOrderHistoryUseCase;
use business::domain::order::use_cases::reorder::{ReorderParams, ReorderUseCase};

use crate::commands::cart::handlers::render_cart;
use crate::commands::error::{CommandError, IntoCommandError};

pub struct OrderCommands {
    checkout_use_case: Arc<dyn CheckoutUseCase>,
    get_cart_use_case: Arc<dyn GetCartItemsUseCase>,
    restore_session_use_case: Arc<dyn RestoreSessionUseCase>,
    history_use_case: Arc<dyn GetOrderHistoryUseCase>,
    reorder_use_case: Arc<dyn ReorderUseCase>,
}

impl OrderCommands {
    pub fn new(
        checkout_use_case: Arc<dyn CheckoutUseCase>,
        get_cart_use_case: Arc<dyn GetCartItemsUseCase>,
        restore_session_use_case: Arc<dyn RestoreSessionUseCase>,
        history_use_case: Arc<dyn GetOrderHistoryUseCase>,
        reorder_use_case: Arc<dyn ReorderUseCase>,
    ) -> Self {
        Self {
            checkout_use_case,
            get_cart_use_case,
            restore_session_use_case,
            history_use_case,
            reorder_use_case,
        }
    }

    pub async fn checkout(&self) -> Result<String, CommandError> {
        let cart = self.get_cart_use_case.execute().await;
        let user_id = self
            .restore_session_use_case
            .execute()
            .await
            .map(|session| session.user_id);

        let confirmation = self
            .checkout_use_case
            .execute(CheckoutParams { cart, user_id })
            .await
            .map_err(IntoCommandError::into_command_error)?;
        Ok(render_confirmation(&confirmation))
    }

    pub async fn history(&self) -> Result<String, CommandError> {
        let orders = self
            .history_use_case
            .execute()
            .await
            .map_err(IntoCommandError::into_command_error)?;
        if orders.is_empty() {
            return Ok("No previous orders.".to_string());
        }
        Ok(orders
            .iter()
            .map(render_order)
            .collect::<Vec<_>>()
            .join("\n\n"))
    }

    pub async fn reorder(&self, order_id: &str) -> Result<String, CommandError> {
        let order = self
            .history_use_case
            .execute()
            .await
            .map_err(IntoCommandError::into_command_error)?
            .into_iter()
            .find(|order| order.id == order_id)
            .ok_or_else(|| CommandError::new("NotFound", format!("Order {} not found", order_id)))?;

        let cart = self
            .reorder_use_case
            .execute(ReorderParams { order })
            .await
            .map_err(IntoCommandError::into_command_error)?;
        Ok(format!("Items added to your cart.\n{}", render_cart(&cart)))
    }
}

fn render_confirmation(confirmation: &OrderConfirmation) -> String {
    let mut output = "Order placed successfully!".to_string();
    if let Some(order_id) = &confirmation.order_id {
        output.push_str(&format!("\nOrder id: {}", order_id));
    }
    if let Some(message) = &confirmation.message {
        output.push_str(&format!("\n{}", message));
    }
    output
}

fn render_order(order: &OrderHistoryEntry) -> String {
    let placed = order
        .created_at
        .map(|date| date.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown date".to_string());
    let mut lines = vec![format!("Order {} ({})", order.id, placed)];
    for line in &order.lines {
        let name = line
            .coffee
            .as_ref()
            .map(|coffee| coffee.name.clone())
            .unwrap_or_else(|| format!("Coffee {}", line.line.coffee_id));
        lines.push(format!(
            "{:>3} x {}  {}",
            line.line.quantity,
            name,
            line.line.line_total()
        ));
    }
    lines.push(format!("Total: {}", order.total_price));
    lines.join("\n")
}
