use std::sync::Arc;

use business::domain::cart::model::{Cart, CartProduct};
use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::clear::ClearCartUseCase;
use business::domain::cart::use_cases::get_items::GetCartItemsUseCase;
use business::domain::cart::use_cases::remove_item::{
    RemoveCartItemParams, RemoveCartItemUseCase,
};
use business::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use business::domain::catalog::use_cases::get_by_id::{
    GetCoffeeByIdParams, GetCoffeeByIdUseCase,
};
use business::domain::shared::value_objects::CoffeeId;

use crate::commands::error::{CommandError, IntoCommandError};

pub struct CartCommands {
    get_coffee_use_case: Arc<dyn GetCoffeeByIdUseCase>,
    add_use_case: Arc<dyn AddCartItemUseCase>,
    update_quantity_use_case: Arc<dyn UpdateCartQuantityUseCase>,
    remove_use_case: Arc<dyn RemoveCartItemUseCase>,
    get_items_use_case: Arc<dyn GetCartItemsUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartCommands {
    pub fn new(
        get_coffee_use_case: Arc<dyn GetCoffeeByIdUseCase>,
        add_use_case: Arc<dyn AddCartItemUseCase>,
        update_quantity_use_case: Arc<dyn UpdateCartQuantityUseCase>,
        remove_use_case: Arc<dyn RemoveCartItemUseCase>,
        get_items_use_case: Arc<dyn GetCartItemsUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            get_coffee_use_case,
            add_use_case,
            update_quantity_use_case,
            remove_use_case,
            get_items_use_case,
            clear_use_case,
        }
    }

    /// Looks the coffee up in the catalog and adds `quantity` units of it.
    pub async fn add(&self, id: &str, quantity: u32) -> Result<String, CommandError> {
        let coffee = self
            .get_coffee_use_case
            .execute(GetCoffeeByIdParams {
                id: CoffeeId::new(id),
            })
            .await
            .map_err(IntoCommandError::into_command_error)?;

        self.add_use_case
            .execute(AddCartItemParams {
                product: CartProduct::from(&coffee),
                quantity,
            })
            .await
            .map_err(IntoCommandError::into_command_error)?;
        Ok(format!("Added {} x {} to cart successfully!", quantity, coffee.name))
    }

    pub async fn set_quantity(&self, id: &str, quantity: i64) -> Result<String, CommandError> {
        let cart = self
            .update_quantity_use_case
            .execute(UpdateCartQuantityParams {
                coffee_id: CoffeeId::new(id),
                quantity,
            })
            .await
            .map_err(IntoCommandError::into_command_error)?;
        Ok(render_cart(&cart))
    }

    pub async fn remove(&self, id: &str) -> Result<String, CommandError> {
        let cart = self
            .remove_use_case
            .execute(RemoveCartItemParams {
                coffee_id: CoffeeId::new(id),
            })
            .await
            .map_err(IntoCommandError::into_command_error)?;
        Ok(render_cart(&cart))
    }

    pub async fn show(&self) -> Result<String, CommandError> {
        let cart = self.get_items_use_case.execute().await;
        Ok(render_cart(&cart))
    }

    pub async fn clear(&self) -> Result<String, CommandError> {
        self.clear_use_case
            .execute()
            .await
            .map_err(IntoCommandError::into_command_error)?;
        Ok("Cart cleared.".to_string())
    }
}

pub fn render_cart(cart: &Cart) -> String {
    if cart.is_empty() {
        return "Your cart is empty.".to_string();
    }
    let mut lines: Vec<String> = cart
        .items()
        .iter()
        .map(|item| {
            format!(
                "{:>3} x {} ({})  {} each  {}",
                item.quantity,
                item.product.name,
                item.product.id,
                item.product.price,
                item.line_total()
            )
        })
        .collect();
    lines.push(format!("Total: {}", cart.total()));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shared::value_objects::Money;

    fn product(id: &str, name: &str, price: i64) -> CartProduct {
        CartProduct {
            id: CoffeeId::new(id),
            name: name.to_string(),
            description: String::new(),
            image: String::new(),
            price: Money::from_major(price),
        }
    }

    #[test]
    fn should_render_lines_and_total() {
        let mut cart = Cart::new();
        cart.add(product("A", "Moonlight Latte", 180), 2);
        cart.add(product("B", "Fire Roast", 220), 1);

        let output = render_cart(&cart);

        assert!(output.contains("2 x Moonlight Latte (A)"));
        assert!(output.contains("₹360"));
        assert!(output.ends_with("Total: ₹580"));
    }

    #[test]
    fn should_render_empty_cart() {
        assert_eq!(render_cart(&Cart::new()), "Your cart is empty.");
    }
}
