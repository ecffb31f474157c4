use chrono::{DateTime, Utc};

use crate::domain::cart::model::{Cart, CartItem, CartProduct};
use crate::domain::catalog::model::Coffee;
use crate::domain::errors::ValidationError;
use crate::domain::shared::value_objects::{CoffeeId, Money, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub coffee_id: CoffeeId,
    pub quantity: u32,
    /// Price per unit when the order was placed.
    pub unit_price: Money,
}

impl OrderLine {
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

impl From<&CartItem> for OrderLine {
    fn from(item: &CartItem) -> Self {
        Self {
            coffee_id: item.product.id.clone(),
            quantity: item.quantity,
            unit_price: item.product.price,
        }
    }
}

/// Payload for `POST /orders`. The total is fixed here from the cart prices.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub user_id: UserId,
    pub lines: Vec<OrderLine>,
    pub total_price: Money,
}

impl OrderDraft {
    pub fn from_cart(cart: &Cart, user_id: UserId) -> Result<Self, ValidationError> {
        if cart.is_empty() {
            return Err(ValidationError::EmptyCart);
        }
        let lines: Vec<OrderLine> = cart.items().iter().map(OrderLine::from).collect();
        let total_price = lines.iter().map(OrderLine::line_total).sum();
        Ok(Self {
            user_id,
            lines,
            total_price,
        })
    }
}

/// What the API answered to a submitted order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    pub order_id: Option<String>,
    pub message: Option<String>,
}

/// An order as listed in the user's profile.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOrder {
    pub id: String,
    pub lines: Vec<OrderLine>,
    pub total_price: Money,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryLine {
    pub line: OrderLine,
    /// Current catalog entry, if it could still be fetched.
    pub coffee: Option<Coffee>,
}

impl HistoryLine {
    /// Cart entry for this line at the price recorded on the order.
    pub fn to_cart_product(&self) -> CartProduct {
        match &self.coffee {
            Some(coffee) => CartProduct {
                price: self.line.unit_price,
                ..CartProduct::from(coffee)
            },
            None => CartProduct {
                id: self.line.coffee_id.clone(),
                name: self.line.coffee_id.to_string(),
                description: String::new(),
                image: String::new(),
                price: self.line.unit_price,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderHistoryEntry {
    pub id: String,
    pub lines: Vec<HistoryLine>,
    pub total_price: Money,
    pub created_at: Option<DateTime<Utc>>,
}
