use serde::{Deserialize, Serialize};

use business::domain::cart::model::{Cart, CartItem, CartProduct};
use business::domain::shared::value_objects::{CoffeeId, Money};

/// Stored shape of one cart line: `{"coffee": {...}, "quantity": 2}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CartItemEntity {
    pub coffee: CartCoffeeEntity,
    pub quantity: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CartCoffeeEntity {
    pub id: CoffeeId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub price: Money,
}

impl CartItemEntity {
    pub fn from_domain(item: &CartItem) -> Self {
        Self {
            coffee: CartCoffeeEntity {
                id: item.product.id.clone(),
                name: item.product.name.clone(),
                description: item.product.description.clone(),
                image: item.product.image.clone(),
                price: item.product.price,
            },
            quantity: i64::from(item.quantity),
        }
    }

    /// `None` for lines whose quantity is not a positive count.
    pub fn into_domain(self) -> Option<CartItem> {
        let quantity = u32::try_from(self.quantity).ok().filter(|q| *q > 0)?;
        Some(CartItem {
            product: CartProduct {
                id: self.coffee.id,
                name: self.coffee.name,
                description: self.coffee.description,
                image: self.coffee.image,
                price: self.coffee.price,
            },
            quantity,
        })
    }
}

pub fn cart_from_entities(entities: Vec<CartItemEntity>) -> Cart {
    Cart::from_items(entities.into_iter().filter_map(CartItemEntity::into_domain))
}
