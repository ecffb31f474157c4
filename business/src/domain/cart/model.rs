use crate::domain::catalog::model::Coffee;
use crate::domain::shared::value_objects::{CoffeeId, Money};

/// Snapshot of a coffee taken when it was put in the cart.
///
/// Later catalog changes do not reach items already in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartProduct {
    pub id: CoffeeId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: Money,
}

impl From<&Coffee> for CartProduct {
    fn from(coffee: &Coffee) -> Self {
        Self {
            id: coffee.id.clone(),
            name: coffee.name.clone(),
            description: coffee.description.clone(),
            image: coffee.image.clone(),
            price: coffee.price,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product: CartProduct,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> Money {
        self.product.price.times(self.quantity)
    }
}

/// Badge and footer figures for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSummary {
    /// Distinct products, the number shown on the cart badge.
    pub lines: usize,
    pub units: u64,
    pub subtotal: Money,
}

/// Ordered cart lines with at most one line per coffee id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a cart from stored lines, merging duplicates and dropping
    /// lines with a zero quantity.
    pub fn from_items(items: impl IntoIterator<Item = CartItem>) -> Self {
        let mut cart = Cart::new();
        for item in items {
            cart.add(item.product, item.quantity);
        }
        cart
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn find(&self, id: &CoffeeId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.product.id == id)
    }

    /// Adds `quantity` units, incrementing the existing line for the same coffee.
    /// A zero quantity leaves the cart untouched.
    pub fn add(&mut self, product: CartProduct, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self
            .items
            .iter_mut()
            .find(|item| item.product.id == product.id)
        {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(quantity),
            None => self.items.push(CartItem { product, quantity }),
        }
    }

    /// Replaces the quantity of a line. Returns false (and changes nothing)
    /// when the quantity is below one or the coffee is not in the cart.
    pub fn set_quantity(&mut self, id: &CoffeeId, quantity: i64) -> bool {
        let Ok(quantity) = u32::try_from(quantity) else {
            return false;
        };
        if quantity < 1 {
            return false;
        }
        match self.items.iter_mut().find(|item| &item.product.id == id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Returns false when the coffee was not in the cart.
    pub fn remove(&mut self, id: &CoffeeId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.product.id != id);
        self.items.len() != before
    }

    pub fn total(&self) -> Money {
        compute_total(&self.items)
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            lines: self.items.len(),
            units: self.items.iter().map(|item| u64::from(item.quantity)).sum(),
            subtotal: self.total(),
        }
    }
}

/// Sum of price times quantity over `items`.
pub fn compute_total(items: &[CartItem]) -> Money {
    items.iter().map(CartItem::line_total).sum()
}
