//! In-session shopping cart.
//!
//! An insertion-ordered list of line items plus derived totals. The totals
//! are recomputed after every mutation and never mutated independently, so
//! they cannot drift from the line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// One product line: the id plus how many units sit in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub image: String,
}

impl CartLineItem {
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartLineItem>,
    total: Decimal,
    item_count: u32,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> u32 {
        self.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `quantity` units of `product`, merging with an existing line
    /// for the same product. Quantities below one are bumped to one.
    pub fn add_item(&mut self, product: &Product, quantity: u32) {
        let quantity = quantity.max(1);
        let id = product.id.to_string();
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == id) {
            existing.quantity += quantity;
        } else {
            self.items.push(CartLineItem {
                id,
                name: product.name.clone(),
                price: product.price,
                quantity,
                image: product.image.clone(),
            });
        }
        self.recalculate();
    }

    /// Replaces the quantity of an existing line. Anything below one
    /// removes the line; an unknown id is a no-op.
    pub fn set_quantity(&mut self, id: &str, quantity: u32) {
        if quantity < 1 {
            self.remove_item(id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity = quantity;
            self.recalculate();
        }
    }

    pub fn remove_item(&mut self, id: &str) {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        if self.items.len() != before {
            self.recalculate();
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.recalculate();
    }

    fn recalculate(&mut self) {
        self.total = self.items.iter().map(CartLineItem::line_total).sum();
        self.item_count = self.items.iter().map(|i| i.quantity).sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn product(name: &str, price: i64) -> Product {
        let now = Utc::now();
        Product {
            id: Uuid::new_v4(),
            name: name.into(),
            price: Decimal::new(price, 0),
            category: "Tops".into(),
            image: format!("{name}.jpg"),
            hover_image: String::new(),
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    fn assert_totals_consistent(cart: &Cart) {
        let total: Decimal = cart.items().iter().map(CartLineItem::line_total).sum();
        let count: u32 = cart.items().iter().map(|i| i.quantity).sum();
        assert_eq!(cart.total(), total);
        assert_eq!(cart.item_count(), count);
    }

    #[test]
    fn test_add_merges_same_product() {
        let mut cart = Cart::new();
        let shirt = product("shirt", 10);
        cart.add_item(&shirt, 2);
        cart.add_item(&shirt, 3);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 5);
        assert_eq!(cart.total(), Decimal::new(50, 0));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_add_bumps_zero_quantity_to_one() {
        let mut cart = Cart::new();
        cart.add_item(&product("shirt", 10), 0);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        let shirt = product("shirt", 10);
        cart.add_item(&shirt, 2);
        cart.set_quantity(&shirt.id.to_string(), 0);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&product("shirt", 10), 2);
        cart.set_quantity("missing", 7);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_totals_hold_after_any_sequence() {
        let mut cart = Cart::new();
        let shirt = product("shirt", 10);
        let mug = product("mug", 7);
        cart.add_item(&shirt, 2);
        assert_totals_consistent(&cart);
        cart.add_item(&mug, 1);
        assert_totals_consistent(&cart);
        cart.set_quantity(&shirt.id.to_string(), 4);
        assert_totals_consistent(&cart);
        assert_eq!(cart.total(), Decimal::new(47, 0));
        cart.remove_item(&mug.id.to_string());
        assert_totals_consistent(&cart);
        cart.clear();
        assert_totals_consistent(&cart);
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_insertion_order_is_display_order() {
        let mut cart = Cart::new();
        cart.add_item(&product("first", 1), 1);
        cart.add_item(&product("second", 2), 1);
        cart.add_item(&product("third", 3), 1);
        let names: Vec<&str> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }
}
