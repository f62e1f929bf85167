//! # Cart
//!
//! The in-progress, single-store collection of products awaiting checkout.
//!
//! ## Cart Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_item(product)                                                      │
//! │       │                                                                 │
//! │       ├── cart empty?                  → new line, qty 1                │
//! │       │                                                                 │
//! │       ├── product.store_id != cart's?  → StoreMismatch (cart untouched) │
//! │       │                                                                 │
//! │       ├── line for product.id exists?  → qty += 1                       │
//! │       │                                                                 │
//! │       └── otherwise                    → new line, qty 1                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Every line shares the same `store_id`.
//! - Lines are unique by product id.
//! - Every quantity is >= 1.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{CartItem, Product};

/// The shopping cart.
///
/// Deserialized carts are re-checked line by line, so the invariants above
/// hold no matter where a cart came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawCart")]
pub struct Cart {
    items: Vec<CartItem>,
}

/// Unchecked wire shape of a [`Cart`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCart {
    items: Vec<CartItem>,
}

impl TryFrom<RawCart> for Cart {
    type Error = CoreError;

    fn try_from(raw: RawCart) -> CoreResult<Self> {
        let mut cart = Cart::new();

        for line in raw.items {
            if line.quantity == 0 {
                return Err(ValidationError::InvalidFormat {
                    field: "quantity".to_string(),
                    reason: format!("line for product {} must be at least 1", line.product.id),
                }
                .into());
            }
            if let Some(cart_store) = cart.store_id() {
                if cart_store != line.product.store_id {
                    return Err(CoreError::StoreMismatch {
                        cart_store: cart_store.to_string(),
                        product_store: line.product.store_id,
                    });
                }
            }
            if cart.items.iter().any(|i| i.product.id == line.product.id) {
                return Err(ValidationError::InvalidFormat {
                    field: "items".to_string(),
                    reason: format!("duplicate line for product {}", line.product.id),
                }
                .into());
            }
            cart.items.push(line);
        }

        Ok(cart)
    }
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds one unit of `product`.
    ///
    /// Rejects a product whose store differs from the store of the items
    /// already in the cart; the cart is left unchanged in that case.
    pub fn add_item(&mut self, product: &Product) -> CoreResult<()> {
        if let Some(cart_store) = self.store_id() {
            if cart_store != product.store_id {
                return Err(CoreError::StoreMismatch {
                    cart_store: cart_store.to_string(),
                    product_store: product.store_id.clone(),
                });
            }
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += 1;
            return Ok(());
        }

        self.items.push(CartItem::new(product));
        Ok(())
    }

    /// Removes the line for `product_id`. Returns whether a line was removed.
    pub fn remove_item(&mut self, product_id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product.id != product_id);
        self.items.len() != initial_len
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The store every line belongs to, if the cart has any lines.
    pub fn store_id(&self) -> Option<&str> {
        self.items.first().map(|i| i.product.store_id.as_str())
    }

    /// Cart lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Returns the number of distinct products in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of price × quantity over every line.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Lines whose product supports the AR try-on view.
    pub fn try_on_items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter().filter(|i| i.product.can_try_on)
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, store_id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price: Money::from_cents(price_cents),
            store_id: store_id.to_string(),
            store_name: format!("Store {}", store_id),
            image: String::new(),
            can_try_on: false,
        }
    }

    #[test]
    fn test_add_to_empty_cart() {
        let mut cart = Cart::new();
        cart.add_item(&product("1", "1", 8999)).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
        assert_eq!(cart.store_id(), Some("1"));
    }

    #[test]
    fn test_add_same_product_increases_quantity() {
        let mut cart = Cart::new();
        let jacket = product("1", "1", 8999);

        cart.add_item(&jacket).unwrap();
        cart.add_item(&jacket).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.total().cents(), 17998);
    }

    #[test]
    fn test_add_from_other_store_is_rejected() {
        let mut cart = Cart::new();
        cart.add_item(&product("1", "1", 8999)).unwrap();
        let before = cart.clone();

        let err = cart.add_item(&product("3", "2", 14999)).unwrap_err();

        assert_eq!(
            err,
            CoreError::StoreMismatch {
                cart_store: "1".to_string(),
                product_store: "2".to_string(),
            }
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_other_product_same_store_gets_new_line() {
        let mut cart = Cart::new();
        cart.add_item(&product("1", "1", 8999)).unwrap();
        cart.add_item(&product("2", "1", 2499)).unwrap();

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total().cents(), 11498);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.add_item(&product("1", "1", 8999)).unwrap();
        cart.add_item(&product("2", "1", 2499)).unwrap();

        assert!(cart.remove_item("1"));
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].product.id, "2");

        // Missing id is a no-op
        assert!(!cart.remove_item("42"));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_clear_resets_store() {
        let mut cart = Cart::new();
        cart.add_item(&product("1", "1", 8999)).unwrap();
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.store_id(), None);

        // Any store is accepted again once cleared
        cart.add_item(&product("3", "2", 14999)).unwrap();
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_removing_last_line_frees_store() {
        let mut cart = Cart::new();
        cart.add_item(&product("1", "1", 8999)).unwrap();
        cart.remove_item("1");

        assert!(cart.add_item(&product("3", "2", 14999)).is_ok());
    }

    #[test]
    fn test_try_on_items() {
        let mut cart = Cart::new();
        let mut jacket = product("1", "1", 8999);
        jacket.can_try_on = true;
        cart.add_item(&jacket).unwrap();
        cart.add_item(&product("9", "1", 100)).unwrap();

        let ids: Vec<&str> = cart.try_on_items().map(|i| i.product.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
    }

    fn line(id: &str, store_id: &str, quantity: u32) -> serde_json::Value {
        serde_json::to_value(CartItem {
            product: product(id, store_id, 8999),
            quantity,
        })
        .unwrap()
    }

    fn parse(lines: Vec<serde_json::Value>) -> Result<Cart, serde_json::Error> {
        serde_json::from_value(serde_json::json!({ "items": lines }))
    }

    #[test]
    fn test_deserialize_valid_cart() {
        let mut cart = Cart::new();
        cart.add_item(&product("1", "1", 8999)).unwrap();
        cart.add_item(&product("1", "1", 8999)).unwrap();
        cart.add_item(&product("2", "1", 2499)).unwrap();

        let json = serde_json::to_string(&cart).unwrap();
        let parsed: Cart = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, cart);
    }

    #[test]
    fn test_deserialize_rejects_mixed_stores() {
        let err = parse(vec![line("1", "1", 1), line("3", "2", 1)]).unwrap_err();
        assert!(err.to_string().contains("store 1"));
    }

    #[test]
    fn test_deserialize_rejects_zero_quantity() {
        assert!(parse(vec![line("1", "1", 0)]).is_err());
    }

    #[test]
    fn test_deserialize_rejects_duplicate_lines() {
        assert!(parse(vec![line("3", "2", 1), line("3", "2", 1)]).is_err());
    }
}
