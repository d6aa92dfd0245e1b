//! The in-memory cart list.

use std::collections::HashSet;
use std::num::NonZeroU32;

use serde::Serialize;

use crate::cart::{CartItem, NewCartItem};
use crate::error::CartError;
use crate::ids::ProductId;

/// Outcome of a single cart mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    /// A new item was appended with quantity 1.
    Added,
    /// An existing item's quantity went up; holds the new quantity.
    Incremented(u32),
    /// An existing item's quantity went down; holds the new quantity.
    Decremented(u32),
    /// The item was at quantity 1 and has been removed.
    Removed,
    /// No item with the given identifier; nothing changed.
    Unchanged,
}

impl CartChange {
    /// Whether the cart contents differ after this change.
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// An ordered list of cart items with unique identifiers.
///
/// Serializes as a bare JSON array of [`CartItem`]s. There is no
/// `Deserialize` impl; build a cart from decoded items with
/// [`Cart::from_items`], which enforces identifier uniqueness.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from previously persisted items, keeping their order.
    ///
    /// Returns an error if two items share an identifier.
    pub fn from_items(items: Vec<CartItem>) -> Result<Self, CartError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(CartError::DuplicateItem(item.id.to_string()));
            }
        }
        Ok(Self { items })
    }

    /// Add a product.
    ///
    /// A product not yet in the cart is appended with quantity 1; a product
    /// already present has its quantity increased by 1 instead.
    pub fn add(&mut self, product: NewCartItem) -> Result<CartChange, CartError> {
        match self.position(&product.id) {
            Some(index) => self.bump(index),
            None => {
                self.items.push(CartItem::new(product));
                Ok(CartChange::Added)
            }
        }
    }

    /// Increase the quantity of `id` by 1. Absent ids are left alone.
    pub fn increment(&mut self, id: &ProductId) -> Result<CartChange, CartError> {
        match self.position(id) {
            Some(index) => self.bump(index),
            None => Ok(CartChange::Unchanged),
        }
    }

    /// Decrease the quantity of `id` by 1, removing the item when it would
    /// reach zero. Absent ids are left alone.
    pub fn decrement(&mut self, id: &ProductId) -> CartChange {
        let Some(index) = self.position(id) else {
            return CartChange::Unchanged;
        };

        let item = &mut self.items[index];
        match NonZeroU32::new(item.quantity.get() - 1) {
            Some(quantity) => {
                item.quantity = quantity;
                CartChange::Decremented(quantity.get())
            }
            None => {
                self.items.remove(index);
                CartChange::Removed
            }
        }
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Consume the cart, returning its items.
    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    /// Get an item by identifier.
    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Check if the cart holds `id`.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.position(id).is_some()
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all items (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity.get())).sum()
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|i| &i.id == id)
    }

    fn bump(&mut self, index: usize) -> Result<CartChange, CartError> {
        let item = &mut self.items[index];
        let quantity = item
            .quantity
            .checked_add(1)
            .ok_or_else(|| CartError::QuantityOverflow(item.id.to_string()))?;
        item.quantity = quantity;
        Ok(CartChange::Incremented(quantity.get()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: &str) -> NewCartItem {
        NewCartItem::new(
            id,
            format!("Product {id}"),
            format!("https://cdn.example.com/{id}.png"),
            Decimal::new(10, 0),
        )
    }

    fn with_quantity(id: &str, quantity: u32) -> CartItem {
        let mut item = CartItem::new(product(id));
        item.quantity = NonZeroU32::new(quantity).unwrap();
        item
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_new_item_appends_with_quantity_one() {
        let mut cart = Cart::new();
        let change = cart.add(product("x")).unwrap();

        assert_eq!(change, CartChange::Added);
        assert_eq!(cart.len(), 1);
        let item = &cart.items()[0];
        assert_eq!(item.id, "x");
        assert_eq!(item.quantity(), 1);
        assert_eq!(item.price, Decimal::new(10, 0));
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new();
        cart.add(product("x")).unwrap();
        let change = cart.add(product("x")).unwrap();

        assert_eq!(change, CartChange::Incremented(2));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut cart = Cart::new();
        cart.add(product("b")).unwrap();
        cart.add(product("a")).unwrap();
        cart.add(product("b")).unwrap();

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_increment_present_item() {
        let mut cart = Cart::from_items(vec![with_quantity("a", 4)]).unwrap();

        assert_eq!(cart.increment(&"a".into()).unwrap(), CartChange::Incremented(5));
        assert_eq!(cart.get(&"a".into()).unwrap().quantity(), 5);
    }

    #[test]
    fn test_increment_absent_item_is_noop() {
        let mut cart = Cart::from_items(vec![with_quantity("a", 1)]).unwrap();
        let before = cart.clone();

        assert_eq!(cart.increment(&"missing".into()).unwrap(), CartChange::Unchanged);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_decrement_to_removal() {
        let mut cart = Cart::from_items(vec![with_quantity("a", 2)]).unwrap();

        assert_eq!(cart.decrement(&"a".into()), CartChange::Decremented(1));
        assert_eq!(cart.items(), &[with_quantity("a", 1)]);

        assert_eq!(cart.decrement(&"a".into()), CartChange::Removed);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_decrement_removes_only_target() {
        let mut cart = Cart::from_items(vec![
            with_quantity("a", 1),
            with_quantity("b", 1),
            with_quantity("c", 3),
        ])
        .unwrap();

        cart.decrement(&"b".into());

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_decrement_absent_item_is_noop() {
        let mut cart = Cart::from_items(vec![with_quantity("a", 1)]).unwrap();

        assert_eq!(cart.decrement(&"missing".into()), CartChange::Unchanged);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_from_items_rejects_duplicates() {
        let result = Cart::from_items(vec![with_quantity("a", 1), with_quantity("a", 2)]);
        assert!(matches!(result, Err(CartError::DuplicateItem(id)) if id == "a"));
    }

    #[test]
    fn test_quantity_overflow_leaves_item_untouched() {
        let mut cart = Cart::from_items(vec![with_quantity("a", u32::MAX)]).unwrap();

        let result = cart.increment(&"a".into());
        assert!(matches!(result, Err(CartError::QuantityOverflow(_))));
        assert_eq!(cart.get(&"a".into()).unwrap().quantity(), u32::MAX);
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let cart = Cart::from_items(vec![with_quantity("a", 2), with_quantity("b", 3)]).unwrap();
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.len(), 2);
        assert!(cart.contains(&"b".into()));
        assert!(!cart.contains(&"c".into()));
    }

    #[test]
    fn test_serializes_as_array() {
        let mut cart = Cart::new();
        cart.add(product("x")).unwrap();

        let value = serde_json::to_value(&cart).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["id"], "x");
        assert_eq!(value[0]["quantity"], 1);
    }
}
