//! Cart line item types.

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::ProductId;

/// A product held in the cart together with its quantity.
///
/// The quantity is never zero; an item that would drop to zero is removed
/// from the cart instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    /// Product identifier, unique within a cart.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Product image URI.
    pub image_url: String,
    /// Unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Number of units in the cart.
    pub quantity: NonZeroU32,
}

impl CartItem {
    /// Create an item with quantity 1.
    pub fn new(product: NewCartItem) -> Self {
        Self {
            id: product.id,
            title: product.title,
            image_url: product.image_url,
            price: product.price,
            quantity: NonZeroU32::MIN,
        }
    }

    /// Quantity as a plain integer.
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }
}

/// A product as offered to [`Cart::add`](crate::Cart::add): everything but
/// the quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCartItem {
    /// Product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Product image URI.
    pub image_url: String,
    /// Unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl NewCartItem {
    /// Create a new product description.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        image_url: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image_url: image_url.into(),
            price,
        }
    }
}
