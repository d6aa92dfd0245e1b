//! Shopping cart module.
//!
//! Contains the cart list and its line item types.

mod cart;
mod item;

pub use cart::{Cart, CartChange};
pub use item::{CartItem, NewCartItem};
