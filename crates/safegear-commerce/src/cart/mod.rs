//! Shopping cart module.
//!
//! Contains the cart aggregate, its line items, and the persistent cart
//! session.

mod cart;
#[cfg(feature = "storage")]
mod session;

pub use cart::{Cart, CartLine};
#[cfg(feature = "storage")]
pub use session::{CartSession, CART_STORAGE_KEY};
