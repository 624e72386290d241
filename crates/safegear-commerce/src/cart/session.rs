//! Cart session: the durable side of the cart.
//!
//! Owns the authoritative [`Cart`] for the current visitor and keeps a
//! best-effort copy in a store so a restart does not lose cart contents.
//! Persistence failures are logged and swallowed; the mutation surface
//! stays infallible.

use crate::cart::{Cart, CartLine};
use crate::checkout::{CustomerDetails, OrderGateway, OrderReceipt, OrderSubmission, Payment};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use safegear_store::ObjectStore;

/// Fixed key the cart is persisted under.
pub const CART_STORAGE_KEY: &str = "safegear:cart";

/// A cart bound to a persistence backend.
pub struct CartSession<S: ObjectStore> {
    cart: Cart,
    store: S,
}

impl<S: ObjectStore> CartSession<S> {
    /// Open a session, restoring the persisted cart when possible.
    ///
    /// A missing entry yields a fresh empty cart; an unreadable or
    /// unparseable entry does too, with a warning logged. Opening never
    /// fails.
    pub fn open(store: S) -> Self {
        let cart = match store.get::<Cart>(CART_STORAGE_KEY) {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "could not restore persisted cart, starting empty");
                Cart::new()
            }
        };
        Self { cart, store }
    }

    /// Read access to the current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Sum of all line subtotals.
    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    /// Add a line; see [`Cart::add_item`].
    pub fn add_item(&mut self, line: CartLine) {
        self.cart.add_item(line);
        self.persist();
    }

    /// Update a line's quantity; see [`Cart::update_quantity`].
    ///
    /// Persists even when the product id is absent.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        let found = self.cart.update_quantity(product_id, quantity);
        self.persist();
        found
    }

    /// Remove a line; see [`Cart::remove_item`].
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let removed = self.cart.remove_item(product_id);
        self.persist();
        removed
    }

    /// Reset to a new empty cart.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// Snapshot the cart into an order submission and hand it to the
    /// gateway. On success the cart is cleared; on failure it is left
    /// intact so the visitor can retry.
    pub fn place_order<G: OrderGateway>(
        &mut self,
        gateway: &G,
        customer: CustomerDetails,
        payment: Payment,
    ) -> Result<OrderReceipt, CommerceError> {
        let submission = OrderSubmission::from_cart(&self.cart, customer, payment)?;
        let receipt = gateway.submit(&submission)?;
        self.clear();
        Ok(receipt)
    }

    /// Write-through after a mutation, best-effort.
    ///
    /// An empty cart deletes the persisted entry instead of storing an
    /// empty record; the next open regenerates an empty cart anyway.
    fn persist(&self) {
        let result = if self.cart.is_empty() {
            self.store.delete(CART_STORAGE_KEY)
        } else {
            self.store.set(CART_STORAGE_KEY, &self.cart)
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, "could not persist cart");
        }
    }
}
