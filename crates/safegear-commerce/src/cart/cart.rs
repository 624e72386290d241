//! Cart and line item types.

use crate::catalog::Product;
use crate::ids::{CartId, ProductId};
use crate::money::{Currency, Money};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One product-and-quantity entry within a cart.
///
/// Display and price fields are snapshotted from the product at the moment
/// it is added; later catalog changes do not reach lines already in a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product identifier; unique within the cart's line list.
    pub product_id: ProductId,
    /// Product name at time of adding.
    pub name: String,
    /// Primary image URL.
    pub image_url: Option<String>,
    /// URL-friendly slug.
    pub slug: String,
    /// Stock keeping unit.
    pub sku: String,
    /// Category display name.
    pub category: String,
    /// Safety certification labels.
    pub certifications: Vec<String>,
    /// Free-form specification map (material, size, color, ...).
    pub specs: BTreeMap<String, String>,
    /// Unit price at time of adding.
    pub unit_price: Money,
    /// Previous price, if the product was discounted.
    pub old_price: Option<Money>,
    /// Quantity; always >= 1 for a stored line.
    pub quantity: i64,
    /// quantity * unit_price, at this line's recorded unit price.
    pub subtotal: Money,
    /// Stock flag snapshot at time of adding.
    pub in_stock: bool,
    /// Stock count snapshot at time of adding.
    pub stock_count: i64,
}

impl CartLine {
    /// Snapshot a product into a cart line.
    ///
    /// Quantities below 1 are clamped to 1; a stored line always has a
    /// positive quantity.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        let quantity = quantity.max(1);
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            slug: product.slug.clone(),
            sku: product.sku.clone(),
            category: product.category.clone(),
            certifications: product.certifications.clone(),
            specs: product.specs.clone(),
            unit_price: product.price,
            old_price: product.old_price,
            quantity,
            subtotal: product.price.saturating_multiply(quantity),
            in_stock: product.in_stock,
            stock_count: product.stock_count,
        }
    }

    /// Recompute the subtotal from the recorded unit price.
    fn update_subtotal(&mut self) {
        self.subtotal = self.unit_price.saturating_multiply(self.quantity);
    }
}

/// The visitor's shopping cart.
///
/// The line list is only reachable through the mutation operations below
/// and the read-only [`items`](Cart::items) accessor; callers never get a
/// handle they could mutate past the invariants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    id: CartId,
    currency: Currency,
    items: Vec<CartLine>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Cart {
    /// Create a new empty cart.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: CartId::generate(),
            currency: Currency::default(),
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The cart identifier. Regenerated whenever the cart is cleared.
    pub fn id(&self) -> &CartId {
        &self.id
    }

    /// The cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// The lines in the cart, in insertion order.
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last-update timestamp.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Add a line to the cart.
    ///
    /// If a line with the same product identifier exists, its quantity is
    /// increased by the incoming quantity and its subtotal recomputed at
    /// the price already recorded on the line. Every other stored field
    /// wins over the incoming line's; the price and display fields of an
    /// already-carted product are stable. Otherwise the line is appended
    /// unchanged.
    pub fn add_item(&mut self, line: CartLine) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|l| l.product_id == line.product_id)
        {
            existing.quantity = existing.quantity.saturating_add(line.quantity);
            existing.update_subtotal();
        } else {
            self.items.push(line);
        }
        self.updated_at = Utc::now();
    }

    /// Update a line's quantity.
    ///
    /// A quantity below 1 removes the line instead (see
    /// [`remove_item`](Cart::remove_item)). An absent product id is a
    /// no-op. Returns whether a line was found.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        if quantity < 1 {
            return self.remove_item(product_id);
        }

        if let Some(line) = self.items.iter_mut().find(|l| &l.product_id == product_id) {
            line.quantity = quantity;
            line.update_subtotal();
            self.updated_at = Utc::now();
            true
        } else {
            false
        }
    }

    /// Remove the line with the given product identifier.
    ///
    /// Removing the last remaining line resets the cart to a brand-new
    /// empty instance with a fresh identifier and fresh timestamps;
    /// removing the last item is equivalent to clearing the cart. Returns
    /// whether a line was removed.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|l| &l.product_id != product_id);
        let removed = self.items.len() < len_before;
        if removed {
            if self.items.is_empty() {
                *self = Cart::new();
            } else {
                self.updated_at = Utc::now();
            }
        }
        removed
    }

    /// Reset to a new empty cart with a fresh identifier.
    pub fn clear(&mut self) {
        *self = Cart::new();
    }

    /// Sum of all line subtotals. Recomputed on every read.
    pub fn total_price(&self) -> Money {
        Money::saturating_sum(self.items.iter().map(|l| &l.subtotal), self.currency)
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|l| l.quantity).sum()
    }

    /// Get number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line by product identifier.
    pub fn get_item(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.items.iter().find(|l| &l.product_id == product_id)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
