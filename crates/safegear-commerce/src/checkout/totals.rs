//! Delivery-inclusive checkout totals.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// VAT rate applied at checkout. Fixed, not configurable.
pub const VAT_RATE: f64 = 0.16;

/// Flat delivery fee in cents (KSh 300.00).
pub const DELIVERY_FEE_CENTS: i64 = 30_000;

/// Totals for an order submission.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutTotals {
    /// Cart total at the moment of checkout.
    pub subtotal: Money,
    /// subtotal * VAT_RATE, rounded to the nearest cent.
    pub vat: Money,
    /// Flat delivery fee.
    pub delivery: Money,
    /// subtotal + vat + delivery.
    pub grand_total: Money,
}

impl CheckoutTotals {
    /// Compute delivery-inclusive totals from a cart subtotal.
    pub fn from_subtotal(subtotal: Money) -> Self {
        let vat = subtotal.multiply_decimal(VAT_RATE);
        let delivery = Money::new(DELIVERY_FEE_CENTS, subtotal.currency);
        let grand_total = subtotal.saturating_add(&vat).saturating_add(&delivery);
        Self {
            subtotal,
            vat,
            delivery,
            grand_total,
        }
    }
}
