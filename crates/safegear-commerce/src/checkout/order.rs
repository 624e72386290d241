//! Order submission and order tracking types.

use crate::cart::{Cart, CartLine};
use crate::checkout::CheckoutTotals;
use crate::error::CommerceError;
use crate::ids::OrderId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer contact and delivery details collected at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    /// Customer full name.
    pub full_name: String,
    /// Phone number, also used for M-Pesa confirmation.
    pub phone: String,
    /// Delivery location or street address.
    pub location: String,
    /// Delivery city.
    pub city: String,
}

impl CustomerDetails {
    pub fn new(
        full_name: impl Into<String>,
        phone: impl Into<String>,
        location: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            phone: phone.into(),
            location: location.into(),
            city: city.into(),
        }
    }
}

/// Payment method selected at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// M-Pesa mobile money.
    #[serde(rename = "mpesa")]
    Mpesa,
    /// Cash on delivery.
    #[serde(rename = "cod")]
    CashOnDelivery,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Mpesa => "mpesa",
            PaymentMethod::CashOnDelivery => "cod",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Mpesa => "M-Pesa",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }
}

/// Payment details for an order submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Selected payment method.
    pub method: PaymentMethod,
    /// M-Pesa transaction code, when the customer paid up front.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpesa_code: Option<String>,
}

impl Payment {
    /// M-Pesa payment with an optional transaction code.
    pub fn mpesa(code: Option<String>) -> Self {
        Self {
            method: PaymentMethod::Mpesa,
            mpesa_code: code,
        }
    }

    /// Cash on delivery.
    pub fn cash_on_delivery() -> Self {
        Self {
            method: PaymentMethod::CashOnDelivery,
            mpesa_code: None,
        }
    }
}

/// An immutable snapshot of the cart at the moment of order placement.
///
/// This is the payload handed to the order collaborator; nothing in it
/// tracks the live cart after it is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    /// Customer contact and delivery details.
    pub customer: CustomerDetails,
    /// Payment details.
    pub payment: Payment,
    /// Cart lines at the moment of checkout.
    pub items: Vec<CartLine>,
    /// Delivery-inclusive totals.
    pub totals: CheckoutTotals,
}

impl OrderSubmission {
    /// Snapshot a cart into a submission payload.
    ///
    /// Fails with [`CommerceError::EmptyCart`] when the cart has no lines;
    /// a zero-line submission means nothing to the order collaborator.
    pub fn from_cart(
        cart: &Cart,
        customer: CustomerDetails,
        payment: Payment,
    ) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        Ok(Self {
            customer,
            payment,
            items: cart.items().to_vec(),
            totals: CheckoutTotals::from_subtotal(cart.total_price()),
        })
    }

    /// Serialize the submission to its JSON wire form.
    pub fn to_payload_json(&self) -> Result<String, CommerceError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|l| l.quantity).sum()
    }
}

/// Confirmation returned by the order collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    /// Identifier assigned to the persisted order.
    pub order_id: OrderId,
}

/// The external order-persistence collaborator.
///
/// Submission either succeeds with a receipt or fails with a single
/// error; there is no retry policy or partial-success state here.
pub trait OrderGateway {
    fn submit(&self, submission: &OrderSubmission) -> Result<OrderReceipt, CommerceError>;
}

/// Order status, as shown on the tracking page and the admin board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, awaiting confirmation.
    #[default]
    Pending,
    /// Order confirmed by the back office.
    Confirmed,
    /// Order being prepared.
    Processing,
    /// Order out for delivery.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Check if the order can still be cancelled.
    pub fn can_cancel(&self) -> bool {
        matches!(
            self,
            OrderStatus::Pending | OrderStatus::Confirmed | OrderStatus::Processing
        )
    }
}

/// A placed order, as tracked by the back office.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-readable order number.
    pub order_number: String,
    /// Customer details as submitted.
    pub customer: CustomerDetails,
    /// Payment details as submitted.
    pub payment: Payment,
    /// Items as submitted.
    pub items: Vec<CartLine>,
    /// Totals as submitted.
    pub totals: CheckoutTotals,
    /// Current status.
    pub status: OrderStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Build an order record from an accepted submission.
    pub fn from_submission(id: OrderId, submission: OrderSubmission) -> Self {
        let now = Utc::now();
        Self {
            id,
            order_number: Self::generate_order_number(),
            customer: submission.customer,
            payment: submission.payment,
            items: submission.items,
            totals: submission.totals,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Generate a new order number.
    pub fn generate_order_number() -> String {
        format!("SG-{}", Utc::now().timestamp())
    }

    /// Update the order status.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Cancel the order, if it can still be cancelled.
    pub fn cancel(&mut self) -> bool {
        if !self.status.can_cancel() {
            return false;
        }
        self.set_status(OrderStatus::Cancelled);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::{Currency, Money};

    fn cart_with_boots() -> Cart {
        let boots = Product::new(
            "BT-02",
            "Steel-Toe Boots",
            "steel-toe-boots",
            Money::new(450000, Currency::KES),
        )
        .with_stock(8);
        let mut cart = Cart::new();
        cart.add_item(CartLine::from_product(&boots, 2));
        cart
    }

    fn customer() -> CustomerDetails {
        CustomerDetails::new("Wanjiku Kamau", "0712345678", "Industrial Area", "Nairobi")
    }

    #[test]
    fn test_submission_snapshots_cart() {
        let cart = cart_with_boots();
        let submission =
            OrderSubmission::from_cart(&cart, customer(), Payment::cash_on_delivery()).unwrap();

        assert_eq!(submission.item_count(), 2);
        assert_eq!(submission.totals.subtotal, cart.total_price());
        assert_eq!(
            submission.totals.grand_total.amount_cents,
            900000 + 144000 + 30000
        );
    }

    #[test]
    fn test_submission_rejects_empty_cart() {
        let cart = Cart::new();
        let result = OrderSubmission::from_cart(&cart, customer(), Payment::cash_on_delivery());
        assert!(matches!(result, Err(CommerceError::EmptyCart)));
    }

    #[test]
    fn test_payment_wire_codes() {
        let json = serde_json::to_string(&Payment::mpesa(Some("QCX12345".to_string()))).unwrap();
        assert!(json.contains(r#""method":"mpesa""#));
        assert!(json.contains(r#""mpesaCode":"QCX12345""#));

        let json = serde_json::to_string(&Payment::cash_on_delivery()).unwrap();
        assert!(json.contains(r#""method":"cod""#));
        assert!(!json.contains("mpesaCode"));
    }

    #[test]
    fn test_payload_json_shape() {
        let cart = cart_with_boots();
        let submission =
            OrderSubmission::from_cart(&cart, customer(), Payment::cash_on_delivery()).unwrap();

        let json = submission.to_payload_json().unwrap();
        assert!(json.contains(r#""fullName":"Wanjiku Kamau""#));
        assert!(json.contains(r#""grandTotal""#));
        assert!(json.contains(r#""items""#));
    }

    #[test]
    fn test_order_status_labels() {
        assert_eq!(OrderStatus::Shipped.as_str(), "shipped");
        assert_eq!(OrderStatus::Shipped.display_name(), "Shipped");
        assert!(!OrderStatus::Shipped.is_terminal());
        assert!(OrderStatus::Delivered.is_terminal());
    }

    #[test]
    fn test_order_cancel() {
        let cart = cart_with_boots();
        let submission =
            OrderSubmission::from_cart(&cart, customer(), Payment::cash_on_delivery()).unwrap();
        let mut order = Order::from_submission(OrderId::generate(), submission);

        assert!(order.cancel());
        assert_eq!(order.status, OrderStatus::Cancelled);

        // Terminal orders stay put
        assert!(!order.cancel());
    }

    #[test]
    fn test_order_number_format() {
        let number = Order::generate_order_number();
        assert!(number.starts_with("SG-"));
    }
}
