//! Quote request types.

use crate::catalog::Product;
use crate::checkout::CustomerDetails;
use crate::ids::{ProductId, QuoteId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Quote request status, as shown on the admin quote board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    /// Request received, not yet looked at.
    #[default]
    Pending,
    /// Back office has reviewed the request.
    Reviewed,
    /// A quote has been sent to the customer.
    Quoted,
    /// Customer accepted the quote.
    Accepted,
    /// Customer rejected the quote, or it lapsed.
    Rejected,
}

impl QuoteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteStatus::Pending => "pending",
            QuoteStatus::Reviewed => "reviewed",
            QuoteStatus::Quoted => "quoted",
            QuoteStatus::Accepted => "accepted",
            QuoteStatus::Rejected => "rejected",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            QuoteStatus::Pending => "Pending",
            QuoteStatus::Reviewed => "Reviewed",
            QuoteStatus::Quoted => "Quoted",
            QuoteStatus::Accepted => "Accepted",
            QuoteStatus::Rejected => "Rejected",
        }
    }

    /// Check if the request has reached a closed state.
    pub fn is_closed(&self) -> bool {
        matches!(self, QuoteStatus::Accepted | QuoteStatus::Rejected)
    }
}

/// One requested product line within a quote request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteItem {
    /// Requested product.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub product_name: String,
    /// Requested quantity.
    pub quantity: i64,
}

impl QuoteItem {
    /// Build a quote item from a catalog product.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        Self {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity: quantity.max(1),
        }
    }
}

/// A bulk-purchase quote request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// Unique request identifier.
    pub id: QuoteId,
    /// Requester contact details.
    pub customer: CustomerDetails,
    /// Company name, for corporate buyers.
    pub company: Option<String>,
    /// Requested products and quantities.
    pub items: Vec<QuoteItem>,
    /// Free-form message from the requester.
    pub message: Option<String>,
    /// Current workflow status.
    pub status: QuoteStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl QuoteRequest {
    /// Create a new pending quote request.
    pub fn new(customer: CustomerDetails, items: Vec<QuoteItem>) -> Self {
        let now = Utc::now();
        Self {
            id: QuoteId::generate(),
            customer,
            company: None,
            items,
            message: None,
            status: QuoteStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the company name.
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Set the requester's message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Move the request to a new status.
    pub fn set_status(&mut self, status: QuoteStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Check if the request has reached a closed state.
    pub fn is_closed(&self) -> bool {
        self.status.is_closed()
    }

    /// Get total requested unit count.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}
