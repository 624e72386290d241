//! E-commerce domain types and logic for the SafeGear PPE storefront.
//!
//! This crate provides the storefront's domain layer:
//!
//! - **Catalog**: Products with certification labels and spec maps, categories
//! - **Cart**: Shopping cart with line items, derived totals, and a
//!   persistent session (`storage` feature)
//! - **Checkout**: Order submission snapshot, delivery-inclusive totals, orders
//! - **Quote**: Bulk-purchase quote requests
//! - **Search**: In-memory filtering and sorting over the catalog
//!
//! # Example
//!
//! ```rust,ignore
//! use safegear_commerce::prelude::*;
//! use safegear_store::FileStore;
//!
//! // Open the visitor's cart, restoring any persisted contents
//! let store = FileStore::open("/var/lib/safegear")?;
//! let mut session = CartSession::open(store);
//!
//! // Add a product
//! session.add_item(CartLine::from_product(&hard_hat, 2));
//! println!("Total: {}", session.total_price().display());
//!
//! // Check out
//! let receipt = session.place_order(
//!     &gateway,
//!     CustomerDetails::new("Wanjiku Kamau", "0712345678", "Industrial Area", "Nairobi"),
//!     Payment::mpesa(Some("QCX12345".to_string())),
//! )?;
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod quote;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Category, Product};

    // Cart
    pub use crate::cart::{Cart, CartLine};
    #[cfg(feature = "storage")]
    pub use crate::cart::{CartSession, CART_STORAGE_KEY};

    // Checkout
    pub use crate::checkout::{
        CheckoutTotals, CustomerDetails, Order, OrderGateway, OrderReceipt, OrderStatus,
        OrderSubmission, Payment, PaymentMethod,
    };

    // Quote
    pub use crate::quote::{QuoteItem, QuoteRequest, QuoteStatus};

    // Search
    pub use crate::search::{Filter, SearchQuery, SortOption};
}
