//! Best-effort key-value persistence layer for SafeGear.
//!
//! Provides a simple, ergonomic API for persisting JSON-serializable values
//! under string keys. Callers pick a backend: [`MemoryStore`] for ephemeral
//! state and tests, [`FileStore`] for state that survives process restarts.
//!
//! # Example
//!
//! ```rust,ignore
//! use safegear_store::{FileStore, ObjectStore};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Cart {
//!     items: Vec<CartLine>,
//! }
//!
//! let store = FileStore::open("/var/lib/safegear")?;
//!
//! // Store a value
//! store.set("safegear:cart", &cart)?;
//!
//! // Retrieve a value
//! let cart: Option<Cart> = store.get("safegear:cart")?;
//!
//! // Delete a value
//! store.delete("safegear:cart")?;
//! ```

mod error;
mod kv;

pub use error::StoreError;
pub use kv::{FileStore, MemoryStore, ObjectStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileStore, MemoryStore, ObjectStore, StoreError};
}

/// Helper to build store keys with namespacing.
///
/// # Example
///
/// ```rust,ignore
/// let key = store_key!("cart", session_id);
/// // Returns "cart:sess123"
/// ```
#[macro_export]
macro_rules! store_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}
