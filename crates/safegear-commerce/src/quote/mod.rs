//! Quote request module.
//!
//! Bulk buyers request quotes instead of checking out; the back office
//! works each request through review to acceptance or rejection.

mod request;

pub use request::{QuoteItem, QuoteRequest, QuoteStatus};
