//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Attempted to check out an empty cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// The order collaborator rejected or failed the submission.
    #[error("Order submission failed: {0}")]
    SubmissionFailed(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
