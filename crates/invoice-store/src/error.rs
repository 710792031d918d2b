//! # Store Error Types
//!
//! Error types for persistence strategies.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Strategy failure (serde_json::Error, poisoned lock, duplicate id)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds context and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InvoicePersistence::save returns it untouched                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (in invoice-cli) ← Reported to the operator                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Persistence strategy errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An invoice with this id was already saved.
    ///
    /// ## When This Occurs
    /// - The same invoice is handed to a recording store twice
    #[error("Invoice {id} already saved")]
    Duplicate { id: String },

    /// The invoice could not be encoded for the store.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// The store cannot accept writes right now.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Creates a Duplicate error for the given invoice id.
    pub fn duplicate(id: impl Into<String>) -> Self {
        StoreError::Duplicate { id: id.into() }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::duplicate("ABC").to_string(),
            "Invoice ABC already saved"
        );
        assert_eq!(
            StoreError::Unavailable("lock poisoned".into()).to_string(),
            "Store unavailable: lock poisoned"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: StoreError = json_err.into();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
