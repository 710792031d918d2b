//! # Error Types
//!
//! Domain-specific error types for invoice-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  invoice-core errors (this file)                                       │
//! │  ├── CoreError        - Failures of invoice construction               │
//! │  ├── ValidationError  - Strict-mode input validation failures          │
//! │  └── ServiceError     - Closed set of remote-call failure kinds,       │
//! │                         logged by callers and never wrapped            │
//! │                                                                         │
//! │  invoice-store errors (separate crate)                                 │
//! │  └── StoreError       - Persistence strategy failures                  │
//! │                                                                         │
//! │  invoice-cli errors (in app)                                           │
//! │  └── AppError         - What the operator sees                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Range and sign errors are only produced when an invoice is built in
/// strict mode (see [`crate::types::Invoice::try_new`]). Permissive
/// construction never fails. `Overflow` comes from
/// [`crate::validation::validate_totals`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value must not be below zero.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: String, value: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        value: String,
    },

    /// Computed figure does not fit in a decimal.
    #[error("{field} overflows the supported decimal range")]
    Overflow { field: String },
}

// =============================================================================
// Service Error
// =============================================================================

/// Failure kinds of a remote call.
///
/// The set is closed: callers match on it exhaustively, log it, and move on.
/// Nothing retries on these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ServiceError {
    /// The request could not be built from the given input.
    #[error("bad input")]
    BadInput,

    /// The remote answered with something we could not read.
    #[error("bad response")]
    BadResponse,

    /// The remote answered with a non-success status.
    #[error("bad status")]
    BadStatus,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
