//! # invoice-core: Pure Business Logic for Invoicing
//!
//! This crate holds the invoice math as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Invoice Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    invoice-cli (composition root)               │   │
//! │  │    config ──► build invoice ──► print receipt ──► save          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ invoice-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  receipt  │  │ validation│  │   │
//! │  │   │  Invoice  │  │   Money   │  │  Printer  │  │   rules   │  │   │
//! │  │   │ LineItem  │  │ discounts │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 invoice-store (persistence port)                │   │
//! │  │           InvoiceStore trait + interchangeable strategies       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Invoice, LineItem, DiscountRate)
//! - [`money`] - Exact decimal Money type
//! - [`receipt`] - Text receipt rendering
//! - [`validation`] - Optional strict-mode rules
//! - [`probe`] - Remote service stand-in with a fixed failure
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use invoice_core::{DiscountRate, Invoice, LineItem};
//! use rust_decimal_macros::dec;
//!
//! let invoice = Invoice::new(
//!     vec![LineItem::from(dec!(9.99)), LineItem::from(dec!(9.88)), LineItem::from(dec!(7.77))],
//!     DiscountRate::from_percentage(dec!(20)),
//! );
//!
//! assert_eq!(invoice.total().amount(), dec!(22.112));
//! assert_eq!(invoice.total().to_string(), "$22.11");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod probe;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ServiceError, ValidationError};
pub use money::Money;
pub use receipt::ReceiptPrinter;
pub use types::*;
