//! # Storage Strategies
//!
//! The [`InvoiceStore`] capability and its interchangeable implementations.
//!
//! ## Strategy Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Capability, Many Strategies                      │
//! │                                                                         │
//! │  InvoicePersistence ──► dyn InvoiceStore                               │
//! │                              │                                          │
//! │              ┌───────────────┼────────────────┐                        │
//! │              ▼               ▼                ▼                        │
//! │         LocalStore      RemoteStore      MemoryStore                   │
//! │        (on-device)    (document store)   (recorder)                    │
//! │                                                                         │
//! │  Adding a backend = adding a type. The port never changes.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Strategies
//!
//! - [`LocalStore`] - On-device store stand-in
//! - [`RemoteStore`] - Remote document store stand-in, builds a JSON payload
//! - [`MemoryStore`] - Keeps snapshots in memory for inspection

pub mod local;
pub mod memory;
pub mod remote;

use std::sync::Arc;

use invoice_core::Invoice;

use crate::error::StoreResult;

pub use local::LocalStore;
pub use memory::MemoryStore;
pub use remote::RemoteStore;

/// Capability to persist one invoice somewhere.
///
/// Implementations decide where "somewhere" is. They must not change the
/// invoice; the port hands out a shared reference only.
pub trait InvoiceStore: Send + Sync {
    /// Saves the invoice.
    fn save(&self, invoice: &Invoice) -> StoreResult<()>;
}

impl<S: InvoiceStore + ?Sized> InvoiceStore for &S {
    fn save(&self, invoice: &Invoice) -> StoreResult<()> {
        (**self).save(invoice)
    }
}

impl<S: InvoiceStore + ?Sized> InvoiceStore for Box<S> {
    fn save(&self, invoice: &Invoice) -> StoreResult<()> {
        (**self).save(invoice)
    }
}

impl<S: InvoiceStore + ?Sized> InvoiceStore for Arc<S> {
    fn save(&self, invoice: &Invoice) -> StoreResult<()> {
        (**self).save(invoice)
    }
}
