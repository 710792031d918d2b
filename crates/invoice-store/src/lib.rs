//! # invoice-store: Persistence Port for Invoices
//!
//! Separates "what to save" (an [`invoice_core::Invoice`]) from "how to save
//! it" (an [`InvoiceStore`] strategy).
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Invoice Save Flow                                │
//! │                                                                         │
//! │  invoice-cli (picks a strategy from config)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  invoice-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────────┐        ┌──────────────────────────────┐ │   │
//! │  │   │      port        │        │          strategy            │ │   │
//! │  │   │                  │ save() │                              │ │   │
//! │  │   │ InvoicePersist-  │───────►│ LocalStore / RemoteStore /   │ │   │
//! │  │   │ ence<S>          │        │ MemoryStore                  │ │   │
//! │  │   └──────────────────┘        └──────────────────────────────┘ │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`port`] - The persistence port
//! - [`strategy`] - The store trait and its implementations
//! - [`error`] - Store error types

pub mod error;
pub mod port;
pub mod strategy;

pub use error::{StoreError, StoreResult};
pub use port::InvoicePersistence;
pub use strategy::{InvoiceStore, LocalStore, MemoryStore, RemoteStore};
