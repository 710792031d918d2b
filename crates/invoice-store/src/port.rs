//! # Persistence Port
//!
//! [`InvoicePersistence`] is the one place the rest of the system goes to
//! save an invoice. It is built around a strategy handed in by the caller
//! and knows nothing about the strategy beyond the [`InvoiceStore`] trait.
//!
//! ## User Workflow
//! ```text
//! main()
//!   │  picks RemoteStore from config
//!   ▼
//! InvoicePersistence::new(store)      ← constructor injection
//!   │
//!   ▼
//! persistence.save(&invoice)          ← delegates, returns the store's result
//!   │
//!   ▼
//! store.save(&invoice)
//! ```

use invoice_core::Invoice;
use tracing::{debug, warn};

use crate::error::StoreResult;
use crate::strategy::InvoiceStore;

/// Saves invoices through an injected [`InvoiceStore`].
///
/// ## Example
/// ```rust
/// use invoice_core::{DiscountRate, Invoice, LineItem};
/// use invoice_store::{InvoicePersistence, MemoryStore};
/// use rust_decimal_macros::dec;
///
/// let invoice = Invoice::new(vec![LineItem::from(dec!(9.99))], DiscountRate::zero());
/// let persistence = InvoicePersistence::new(MemoryStore::new());
///
/// persistence.save(&invoice).unwrap();
/// assert_eq!(persistence.store().len().unwrap(), 1);
/// ```
#[derive(Debug)]
pub struct InvoicePersistence<S> {
    store: S,
}

impl<S: InvoiceStore> InvoicePersistence<S> {
    /// Creates a port backed by the given store.
    pub fn new(store: S) -> Self {
        InvoicePersistence { store }
    }

    /// Hands the invoice to the store and returns its result unchanged.
    pub fn save(&self, invoice: &Invoice) -> StoreResult<()> {
        debug!(invoice_id = %invoice.id(), total = %invoice.total(), "Saving invoice");

        self.store.save(invoice).inspect_err(|e| {
            warn!(invoice_id = %invoice.id(), error = %e, "Invoice save failed");
        })
    }

    /// Returns the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the port and returns the backing store.
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::strategy::{LocalStore, MemoryStore, RemoteStore};
    use invoice_core::{DiscountRate, LineItem};
    use rust_decimal_macros::dec;

    fn reference_invoice() -> Invoice {
        Invoice::new(
            vec![
                LineItem::from(dec!(9.99)),
                LineItem::from(dec!(9.88)),
                LineItem::from(dec!(7.77)),
            ],
            DiscountRate::from_percentage(dec!(20)),
        )
    }

    #[test]
    fn test_save_delegates_to_store() {
        let invoice = reference_invoice();
        let persistence = InvoicePersistence::new(MemoryStore::new());

        persistence.save(&invoice).unwrap();

        let records = persistence.into_store().records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0].id, invoice.id());
        assert_eq!(records[0].total, invoice.total());
    }

    #[test]
    fn test_store_errors_pass_through() {
        let invoice = reference_invoice();
        let persistence = InvoicePersistence::new(MemoryStore::new());

        persistence.save(&invoice).unwrap();
        let err = persistence.save(&invoice).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { .. }));
    }

    /// Swapping strategies changes where the invoice goes, never what it is.
    #[test]
    fn test_swapping_strategies_keeps_invoice_intact() {
        let invoice = reference_invoice();
        let id_before = invoice.id().clone();
        let total_before = invoice.total();

        let stores: Vec<Box<dyn InvoiceStore>> = vec![
            Box::new(LocalStore::default()),
            Box::new(RemoteStore::default()),
            Box::new(MemoryStore::new()),
        ];

        for store in stores {
            let persistence = InvoicePersistence::new(store);
            persistence.save(&invoice).unwrap();

            assert_eq!(invoice.id(), &id_before);
            assert_eq!(invoice.total(), total_before);
            assert_eq!(invoice.total().amount(), dec!(22.112));
        }
    }

    #[test]
    fn test_port_over_borrowed_store() {
        let store = MemoryStore::new();
        let invoice = reference_invoice();

        InvoicePersistence::new(&store).save(&invoice).unwrap();
        InvoicePersistence::new(&store)
            .save(&reference_invoice())
            .unwrap();

        assert_eq!(store.len().unwrap(), 2);
    }
}
