//! # Local Store
//!
//! Stand-in for an on-device object store. Nothing touches disk; a save is
//! an `info!` event naming the container the invoice would land in.

use invoice_core::Invoice;
use tracing::info;

use crate::error::StoreResult;
use crate::strategy::InvoiceStore;

/// Container used when none is configured.
pub const DEFAULT_CONTAINER: &str = "Invoices";

/// On-device store stand-in.
#[derive(Debug, Clone)]
pub struct LocalStore {
    container: String,
}

impl LocalStore {
    /// Creates a local store writing into the given container.
    pub fn new(container: impl Into<String>) -> Self {
        LocalStore {
            container: container.into(),
        }
    }

    /// Returns the container name.
    pub fn container(&self) -> &str {
        &self.container
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        LocalStore::new(DEFAULT_CONTAINER)
    }
}

impl InvoiceStore for LocalStore {
    fn save(&self, invoice: &Invoice) -> StoreResult<()> {
        info!(
            invoice_id = %invoice.id(),
            container = %self.container,
            items = invoice.items().len(),
            "Saved invoice to local store"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoice_core::{DiscountRate, LineItem};
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_container() {
        assert_eq!(LocalStore::default().container(), "Invoices");
        assert_eq!(LocalStore::new("Archive").container(), "Archive");
    }

    #[test]
    fn test_save_always_succeeds() {
        let store = LocalStore::default();
        let invoice = Invoice::new(vec![LineItem::from(dec!(1))], DiscountRate::zero());

        assert!(store.save(&invoice).is_ok());
        assert!(store.save(&invoice).is_ok());
    }
}
