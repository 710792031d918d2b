//! # Remote Store
//!
//! Stand-in for a remote document store. It builds the JSON document it
//! would upload, logs where it would go, and stops there. No network.
//!
//! ## Payload
//! ```json
//! {
//!   "id": "6F1C2E0A-...",
//!   "prices": ["9.99", "9.88", "7.77"],
//!   "discount_percentage": "20",
//!   "subtotal": "27.64",
//!   "discount_amount": "5.528",
//!   "total": "22.112",
//!   "issued_at": "2026-10-18T09:30:00Z"
//! }
//! ```

use invoice_core::Invoice;
use tracing::{debug, info};

use crate::error::StoreResult;
use crate::strategy::InvoiceStore;

/// Collection used when none is configured.
pub const DEFAULT_COLLECTION: &str = "invoices";

/// Remote document store stand-in.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    collection: String,
}

impl RemoteStore {
    /// Creates a remote store targeting the given collection.
    pub fn new(collection: impl Into<String>) -> Self {
        RemoteStore {
            collection: collection.into(),
        }
    }

    /// Returns the collection name.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Builds the document that would be uploaded for this invoice.
    pub fn encode(&self, invoice: &Invoice) -> StoreResult<String> {
        Ok(serde_json::to_string(&invoice.snapshot())?)
    }
}

impl Default for RemoteStore {
    fn default() -> Self {
        RemoteStore::new(DEFAULT_COLLECTION)
    }
}

impl InvoiceStore for RemoteStore {
    fn save(&self, invoice: &Invoice) -> StoreResult<()> {
        let payload = self.encode(invoice)?;
        debug!(bytes = payload.len(), "Encoded invoice document");

        info!(
            invoice_id = %invoice.id(),
            collection = %self.collection,
            "Saved invoice to remote store"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoice_core::{DiscountRate, InvoiceSnapshot, LineItem};
    use rust_decimal::Decimal;
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

    fn decimal_field(doc: &serde_json::Value, key: &str) -> Decimal {
        doc[key].as_str().unwrap().parse().unwrap()
    }

    #[test]
    fn test_encode_payload_fields() {
        let invoice = reference_invoice();
        let payload = RemoteStore::default().encode(&invoice).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&payload).unwrap();

        assert_eq!(doc["id"], invoice.id().as_str());
        assert_eq!(doc["prices"].as_array().map(Vec::len), Some(3));
        assert_eq!(decimal_field(&doc, "subtotal"), dec!(27.64));
        assert_eq!(decimal_field(&doc, "total"), dec!(22.112));
    }

    #[test]
    fn test_encode_reads_back_as_snapshot() {
        let invoice = reference_invoice();
        let payload = RemoteStore::default().encode(&invoice).unwrap();
        let snap: InvoiceSnapshot = serde_json::from_str(&payload).unwrap();
        assert_eq!(snap, invoice.snapshot());
    }

    #[test]
    fn test_save_succeeds() {
        let store = RemoteStore::new("archive");
        assert_eq!(store.collection(), "archive");
        assert!(store.save(&reference_invoice()).is_ok());
    }
}
