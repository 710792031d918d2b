//! # Memory Store
//!
//! Keeps a snapshot of every saved invoice in memory. Used by tests to see
//! what the port actually handed over, and by the `memory` backend for dry
//! runs.

use std::sync::{Mutex, MutexGuard};

use invoice_core::{Invoice, InvoiceSnapshot};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::strategy::InvoiceStore;

/// In-memory recording store.
///
/// Rejects a second save of the same invoice id with
/// [`StoreError::Duplicate`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<InvoiceSnapshot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns copies of the saved snapshots, in save order.
    pub fn records(&self) -> StoreResult<Vec<InvoiceSnapshot>> {
        Ok(self.lock()?.clone())
    }

    /// Number of invoices saved so far.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Vec<InvoiceSnapshot>>> {
        self.records
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }
}

impl InvoiceStore for MemoryStore {
    fn save(&self, invoice: &Invoice) -> StoreResult<()> {
        let mut records = self.lock()?;

        if records.iter().any(|r| &r.id == invoice.id()) {
            return Err(StoreError::duplicate(invoice.id().as_str()));
        }

        records.push(invoice.snapshot());
        debug!(invoice_id = %invoice.id(), stored = records.len(), "Recorded invoice in memory");
        Ok(())
    }
}
