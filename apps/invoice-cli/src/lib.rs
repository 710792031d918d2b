//! # invoice-cli
//!
//! Composition root: the only place where concrete stores are constructed.
//! `main.rs` only parses flags and calls [`run`]; everything else lives here
//! so it can be tested.
//!
//! ## Run Sequence
//! ```text
//! Cli ──► AppConfig (file → env → flags) ──► validate
//!                                              │
//!                                              ▼
//!                               build_invoice (permissive | strict)
//!                                              │
//!                         ┌────────────────────┼─────────────────────┐
//!                         ▼                    ▼                     ▼
//!                  ReceiptPrinter        probe_remote()      InvoicePersistence
//!                   → stdout           (fails, logged)       ::new(build_store())
//!                                                                   .save()
//! ```

pub mod cli;
pub mod config;
pub mod error;

use std::io::Write;

use invoice_core::probe::probe_remote;
use invoice_core::{Invoice, LineItem, ReceiptPrinter};
use invoice_store::{InvoicePersistence, InvoiceStore, LocalStore, MemoryStore, RemoteStore};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::{AppConfig, InvoiceSettings, StoreBackend, StoreSettings};
use crate::error::AppResult;

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so the receipt on stdout stays clean.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=invoice_store=trace` - Trace the store crate only
/// - Default: INFO, DEBUG for invoice_store
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,invoice_store=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the invoice described by the settings.
pub fn build_invoice(settings: &InvoiceSettings) -> AppResult<Invoice> {
    let items: Vec<LineItem> = settings.prices.iter().copied().map(LineItem::from).collect();

    let invoice = if settings.strict_validation {
        Invoice::try_new(items, settings.discount())?
    } else {
        Invoice::new(items, settings.discount())
    };

    info!(
        invoice_id = %invoice.id(),
        items = invoice.items().len(),
        discount = %invoice.discount(),
        total = %invoice.total(),
        "Invoice built"
    );
    Ok(invoice)
}

/// Constructs the configured store.
pub fn build_store(settings: &StoreSettings) -> Box<dyn InvoiceStore> {
    match settings.backend {
        StoreBackend::Local => Box::new(LocalStore::new(settings.local_container.clone())),
        StoreBackend::Remote => Box::new(RemoteStore::new(settings.remote_collection.clone())),
        StoreBackend::Memory => Box::new(MemoryStore::new()),
    }
}

/// Loads config, builds one invoice, writes its receipt to `out`, and saves
/// it once. Returns the invoice that was saved.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> AppResult<Invoice> {
    let mut config = AppConfig::load(cli.config.clone())?;
    config.apply_cli(cli);
    config.validate()?;

    let invoice = build_invoice(&config.invoice)?;

    write!(out, "{}", ReceiptPrinter::new(&invoice))?;
    out.flush()?;

    if let Err(e) = probe_remote() {
        warn!(error = %e, "Remote billing probe failed");
    }

    let persistence = InvoicePersistence::new(build_store(&config.store));
    persistence.save(&invoice)?;

    info!(
        invoice_id = %invoice.id(),
        backend = %config.store.backend,
        "Invoice saved"
    );
    Ok(invoice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use invoice_core::CoreError;
    use rust_decimal_macros::dec;

    /// Points the config loader at a file that does not exist so the
    /// developer's own invoice.toml never leaks into tests.
    fn isolated_cli(dir: &tempfile::TempDir) -> Cli {
        Cli {
            config: Some(dir.path().join("invoice.toml")),
            store: Some(StoreBackend::Memory),
            ..Cli::default()
        }
    }

    #[test]
    fn test_run_reference_invoice() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            discount: Some(dec!(20)),
            prices: vec![dec!(9.99), dec!(9.88), dec!(7.77)],
            ..isolated_cli(&dir)
        };
        let mut out = Vec::new();

        let invoice = run(&cli, &mut out).unwrap();
        let receipt = String::from_utf8(out).unwrap();

        assert_eq!(invoice.total().amount(), dec!(22.112));
        assert!(receipt.contains(&format!("Invoice id: {}", invoice.id())));
        assert!(receipt.contains("Total cost: $22.11"));
    }

    #[test]
    fn test_empty_invoice_totals_zero() {
        let settings = InvoiceSettings {
            prices: Vec::new(),
            discount_percentage: dec!(50),
            strict_validation: false,
        };

        let invoice = build_invoice(&settings).unwrap();
        assert!(invoice.items().is_empty());
        assert!(invoice.total().is_zero());
    }

    #[test]
    fn test_strict_run_rejects_out_of_range_discount() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            discount: Some(dec!(120)),
            strict: true,
            ..isolated_cli(&dir)
        };
        let mut out = Vec::new();

        let err = run(&cli, &mut out).unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_strict_build_reports_core_error() {
        let settings = InvoiceSettings {
            prices: vec![dec!(-1)],
            discount_percentage: dec!(0),
            strict_validation: true,
        };
        let err = build_invoice(&settings).unwrap_err();
        assert!(matches!(err, AppError::Core(CoreError::Validation(_))));
    }

    #[test]
    fn test_permissive_run_accepts_out_of_range_discount() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            discount: Some(dec!(120)),
            prices: vec![dec!(10)],
            ..isolated_cli(&dir)
        };
        let mut out = Vec::new();

        let invoice = run(&cli, &mut out).unwrap();
        assert_eq!(invoice.total().amount(), dec!(-2));
    }

    #[test]
    fn test_run_rejects_prices_that_overflow() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            discount: Some(dec!(0)),
            prices: vec![rust_decimal::Decimal::MAX, rust_decimal::Decimal::ONE],
            ..isolated_cli(&dir)
        };
        let mut out = Vec::new();

        let err = run(&cli, &mut out).unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_every_backend_saves_the_same_invoice() {
        let settings = InvoiceSettings::default();
        let invoice = build_invoice(&settings).unwrap();

        for backend in [StoreBackend::Local, StoreBackend::Remote, StoreBackend::Memory] {
            let store = build_store(&StoreSettings {
                backend,
                ..StoreSettings::default()
            });
            InvoicePersistence::new(store).save(&invoice).unwrap();
            assert_eq!(invoice.total().amount(), dec!(22.112));
        }
    }
}
