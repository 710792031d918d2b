//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --store remote --discount 15 -p 9.99                               │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     INVOICE_STORE=remote                                               │
//! │     INVOICE_DISCOUNT=15                                                │
//! │     INVOICE_PRICES=9.99,9.88,7.77                                      │
//! │     INVOICE_STRICT=true                                                │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/invoice-cli/invoice.toml (Linux)                         │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     prices 9.99 / 9.88 / 7.77, 20% off, local store                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [invoice]
//! prices = ["9.99", "9.88", "7.77"]
//! discount_percentage = "20"
//! strict_validation = false
//!
//! [store]
//! backend = "local"  # local | remote | memory
//! local_container = "Invoices"
//! remote_collection = "invoices"
//! ```

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;
use invoice_core::validation::{validate_discount, validate_price, validate_totals};
use invoice_core::{DiscountRate, Money};
use invoice_store::strategy::{local, remote};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cli::Cli;
use crate::error::{AppError, AppResult};

// =============================================================================
// Store Backend
// =============================================================================

/// Which [`invoice_store::InvoiceStore`] the CLI saves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// On-device store stand-in.
    #[default]
    Local,

    /// Remote document store stand-in.
    Remote,

    /// In-memory recorder (dry run).
    Memory,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Local => write!(f, "local"),
            StoreBackend::Remote => write!(f, "remote"),
            StoreBackend::Memory => write!(f, "memory"),
        }
    }
}

impl FromStr for StoreBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" | "device" => Ok(StoreBackend::Local),
            "remote" | "cloud" => Ok(StoreBackend::Remote),
            "memory" | "dry-run" => Ok(StoreBackend::Memory),
            other => Err(AppError::InvalidConfig(format!(
                "Unknown store backend: '{}'. Valid options: local, remote, memory",
                other
            ))),
        }
    }
}

// =============================================================================
// Invoice Settings
// =============================================================================

/// What goes on the invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSettings {
    /// Line item prices, in order.
    #[serde(default = "default_prices")]
    pub prices: Vec<Decimal>,

    /// Discount in percent.
    #[serde(default = "default_discount")]
    pub discount_percentage: Decimal,

    /// Reject negative prices and discounts outside 0-100.
    #[serde(default)]
    pub strict_validation: bool,
}

fn default_prices() -> Vec<Decimal> {
    vec![Decimal::new(999, 2), Decimal::new(988, 2), Decimal::new(777, 2)]
}

fn default_discount() -> Decimal {
    Decimal::from(20)
}

impl Default for InvoiceSettings {
    fn default() -> Self {
        InvoiceSettings {
            prices: default_prices(),
            discount_percentage: default_discount(),
            strict_validation: false,
        }
    }
}

impl InvoiceSettings {
    /// Returns the discount as a rate.
    pub fn discount(&self) -> DiscountRate {
        DiscountRate::from_percentage(self.discount_percentage)
    }
}

// =============================================================================
// Store Settings
// =============================================================================

/// Where the invoice goes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Container name for the local store.
    #[serde(default = "default_local_container")]
    pub local_container: String,

    /// Collection name for the remote store.
    #[serde(default = "default_remote_collection")]
    pub remote_collection: String,
}

fn default_local_container() -> String {
    local::DEFAULT_CONTAINER.to_string()
}

fn default_remote_collection() -> String {
    remote::DEFAULT_COLLECTION.to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            backend: StoreBackend::default(),
            local_container: default_local_container(),
            remote_collection: default_remote_collection(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub invoice: InvoiceSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (invoice.toml)
    /// 3. Environment variables
    ///
    /// Call [`AppConfig::apply_cli`] and then [`AppConfig::validate`] to
    /// finish the merge.
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading invoice config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides(|key| std::env::var(key).ok());

        Ok(config)
    }

    /// Applies `INVOICE_*` overrides read through `lookup`.
    ///
    /// Unparseable values are logged and skipped.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(backend) = lookup("INVOICE_STORE") {
            match backend.parse() {
                Ok(parsed) => {
                    debug!(backend = %backend, "Overriding store backend from environment");
                    self.store.backend = parsed;
                }
                Err(e) => warn!(error = %e, "Ignoring INVOICE_STORE"),
            }
        }

        if let Some(discount) = lookup("INVOICE_DISCOUNT") {
            match discount.trim().parse::<Decimal>() {
                Ok(d) => self.invoice.discount_percentage = d,
                Err(_) => warn!(value = %discount, "Ignoring unparseable INVOICE_DISCOUNT"),
            }
        }

        if let Some(prices) = lookup("INVOICE_PRICES") {
            let parsed: Result<Vec<Decimal>, _> = prices
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::parse)
                .collect();
            match parsed {
                Ok(p) => self.invoice.prices = p,
                Err(_) => warn!(value = %prices, "Ignoring unparseable INVOICE_PRICES"),
            }
        }

        if let Some(strict) = lookup("INVOICE_STRICT") {
            match strict.to_lowercase().as_str() {
                "1" | "true" | "yes" => self.invoice.strict_validation = true,
                "0" | "false" | "no" => self.invoice.strict_validation = false,
                _ => warn!(value = %strict, "Ignoring unparseable INVOICE_STRICT"),
            }
        }
    }

    /// Applies command-line flags on top of everything else.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(backend) = cli.store {
            self.store.backend = backend;
        }
        if let Some(discount) = cli.discount {
            self.invoice.discount_percentage = discount;
        }
        if !cli.prices.is_empty() {
            self.invoice.prices = cli.prices.clone();
        }
        if cli.strict {
            self.invoice.strict_validation = true;
        }
    }

    /// Validates the merged configuration.
    ///
    /// Prices and discount are only range-checked in strict mode; a
    /// permissive config may carry any numbers whose totals fit in a decimal.
    pub fn validate(&self) -> AppResult<()> {
        if self.store.local_container.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "store.local_container must not be empty".into(),
            ));
        }

        if self.store.remote_collection.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "store.remote_collection must not be empty".into(),
            ));
        }

        if self.invoice.strict_validation {
            for (index, price) in self.invoice.prices.iter().enumerate() {
                validate_price(&format!("invoice.prices[{index}]"), Money::new(*price))
                    .map_err(|e| AppError::InvalidConfig(e.to_string()))?;
            }
            validate_discount(self.invoice.discount())
                .map_err(|e| AppError::InvalidConfig(e.to_string()))?;
        }

        let prices: Vec<Money> = self.invoice.prices.iter().copied().map(Money::new).collect();
        validate_totals(&prices, self.invoice.discount())
            .map_err(|e| AppError::InvalidConfig(e.to_string()))?;

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "invoice", "invoice-cli")
            .map(|dirs| dirs.config_dir().join("invoice.toml"))
    }
}
