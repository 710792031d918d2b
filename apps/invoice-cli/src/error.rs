//! # App Error Type
//!
//! Unified error type for the CLI.
//!
//! ## Error Flow
//! ```text
//! config file / env ── std::io / toml ──┐
//! strict validation ── CoreError ───────┼──► AppError ──► main() exits non-zero
//! store.save() ─────── StoreError ──────┘
//! ```
//!
//! `ServiceError` never reaches this type: the remote probe's failure is
//! logged where it happens.

use invoice_core::CoreError;
use invoice_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Reading the config file or writing the receipt failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for [`crate::config::AppConfig`].
    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The merged configuration breaks a rule.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type AppResult<T> = Result<T, AppError>;
