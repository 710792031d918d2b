//! Command-line flags. Anything given here beats the config file and the
//! environment.

use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;

use crate::config::StoreBackend;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "invoice-cli", version, about = "Build, print and save one invoice")]
pub struct Cli {
    /// Path to invoice.toml (defaults to the platform config directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where to save the invoice
    #[arg(short, long, value_enum)]
    pub store: Option<StoreBackend>,

    /// Discount in percent, e.g. 20 for 20% off
    #[arg(short, long, allow_negative_numbers = true)]
    pub discount: Option<Decimal>,

    /// Line item price; repeat for more items
    #[arg(short = 'p', long = "price", allow_negative_numbers = true)]
    pub prices: Vec<Decimal>,

    /// Reject negative prices and discounts outside 0-100
    #[arg(long)]
    pub strict: bool,
}
