//! # invoice-cli entry point
//!
//! ```bash
//! # Reference invoice: 9.99 + 9.88 + 7.77, 20% off, local store
//! invoice-cli
//!
//! # Custom items, saved to the remote stand-in
//! invoice-cli --store remote --discount 15 -p 4.20 -p 3.80
//!
//! # Reject negative prices and discounts outside 0-100
//! invoice-cli --strict --discount 120
//! ```

use clap::Parser;
use invoice_cli::cli::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    invoice_cli::init_tracing();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    invoice_cli::run(&cli, &mut stdout.lock())?;

    Ok(())
}
