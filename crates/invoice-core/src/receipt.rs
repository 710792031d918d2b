//! # Receipt Rendering
//!
//! Turns an [`Invoice`] into plain text. Rendering is the printer's only job;
//! where the text goes (stdout, a file, a thermal printer) is the caller's.
//!
//! ## Layout
//! ```text
//! Invoice id: 6F1C2E0A-...
//! Issued: 2026-10-18 09:30 UTC
//! --------------------------------
//!   1. $9.99
//!   2. $9.88
//!   3. $7.77
//! --------------------------------
//! Subtotal: $27.64
//! Discount (20%): -$5.53
//! Total cost: $22.11
//! ```

use std::fmt;

use crate::money::Money;
use crate::types::Invoice;

const RULE: &str = "--------------------------------";

/// Renders a single invoice as a text receipt.
///
/// ## Example
/// ```rust
/// use invoice_core::receipt::ReceiptPrinter;
/// use invoice_core::types::{DiscountRate, Invoice, LineItem};
/// use rust_decimal_macros::dec;
///
/// let invoice = Invoice::new(
///     vec![LineItem::from(dec!(9.99)), LineItem::from(dec!(9.88)), LineItem::from(dec!(7.77))],
///     DiscountRate::from_percentage(dec!(20)),
/// );
/// let text = ReceiptPrinter::new(&invoice).render();
/// assert!(text.contains("Total cost: $22.11"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ReceiptPrinter<'a> {
    invoice: &'a Invoice,
}

impl<'a> ReceiptPrinter<'a> {
    pub fn new(invoice: &'a Invoice) -> Self {
        ReceiptPrinter { invoice }
    }

    /// Renders the receipt to a string.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ReceiptPrinter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let invoice = self.invoice;

        writeln!(f, "Invoice id: {}", invoice.id())?;
        writeln!(
            f,
            "Issued: {}",
            invoice.issued_at().format("%Y-%m-%d %H:%M UTC")
        )?;
        writeln!(f, "{RULE}")?;
        for (index, item) in invoice.items().iter().enumerate() {
            writeln!(f, "{:>3}. {}", index + 1, item.price())?;
        }
        writeln!(f, "{RULE}")?;
        writeln!(f, "Subtotal: {}", invoice.subtotal())?;
        if !invoice.discount().is_zero() {
            // Signed change to the subtotal.
            writeln!(
                f,
                "Discount ({}): {}",
                invoice.discount(),
                Money::zero() - invoice.discount_amount()
            )?;
        }
        writeln!(f, "Total cost: {}", invoice.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DiscountRate, LineItem};
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
    fn test_receipt_lists_id_and_total() {
        let invoice = reference_invoice();
        let text = ReceiptPrinter::new(&invoice).render();

        assert!(text.starts_with(&format!("Invoice id: {}\n", invoice.id())));
        assert!(text.ends_with("Total cost: $22.11\n"));
    }

    #[test]
    fn test_receipt_lists_items_in_order() {
        let invoice = reference_invoice();
        let text = ReceiptPrinter::new(&invoice).render();

        let first = text.find("  1. $9.99").unwrap();
        let second = text.find("  2. $9.88").unwrap();
        let third = text.find("  3. $7.77").unwrap();
        assert!(first < second && second < third);

        assert!(text.contains("Subtotal: $27.64\n"));
        assert!(text.contains("Discount (20%): -$5.53\n"));
    }

    #[test]
    fn test_receipt_without_discount_skips_discount_line() {
        let invoice = Invoice::new(vec![LineItem::from(dec!(5))], DiscountRate::zero());
        let text = ReceiptPrinter::new(&invoice).render();

        assert!(!text.contains("Discount"));
        assert!(text.contains("Total cost: $5.00"));
    }

    #[test]
    fn test_receipt_with_negative_discount_shows_surcharge() {
        let invoice = Invoice::new(
            vec![LineItem::from(dec!(10))],
            DiscountRate::from_percentage(dec!(-10)),
        );
        let text = ReceiptPrinter::new(&invoice).render();

        assert!(text.contains("Discount (-10%): $1.00\n"));
        assert!(!text.contains("--$"));
        assert!(text.contains("Total cost: $11.00"));
    }

    #[test]
    fn test_empty_receipt() {
        let invoice = Invoice::new(Vec::new(), DiscountRate::from_percentage(dec!(50)));
        let text = ReceiptPrinter::new(&invoice).render();
        assert!(text.contains("Total cost: $0.00"));
    }
}
