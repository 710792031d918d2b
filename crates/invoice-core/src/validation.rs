//! # Validation Module
//!
//! Strict-mode checks for invoice input.
//!
//! Invoices are permissive by default: [`Invoice::new`](crate::types::Invoice::new)
//! accepts any price and any discount. These validators back
//! [`Invoice::try_new`](crate::types::Invoice::try_new) for callers that want
//! bad input rejected up front.
//!
//! [`validate_totals`] is the exception: it applies in every mode, because the
//! invoice figures are computed with panicking decimal arithmetic and must fit
//! in a `Decimal`.
//!
//! ## Usage
//! ```rust
//! use invoice_core::money::Money;
//! use invoice_core::types::DiscountRate;
//! use invoice_core::validation::{validate_discount, validate_price};
//! use rust_decimal_macros::dec;
//!
//! assert!(validate_price("price", Money::new(dec!(9.99))).is_ok());
//! assert!(validate_price("price", Money::new(dec!(-1))).is_err());
//! assert!(validate_discount(DiscountRate::from_percentage(dec!(120))).is_err());
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{DiscountRate, LineItem};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Lowest accepted discount, in percent.
pub const MIN_DISCOUNT_PERCENTAGE: i64 = 0;

/// Highest accepted discount, in percent.
pub const MAX_DISCOUNT_PERCENTAGE: i64 = 100;

/// Validates that a price is not negative. Zero is allowed.
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: field.to_string(),
            value: price.amount().to_string(),
        });
    }
    Ok(())
}

/// Validates every line item price, reporting the first offender by index.
pub fn validate_line_items(items: &[LineItem]) -> ValidationResult<()> {
    for (index, item) in items.iter().enumerate() {
        validate_price(&format!("items[{index}].price"), item.price())?;
    }
    Ok(())
}

/// Validates that a discount lies within 0–100% inclusive.
pub fn validate_discount(discount: DiscountRate) -> ValidationResult<()> {
    let pct = discount.percentage();
    let min = Decimal::from(MIN_DISCOUNT_PERCENTAGE);
    let max = Decimal::from(MAX_DISCOUNT_PERCENTAGE);

    if pct < min || pct > max {
        return Err(ValidationError::OutOfRange {
            field: "discount_percentage".to_string(),
            min: MIN_DISCOUNT_PERCENTAGE,
            max: MAX_DISCOUNT_PERCENTAGE,
            value: pct.to_string(),
        });
    }
    Ok(())
}

/// Validates that the subtotal, discount amount and total of these prices
/// are representable.
///
/// Mirrors the arithmetic of [`Invoice::subtotal`](crate::types::Invoice::subtotal),
/// [`Invoice::discount_amount`](crate::types::Invoice::discount_amount) and
/// [`Invoice::total`](crate::types::Invoice::total) with checked operations.
pub fn validate_totals(prices: &[Money], discount: DiscountRate) -> ValidationResult<()> {
    let overflow = |field: &str| ValidationError::Overflow {
        field: field.to_string(),
    };

    let subtotal = prices
        .iter()
        .try_fold(Decimal::ZERO, |acc, price| acc.checked_add(price.amount()))
        .ok_or_else(|| overflow("subtotal"))?;

    let fraction = discount.fraction();
    subtotal
        .checked_mul(fraction)
        .ok_or_else(|| overflow("discount_amount"))?;
    Decimal::ONE
        .checked_sub(fraction)
        .and_then(|keep| subtotal.checked_mul(keep))
        .ok_or_else(|| overflow("total"))?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
