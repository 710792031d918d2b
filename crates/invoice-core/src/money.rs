//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With f64:                                                              │
//! │    9.99 + 9.88 + 7.77 = 27.639999999999997  ❌ WRONG!                   │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 Decimal                                          │
//! │    9.99 + 9.88 + 7.77 = 27.64                                           │
//! │    27.64 × 0.8        = 22.112 (kept exact, rounded only for display)  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use invoice_core::money::Money;
//! use rust_decimal_macros::dec;
//!
//! let price = Money::new(dec!(9.99));
//! let total = price + Money::from_cents(988);
//! assert_eq!(total.amount(), dec!(19.87));
//! assert_eq!(total.to_string(), "$19.87");
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in major currency units (dollars), held as an exact decimal.
///
/// ## Design Decisions
/// - **Decimal, not f64**: sums of prices stay exact
/// - **Signed**: a discount above 100% yields a negative total, and we keep it
/// - **Unrounded**: arithmetic never rounds; only `Display` and
///   [`Money::round_to_cents`] do
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from a decimal amount in major units.
    #[inline]
    pub fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use invoice_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.amount(), dec!(10.99));
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Returns the exact amount in major units.
    #[inline]
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Rounds to whole cents using Bankers Rounding (round half to even).
    ///
    /// ## Example
    /// ```rust
    /// use invoice_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(Money::new(dec!(22.112)).round_to_cents().amount(), dec!(22.11));
    /// assert_eq!(Money::new(dec!(0.125)).round_to_cents().amount(), dec!(0.12));
    /// assert_eq!(Money::new(dec!(0.135)).round_to_cents().amount(), dec!(0.14));
    /// ```
    pub fn round_to_cents(&self) -> Money {
        let mut rounded = self.0.round_dp(2);
        rounded.rescale(2);
        Money(rounded)
    }

    /// Returns the portion of this amount covered by a percentage rate.
    ///
    /// ## Example
    /// ```rust
    /// use invoice_core::money::Money;
    /// use invoice_core::types::DiscountRate;
    /// use rust_decimal_macros::dec;
    ///
    /// let subtotal = Money::new(dec!(27.64));
    /// let off = subtotal.percentage_of(DiscountRate::from_percentage(dec!(20)));
    /// assert_eq!(off.amount(), dec!(5.528));
    /// ```
    pub fn percentage_of(&self, rate: DiscountRate) -> Money {
        Money(self.0 * rate.fraction())
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// Computed as `amount × (1 − percentage / 100)`. No rounding happens
    /// and the rate is not range-checked.
    ///
    /// ## Example
    /// ```rust
    /// use invoice_core::money::Money;
    /// use invoice_core::types::DiscountRate;
    /// use rust_decimal_macros::dec;
    ///
    /// let subtotal = Money::new(dec!(100.00));
    /// let discounted = subtotal.apply_percentage_discount(DiscountRate::from_percentage(dec!(10)));
    /// assert_eq!(discounted.amount(), dec!(90));
    /// ```
    pub fn apply_percentage_discount(&self, rate: DiscountRate) -> Money {
        Money(self.0 * (Decimal::ONE - rate.fraction()))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money rounded to cents, e.g. `$22.11` or `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.round_to_cents().0;
        let sign = if rounded < Decimal::ZERO { "-" } else { "" };
        write!(f, "{}${}", sign, rounded.abs())
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a decimal factor.
impl Mul<Decimal> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, factor: Decimal) -> Self {
        Money(self.0 * factor)
    }
}

/// Summing an empty iterator yields zero.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.amount(), dec!(10.99));
        assert_eq!(Money::from_cents(-550).amount(), dec!(-5.50));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
        assert_eq!(Money::new(dec!(22.112)).to_string(), "$22.11");
        assert_eq!(Money::new(dec!(-0.001)).to_string(), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(dec!(10.00));
        let b = Money::new(dec!(5.00));

        assert_eq!((a + b).amount(), dec!(15));
        assert_eq!((a - b).amount(), dec!(5));
        assert_eq!((a * dec!(3)).amount(), dec!(30));

        let mut c = a;
        c += b;
        c -= Money::from_cents(1);
        assert_eq!(c.amount(), dec!(14.99));
    }

    /// The reason we are not using f64
    #[test]
    fn test_sum_is_exact() {
        let prices = [
            Money::new(dec!(9.99)),
            Money::new(dec!(9.88)),
            Money::new(dec!(7.77)),
        ];
        let total: Money = prices.iter().sum();
        assert_eq!(total.amount(), dec!(27.64));
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total: Money = Vec::<Money>::new().into_iter().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn test_percentage_discount() {
        let subtotal = Money::new(dec!(27.64));
        let twenty = DiscountRate::from_percentage(dec!(20));

        assert_eq!(subtotal.apply_percentage_discount(twenty).amount(), dec!(22.112));
        assert_eq!(subtotal.percentage_of(twenty).amount(), dec!(5.528));
    }

    #[test]
    fn test_discount_outside_range_is_not_clamped() {
        let subtotal = Money::new(dec!(10));

        let over = subtotal.apply_percentage_discount(DiscountRate::from_percentage(dec!(150)));
        assert_eq!(over.amount(), dec!(-5));
        assert!(over.is_negative());

        let under = subtotal.apply_percentage_discount(DiscountRate::from_percentage(dec!(-10)));
        assert_eq!(under.amount(), dec!(11));
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs(), Money::from_cents(100));
    }

    #[test]
    fn test_serializes_as_bare_decimal() {
        let json = serde_json::to_string(&Money::new(dec!(9.99))).unwrap();
        assert_eq!(json, "\"9.99\"");

        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Money::new(dec!(9.99)));
    }
}
