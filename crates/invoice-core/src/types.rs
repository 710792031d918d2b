//! # Domain Types
//!
//! Core domain types for invoicing.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │     Invoice     │   │ InvoiceSnapshot │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  price          │◄──│  id (UUID)      │──►│  frozen totals  │       │
//! │  └─────────────────┘   │  items          │   │  for storage    │       │
//! │                        │  discount       │   └─────────────────┘       │
//! │  ┌─────────────────┐   │  issued_at      │                             │
//! │  │  DiscountRate   │──►│  total() ← read │                             │
//! │  │  20 = 20%       │   └─────────────────┘                             │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Derived, Never Stored
//! `Invoice` has no total field. `subtotal()`, `discount_amount()` and
//! `total()` walk the items every time they are called.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount expressed as a percentage (`20` = 20% off).
///
/// Any decimal is accepted. Values outside 0–100 are only rejected by
/// [`Invoice::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountRate(Decimal);

impl DiscountRate {
    /// Creates a discount rate from a percentage.
    #[inline]
    pub fn from_percentage(pct: Decimal) -> Self {
        DiscountRate(pct)
    }

    /// Returns the rate as a percentage.
    #[inline]
    pub fn percentage(&self) -> Decimal {
        self.0
    }

    /// Returns the rate as a fraction (`20%` → `0.2`).
    #[inline]
    pub fn fraction(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }

    /// No discount.
    #[inline]
    pub fn zero() -> Self {
        DiscountRate(Decimal::ZERO)
    }

    /// Checks if the discount is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A single priced entry on an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    price: Money,
}

impl LineItem {
    /// Creates a line item with the given price.
    #[inline]
    pub fn new(price: Money) -> Self {
        LineItem { price }
    }

    /// Returns the price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }
}

impl From<Decimal> for LineItem {
    fn from(price: Decimal) -> Self {
        LineItem::new(Money::new(price))
    }
}

// =============================================================================
// Invoice Id
// =============================================================================

/// Unique invoice identifier (UUID v4, upper-case hyphenated).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(String);

impl InvoiceId {
    /// Generates a fresh identifier.
    pub fn generate() -> Self {
        InvoiceId(Uuid::new_v4().hyphenated().to_string().to_uppercase())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// A billing record: line items, a discount, and a generated id.
///
/// ## Example
/// ```rust
/// use invoice_core::types::{DiscountRate, Invoice, LineItem};
/// use rust_decimal_macros::dec;
///
/// let items = vec![
///     LineItem::from(dec!(9.99)),
///     LineItem::from(dec!(9.88)),
///     LineItem::from(dec!(7.77)),
/// ];
/// let invoice = Invoice::new(items, DiscountRate::from_percentage(dec!(20)));
///
/// assert_eq!(invoice.subtotal().amount(), dec!(27.64));
/// assert_eq!(invoice.total().amount(), dec!(22.112));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    id: InvoiceId,
    items: Vec<LineItem>,
    discount: DiscountRate,
    issued_at: DateTime<Utc>,
}

impl Invoice {
    /// Builds an invoice without validating prices or the discount.
    ///
    /// A discount above 100% gives a negative total; a negative discount
    /// inflates it. Use [`Invoice::try_new`] to reject such input.
    pub fn new(items: Vec<LineItem>, discount: DiscountRate) -> Self {
        Invoice {
            id: InvoiceId::generate(),
            items,
            discount,
            issued_at: Utc::now(),
        }
    }

    /// Builds an invoice after checking that every price is non-negative and
    /// the discount lies within 0–100%.
    ///
    /// ## Example
    /// ```rust
    /// use invoice_core::types::{DiscountRate, Invoice, LineItem};
    /// use rust_decimal_macros::dec;
    ///
    /// let items = vec![LineItem::from(dec!(10))];
    /// assert!(Invoice::try_new(items.clone(), DiscountRate::from_percentage(dec!(100))).is_ok());
    /// assert!(Invoice::try_new(items, DiscountRate::from_percentage(dec!(101))).is_err());
    /// ```
    pub fn try_new(items: Vec<LineItem>, discount: DiscountRate) -> CoreResult<Self> {
        validation::validate_line_items(&items)?;
        validation::validate_discount(discount)?;
        Ok(Self::new(items, discount))
    }

    /// Returns the invoice id.
    pub fn id(&self) -> &InvoiceId {
        &self.id
    }

    /// Returns the line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the discount rate.
    pub fn discount(&self) -> DiscountRate {
        self.discount
    }

    /// Returns when the invoice was created.
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Sum of all item prices. Zero for an empty invoice.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::price).sum()
    }

    /// The part of the subtotal taken off by the discount.
    pub fn discount_amount(&self) -> Money {
        self.subtotal().percentage_of(self.discount)
    }

    /// `sum(prices) × (1 − discount / 100)`, recomputed on every call.
    pub fn total(&self) -> Money {
        self.subtotal().apply_percentage_discount(self.discount)
    }

    /// Freezes the current figures into a serialisable record.
    pub fn snapshot(&self) -> InvoiceSnapshot {
        InvoiceSnapshot {
            id: self.id.clone(),
            prices: self.items.iter().map(LineItem::price).collect(),
            discount_percentage: self.discount,
            subtotal: self.subtotal(),
            discount_amount: self.discount_amount(),
            total: self.total(),
            issued_at: self.issued_at,
        }
    }
}

// =============================================================================
// Invoice Snapshot
// =============================================================================

/// Point-in-time export of an invoice, handed to stores.
///
/// Uses the snapshot pattern: totals are frozen at the moment of export so
/// the stored record does not depend on later arithmetic changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSnapshot {
    pub id: InvoiceId,
    pub prices: Vec<Money>,
    pub discount_percentage: DiscountRate,
    pub subtotal: Money,
    pub discount_amount: Money,
    pub total: Money,
    pub issued_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================
