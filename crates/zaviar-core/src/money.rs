//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A ledger that drifts by a paisa per entry is a ledger nobody trusts.  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paisa                                            │
//! │    Every amount is an i64 count of the smallest unit (paisa).           │
//! │    Rs. 150.75 is stored as 15075. Sums are exact, always.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use zaviar_core::money::Money;
//!
//! // Create from paisa (preferred) or whole rupees
//! let rate = Money::from_paisa(15075); // Rs. 150.75
//! let round = Money::from_rupees(500); // Rs. 500.00
//!
//! // Arithmetic operations
//! let line = rate * 4;
//! let total = line + round;
//!
//! // NEVER from floats - no such constructor exists.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (paisa).
///
/// ## Design Decisions
/// - **i64 (signed)**: Worker balances go negative on advances - that is a
///   valid state, not an error
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support so record blobs round-trip exactly
///
/// ## Where Money Flows
/// ```text
/// unit_cost/unit_price ──► total_cost/total_amount ──► ledger balance
///                                                  └──► worker earned/paid
/// ```
/// Every monetary field in the record model is a `Money`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paisa (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use zaviar_core::money::Money;
    ///
    /// let rate = Money::from_paisa(15075); // Rs. 150.75
    /// assert_eq!(rate.paisa(), 15075);
    /// ```
    #[inline]
    pub const fn from_paisa(paisa: i64) -> Self {
        Money(paisa)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// Most amounts in the factory's books are round rupee figures, so this
    /// is the constructor form code reaches for first.
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Returns the value in paisa.
    #[inline]
    pub const fn paisa(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paisa portion (always 0-99).
    #[inline]
    pub const fn paisa_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies a unit rate by a quantity to produce a line total.
    ///
    /// This is THE function behind the `total = quantity × unit rate`
    /// invariant: record constructors call it, nothing else computes totals.
    ///
    /// ## Example
    /// ```rust
    /// use zaviar_core::money::Money;
    ///
    /// let unit_cost = Money::from_rupees(45); // Rs. 45 labor per piece
    /// let total = unit_cost.multiply_quantity(120);
    /// assert_eq!(total, Money::from_rupees(5400));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and debugging. The presentation layer owns real
/// formatting (separators, localization).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}Rs. {}.{:02}", sign, self.rupees().abs(), self.paisa_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
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

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

/// Multiplication by quantity (i64).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing an iterator of Money values.
///
/// The derivation engine folds record logs with `.sum()` everywhere, so
/// this impl keeps those call sites readable.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paisa() {
        let money = Money::from_paisa(15075);
        assert_eq!(money.paisa(), 15075);
        assert_eq!(money.rupees(), 150);
        assert_eq!(money.paisa_part(), 75);
    }

    #[test]
    fn test_from_rupees() {
        assert_eq!(Money::from_rupees(500).paisa(), 50000);
        assert_eq!(Money::from_rupees(-5).paisa(), -500);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_paisa(15075)), "Rs. 150.75");
        assert_eq!(format!("{}", Money::from_rupees(500)), "Rs. 500.00");
        assert_eq!(format!("{}", Money::from_paisa(-550)), "-Rs. 5.50");
        assert_eq!(format!("{}", Money::zero()), "Rs. 0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupees(10);
        let b = Money::from_rupees(5);

        assert_eq!((a + b).paisa(), 1500);
        assert_eq!((a - b).paisa(), 500);
        assert_eq!((a * 3).paisa(), 3000);
        assert_eq!((-a).paisa(), -1000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_cost = Money::from_rupees(45);
        assert_eq!(unit_cost.multiply_quantity(120), Money::from_rupees(5400));
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_rupees(10), Money::from_rupees(20), Money::from_paisa(50)]
            .into_iter()
            .sum();
        assert_eq!(total.paisa(), 3050);
    }

    #[test]
    fn test_negative_balance_is_representable() {
        // Worker advances can overdraw the earned balance
        let earned = Money::from_rupees(5000);
        let paid = Money::from_rupees(6000);
        let balance = earned - paid;
        assert!(balance.is_negative());
        assert_eq!(balance, Money::from_rupees(-1000));
    }
}
