//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Cash typed at the till arrives as a float:                             │
//! │    5.00 - 4.30 = 0.7000000000000002  ❌                                 │
//! │    0.70 / 0.10 = 6.999999999999999   → 6 ten-cent coins, not 7!        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    round(0.7000000000000002 × 100) = 70 cents                          │
//! │    70 / 50 = 1 rem 20, 20 / 20 = 1 rem 0   ✅                           │
//! │                                                                         │
//! │  The float is rounded ONCE at the boundary, everything after is exact. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use resto_core::money::Money;
//!
//! let due = Money::from_major(5.00 - 4.30);
//! assert_eq!(due.cents(), 70);
//!
//! let coins = Money::from_cents(20) * 3;
//! assert_eq!(coins.cents(), 60);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, SubAssign};
use ts_rs::TS;

use crate::format;
use crate::MINOR_UNITS_PER_MAJOR;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in euro cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: the formatter must cope with negative values
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: serde support, serialized as a plain integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use resto_core::money::Money;
    ///
    /// let price = Money::from_cents(1250); // €12.50
    /// assert_eq!(price.cents(), 1250);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a major-unit float (euros) to cents, rounding to the
    /// nearest cent (half away from zero).
    ///
    /// This is the only float-to-money conversion in the crate. Rounding,
    /// not truncation, absorbs binary representation error:
    ///
    /// ```rust
    /// use resto_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(0.1 + 0.2).cents(), 30);
    /// assert_eq!(Money::from_major(10.00 - 9.99).cents(), 1);
    /// assert_eq!(Money::from_major(-5.5).cents(), -550);
    /// ```
    ///
    /// ## Precision
    /// Beyond 2^53 cents the float itself cannot hold every cent, and
    /// values past the `i64` range saturate.
    pub fn from_major(amount: f64) -> Self {
        Money((amount * MINOR_UNITS_PER_MAJOR as f64).round() as i64)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-euro portion (truncated toward zero).
    ///
    /// ```rust
    /// use resto_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).euros(), 10);
    /// assert_eq!(Money::from_cents(-550).euros(), -5);
    /// ```
    #[inline]
    pub const fn euros(&self) -> i64 {
        self.0 / MINOR_UNITS_PER_MAJOR
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % MINOR_UNITS_PER_MAJOR).abs()
    }

    /// Returns the value in euros as a float (for display and DTOs only).
    #[inline]
    pub fn to_major(&self) -> f64 {
        self.0 as f64 / MINOR_UNITS_PER_MAJOR as f64
    }

    /// Returns zero money value.
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
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display uses Italian conventions: `1.234,50 €`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.euros().unsigned_abs().to_string();
        let fraction = format!("{:02}", self.cents_part());
        f.write_str(&format::compose(self.is_negative(), &whole, &fraction))
    }
}

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

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a piece count.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: i64) -> Self {
        Money(self.0 * count)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.euros(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_rounds_float_noise() {
        assert_eq!(Money::from_major(5.00 - 4.30).cents(), 70);
        assert_eq!(Money::from_major(20.00 - 17.00).cents(), 300);
        assert_eq!(Money::from_major(50.0 - 12.5).cents(), 3750);
        assert_eq!(Money::from_major(0.0).cents(), 0);
    }

    #[test]
    fn test_from_major_tiny_negative_is_zero() {
        let money = Money::from_major(-0.001);
        assert!(money.is_zero());
        assert!(!money.is_negative());
    }

    #[test]
    fn test_to_major() {
        assert_eq!(Money::from_cents(50).to_major(), 0.5);
        assert_eq!(Money::from_cents(5000).to_major(), 50.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "10,99\u{a0}€");
        assert_eq!(Money::from_cents(-550).to_string(), "-5,50\u{a0}€");
        assert_eq!(Money::from_cents(0).to_string(), "0,00\u{a0}€");
        assert_eq!(Money::from_cents(-5).to_string(), "-0,05\u{a0}€");
        assert_eq!(
            Money::from_cents(123_456_789).to_string(),
            "1.234.567,89\u{a0}€"
        );
    }

    #[test]
    fn test_arithmetic() {
        let mut remaining = Money::from_cents(370);
        remaining -= Money::from_cents(200) * 1;
        assert_eq!(remaining.cents(), 170);

        let total: Money = [Money::from_cents(100), Money::from_cents(50)]
            .into_iter()
            .sum();
        assert_eq!(total.cents(), 150);
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(1).is_positive());
        assert!(Money::from_cents(-1).is_negative());
        assert_eq!(Money::default(), Money::zero());
    }
}
