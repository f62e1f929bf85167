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
//! │    89.99 + 24.99 = 114.97999999999999  ❌ WRONG!                        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    8999 + 2499 = 11498 cents = 114.98                                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quickshop_core::money::Money;
//!
//! let price = Money::from_cents(8999); // 89.99
//! let line = price * 2;                 // 179.98
//! let total = line + Money::from_cents(399);
//! assert_eq!(total.cents(), 18397);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents/paise).
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► CartItem.line_total ──► Cart.total ──► Purchase.total
///                                                              │
///                                      StoreStats.total_revenue ◄┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use quickshop_core::money::Money;
    ///
    /// let price = Money::from_cents(2499);
    /// assert_eq!(price.cents(), 2499);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// Multiplies money by a quantity.
    ///
    /// ```rust
    /// use quickshop_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(399);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 1197);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }

    /// Divides the amount evenly over `count` parts, rounding half away
    /// from zero to the nearest cent. A count of zero yields zero.
    ///
    /// ## Example
    /// ```rust
    /// use quickshop_core::money::Money;
    ///
    /// let revenue = Money::from_cents(30000);
    /// assert_eq!(revenue.average_over(3).cents(), 10000);
    /// assert_eq!(revenue.average_over(0), Money::zero());
    ///
    /// // 10.00 over 3 orders is 3.33 (3.333... rounds down)
    /// assert_eq!(Money::from_cents(1000).average_over(3).cents(), 333);
    /// // 0.05 over 2 orders is 0.03 (0.025 rounds half away from zero)
    /// assert_eq!(Money::from_cents(5).average_over(2).cents(), 3);
    /// ```
    pub fn average_over(&self, count: usize) -> Money {
        if count == 0 {
            return Money::zero();
        }

        // i128 keeps the doubled numerator from overflowing
        let numerator = self.0 as i128 * 2;
        let denominator = count as i128 * 2;
        let half = count as i128;
        let rounded = if numerator >= 0 {
            (numerator + half) / denominator
        } else {
            (numerator - half) / denominator
        };
        Money::from_cents(rounded as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal rendering ("89.99"); the currency symbol is a display
/// concern of the app config.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
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

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by a cart quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

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
