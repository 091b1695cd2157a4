//! Monetary values in integer cents
//!
//! Every authoritative amount (catalog prices, line totals, order totals)
//! is a `Money`. Client-claimed amounts stay `f64` until they are compared
//! against a `Money` with [`Money::within_tolerance`].

use serde::{Serialize, Serializer};
use std::fmt;

/// Largest accepted difference, in cents, between a claimed and an
/// authoritative amount.
pub const TOLERANCE_CENTS: i64 = 1;

/// Absorbs binary floating-point noise when a claimed amount sits exactly
/// on the tolerance boundary (e.g. `25.99 * 100.0` is not exactly `2599.0`).
const FLOAT_SLACK_CENTS: f64 = 1e-6;

/// A monetary value in the smallest currency unit (cents).
///
/// Serializes as a JSON number in major units so `Money::from_cents(1299)`
/// goes over the wire as `12.99`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Value in major units, for the wire format and for comparisons with
    /// client-supplied floats.
    pub fn as_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Multiplies by a quantity, returning `None` on overflow.
    pub fn checked_mul(self, quantity: i64) -> Option<Self> {
        self.0.checked_mul(quantity).map(Money)
    }

    pub fn checked_add(self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Returns `true` when `claimed` (major units) is within
    /// [`TOLERANCE_CENTS`] of this value.
    ///
    /// ```
    /// use sandwich_asere::money::Money;
    ///
    /// let total = Money::from_cents(2598);
    /// assert!(total.within_tolerance(25.98));
    /// assert!(total.within_tolerance(25.985));
    /// assert!(!total.within_tolerance(26.00));
    /// ```
    pub fn within_tolerance(&self, claimed: f64) -> bool {
        if !claimed.is_finite() {
            return false;
        }
        let diff = (claimed * 100.0 - self.0 as f64).abs();
        diff <= TOLERANCE_CENTS as f64 + FLOAT_SLACK_CENTS
    }
}

impl fmt::Display for Money {
    /// Formats as major units with two decimals: `12.99`, `-5.50`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_major())
    }
}
