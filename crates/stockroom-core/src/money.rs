//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    Prices are parsed from the entry field straight into cents       │
//! │    ("9.99" → 999) and stay integers through storage and back.       │
//! │    Round-trip comparisons are exact equality, never tolerance.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Or parse what the user typed
//! let typed: Money = "10.99".parse().unwrap();
//! assert_eq!(price, typed);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Parsing can produce negatives; validation rejects them
///   before storage, but the type itself doesn't forbid them
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Error produced when a string cannot be read as a money amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid money amount: '{input}'")]
pub struct ParseMoneyError {
    /// The rejected input, for error messages.
    pub input: String,
}

impl ParseMoneyError {
    fn new(input: &str) -> Self {
        ParseMoneyError {
            input: input.to_string(),
        }
    }
}

/// Parses a decimal string into cents without ever touching floats.
///
/// ## Accepted Forms
/// - `"10"`    → 1000 cents
/// - `"10.9"`  → 1090 cents (single digit = tens of cents)
/// - `"10.99"` → 1099 cents
/// - `".99"`   → 99 cents
/// - `"-5.50"` → -550 cents (validation rejects negatives later)
///
/// ## Rejected Forms
/// More than two decimal places, thousands separators, currency symbols,
/// and anything non-numeric. Sub-cent amounts are rejected rather than
/// rounded; silent rounding of a typed price would be surprising.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseMoneyError::new(s));
        }

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(r) => (true, r),
            None => (false, trimmed),
        };

        let (major, minor) = match rest.split_once('.') {
            Some((m, n)) => (m, n),
            None => (rest, ""),
        };

        // "." alone or "-" alone would leave both halves empty
        if major.is_empty() && minor.is_empty() {
            return Err(ParseMoneyError::new(s));
        }

        let dollars: i64 = if major.is_empty() {
            0
        } else {
            major.parse().map_err(|_| ParseMoneyError::new(s))?
        };

        let cents: i64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<i64>().map_err(|_| ParseMoneyError::new(s))? * 10,
            2 => minor.parse().map_err(|_| ParseMoneyError::new(s))?,
            _ => return Err(ParseMoneyError::new(s)),
        };

        // i64::parse accepts a leading '-' in the minor part ("5.-5"); the
        // multiply above would then mis-combine, so reject it explicitly.
        if cents < 0 {
            return Err(ParseMoneyError::new(s));
        }

        let total = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .ok_or_else(|| ParseMoneyError::new(s))?;

        Ok(Money(if negative { -total } else { total }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// This is for logs and debugging. UI-facing formatting (localization,
/// currency symbol placement) belongs to the presentation layer.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
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
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_parse_whole_dollars() {
        assert_eq!("10".parse::<Money>().unwrap().cents(), 1000);
        assert_eq!("0".parse::<Money>().unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_decimals() {
        assert_eq!("9.99".parse::<Money>().unwrap().cents(), 999);
        assert_eq!("9.9".parse::<Money>().unwrap().cents(), 990);
        assert_eq!(".99".parse::<Money>().unwrap().cents(), 99);
        assert_eq!("10.00".parse::<Money>().unwrap().cents(), 1000);
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!("-5.50".parse::<Money>().unwrap().cents(), -550);
        assert_eq!("-0.50".parse::<Money>().unwrap().cents(), -50);
        assert!("-5.50".parse::<Money>().unwrap().is_negative());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(" 9.99 ".parse::<Money>().unwrap().cents(), 999);
    }

    #[test]
    fn test_parse_rejects_junk() {
        assert!("".parse::<Money>().is_err());
        assert!("   ".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("9.999".parse::<Money>().is_err()); // sub-cent
        assert!("9.x".parse::<Money>().is_err());
        assert!("$9.99".parse::<Money>().is_err());
        assert!("1,000".parse::<Money>().is_err());
        assert!(".".parse::<Money>().is_err());
        assert!("-".parse::<Money>().is_err());
        assert!("5.-5".parse::<Money>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    /// Round-trip: what the user typed is what storage sees, exactly.
    #[test]
    fn test_parse_display_round_trip() {
        for s in ["$0.99", "$10.00", "$123.45"] {
            let parsed: Money = s.trim_start_matches('$').parse().unwrap();
            assert_eq!(format!("{}", parsed), s);
        }
    }
}
