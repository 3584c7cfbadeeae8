//! # Money Type
//!
//! Integer-cents money with a decimal-string wire format.
//!
//! ## Design Decisions
//! - **i64 cents internally**: No floating-point anywhere in storage or math
//! - **Decimal string on the wire**: Prices serialize as `"12.50"`, matching
//!   what the storefront client expects from a decimal field
//! - **Lenient input**: Deserialization accepts `"12.50"`, `12.5`, or `12`
//!
//! ## Where Money Flows
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  JSON "12.50" ──► Money(1250) ──► price_cents INTEGER column        │
//! │                                                                     │
//! │  price_cents 1250 ──► Money(1250) ──► JSON "12.50"                  │
//! │                                                                     │
//! │  EVERY monetary value in the system flows through this type         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Example
/// ```rust
/// use lumberyard_core::money::Money;
///
/// let price: Money = "12.50".parse().unwrap();
/// assert_eq!(price.cents(), 1250);
/// assert_eq!(price.to_string(), "12.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Why Cents?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// The database and all code use cents; only the wire format shows
    /// a decimal string.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -$5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
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

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Parsing & Formatting
// =============================================================================

/// Error parsing a decimal money string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    /// Input was empty or contained non-numeric characters.
    #[error("invalid money value: {0:?}")]
    Invalid(String),

    /// More than two fractional digits were supplied.
    #[error("money value {0:?} has more than two decimal places")]
    TooPrecise(String),
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    /// Parses a decimal string such as `"12.50"`, `"-3.1"` or `"40"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseMoneyError::Invalid(s.to_string()));
        }

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (major_str, minor_str) = match digits.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (digits, ""),
        };

        if minor_str.len() > 2 {
            return Err(ParseMoneyError::TooPrecise(s.to_string()));
        }
        if major_str.is_empty() && minor_str.is_empty() {
            return Err(ParseMoneyError::Invalid(s.to_string()));
        }

        let major: i64 = if major_str.is_empty() {
            0
        } else {
            major_str
                .parse()
                .map_err(|_| ParseMoneyError::Invalid(s.to_string()))?
        };

        // "5.5" means 50 cents, not 5: pad the fraction to two digits
        let minor: i64 = if minor_str.is_empty() {
            0
        } else {
            let padded = format!("{:0<2}", minor_str);
            padded
                .parse()
                .map_err(|_| ParseMoneyError::Invalid(s.to_string()))?
        };

        // Client-supplied: the major part can be anything i64-parseable,
        // so the scale to cents must not wrap
        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| ParseMoneyError::Invalid(s.to_string()))?;

        Ok(if negative {
            Money(-cents)
        } else {
            Money(cents)
        })
    }
}

impl fmt::Display for Money {
    /// Formats as a plain decimal string with two fractional digits: `12.50`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

// =============================================================================
// Serde Wire Format
// =============================================================================

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal string like \"12.50\" or a number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        v.parse().map_err(de::Error::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        if !v.is_finite() {
            return Err(de::Error::custom("money value must be finite"));
        }
        let cents = (v * 100.0).round();
        if cents < i64::MIN as f64 || cents > i64::MAX as f64 {
            return Err(de::Error::custom("money value out of range"));
        }
        Ok(Money::from_cents(cents as i64))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        v.checked_mul(100)
            .map(Money::from_cents)
            .ok_or_else(|| de::Error::custom("money value out of range"))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        i64::try_from(v)
            .ok()
            .and_then(|v| v.checked_mul(100))
            .map(Money::from_cents)
            .ok_or_else(|| de::Error::custom("money value out of range"))
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
