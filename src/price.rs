//! Price Amounts
//!
//! Prices are whole cents internally. The `$X.XX` text form only exists for
//! display and for the persisted cart, which older builds wrote as strings.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A non-negative amount in cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    cents: u64,
}

impl Price {
    pub const ZERO: Price = Price { cents: 0 };

    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub const fn cents(self) -> u64 {
        self.cents
    }

    /// Parse a display string such as `$4.50`, `4.5` or `£3`.
    ///
    /// A single leading currency symbol is stripped. Anything that does not
    /// parse as a finite, non-negative amount becomes zero.
    pub fn parse_lenient(text: &str) -> Self {
        let trimmed = text.trim();
        let number = match trimmed.chars().next() {
            Some(c) if !c.is_ascii_digit() && c != '.' => trimmed[c.len_utf8()..].trim_start(),
            _ => trimmed,
        };
        match number.parse::<f64>() {
            Ok(value) => Self::from_dollars(value),
            Err(_) => Self::ZERO,
        }
    }

    /// Convert a dollar amount, rounding to the nearest cent
    pub fn from_dollars(value: f64) -> Self {
        if !value.is_finite() || value < 0.0 {
            return Self::ZERO;
        }
        Self { cents: (value * 100.0).round() as u64 }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price { cents: self.cents.saturating_add(rhs.cents) }
    }
}

impl Mul<u32> for Price {
    type Output = Price;

    fn mul(self, rhs: u32) -> Price {
        Price { cents: self.cents.saturating_mul(u64::from(rhs)) }
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Stored prices are either legacy strings or plain numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredPrice {
    Text(String),
    Amount(f64),
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match StoredPrice::deserialize(deserializer)? {
            StoredPrice::Text(text) => Price::parse_lenient(&text),
            StoredPrice::Amount(value) => Price::from_dollars(value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display_form() {
        assert_eq!(Price::parse_lenient("$4.50").cents(), 450);
        assert_eq!(Price::parse_lenient(" $ 12 ").cents(), 1200);
        assert_eq!(Price::parse_lenient("3.99").cents(), 399);
        assert_eq!(Price::parse_lenient("€2.1").cents(), 210);
    }

    #[test]
    fn test_malformed_is_zero() {
        assert_eq!(Price::parse_lenient(""), Price::ZERO);
        assert_eq!(Price::parse_lenient("$abc"), Price::ZERO);
        assert_eq!(Price::parse_lenient("free"), Price::ZERO);
        assert_eq!(Price::parse_lenient("-$3.00"), Price::ZERO);
        assert_eq!(Price::parse_lenient("$NaN"), Price::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_cents(450).to_string(), "$4.50");
        assert_eq!(Price::from_cents(5).to_string(), "$0.05");
        assert_eq!(Price::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let total: Price = vec![Price::from_cents(350) * 2, Price::from_cents(125)].into_iter().sum();
        assert_eq!(total.cents(), 825);
    }

    #[test]
    fn test_stored_forms() {
        let from_text: Price = serde_json::from_str("\"$3.25\"").unwrap();
        let from_number: Price = serde_json::from_str("3.25").unwrap();
        let from_junk: Price = serde_json::from_str("\"n/a\"").unwrap();
        assert_eq!(from_text.cents(), 325);
        assert_eq!(from_number.cents(), 325);
        assert_eq!(from_junk, Price::ZERO);
        assert_eq!(serde_json::to_string(&from_text).unwrap(), "\"$3.25\"");
    }
}
