//! Fixed-point money amounts.
//!
//! Prices arrive from the catalog as decimal numbers (`144.69`) or decimal strings.
//! Everything downstream works in integer cents so totals and tax never drift.

use num_traits::ToPrimitive;
use num_traits::cast::cast;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while converting catalog amounts into [`Money`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    #[error("amount is not a finite number")]
    NonFinite,
    #[error("amount {0} does not fit in cents")]
    OutOfRange(String),
    #[error("invalid decimal amount: {0:?}")]
    Invalid(String),
}

/// An amount of money in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Round a decimal amount half away from zero to the cent.
    ///
    /// # Errors
    ///
    /// Returns an error when the amount does not fit in `i64` cents.
    pub fn from_amount(amount: Decimal) -> Result<Self, MoneyError> {
        amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .map(Self)
            .ok_or_else(|| MoneyError::OutOfRange(amount.to_string()))
    }

    /// Convert a JSON number.
    ///
    /// The float is read back through its shortest decimal text, so `1.005`
    /// rounds exactly like the string `"1.005"`.
    ///
    /// # Errors
    ///
    /// Returns an error for NaN/infinite input or amounts beyond the `i64` cent range.
    pub fn from_decimal(amount: f64) -> Result<Self, MoneyError> {
        if !amount.is_finite() {
            return Err(MoneyError::NonFinite);
        }
        let text = amount.to_string();
        match Decimal::from_str(&text) {
            Ok(value) => Self::from_amount(value),
            Err(_) => Err(MoneyError::OutOfRange(text)),
        }
    }

    /// Parse a decimal string such as `"144.69"`, `"5"` or `"-2.5"`.
    ///
    /// # Errors
    ///
    /// Returns an error when the text is not a decimal number or overflows.
    pub fn parse_decimal(text: &str) -> Result<Self, MoneyError> {
        let value = Decimal::from_str(text.trim())
            .map_err(|_| MoneyError::Invalid(text.to_string()))?;
        Self::from_amount(value)
    }

    /// Take an integer percentage of this amount, rounding half away from zero.
    #[must_use]
    pub const fn percent(self, pct: i64) -> Self {
        let scaled = self.0.saturating_mul(pct);
        let quotient = scaled / 100;
        let remainder = scaled % 100;
        if remainder.abs() >= 50 {
            Self(quotient + scaled.signum())
        } else {
            Self(quotient)
        }
    }

    /// Amount as a float, for serialization back to the catalog shape.
    #[must_use]
    pub fn as_decimal(self) -> f64 {
        cast::<i64, f64>(self.0).unwrap_or(0.0) / 100.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, qty: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(qty)))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parsed = match RawAmount::deserialize(deserializer)? {
            RawAmount::Number(n) => Self::from_decimal(n),
            RawAmount::Text(s) => Self::parse_decimal(&s),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_amounts_round_to_cents() {
        assert_eq!(Money::from_decimal(144.69).unwrap().cents(), 14469);
        assert_eq!(Money::from_decimal(0.005).unwrap().cents(), 1);
        assert_eq!(Money::from_decimal(-2.5).unwrap().cents(), -250);
        assert_eq!(Money::from_decimal(f64::NAN), Err(MoneyError::NonFinite));
        assert!(matches!(
            Money::from_decimal(1e300),
            Err(MoneyError::OutOfRange(_))
        ));
    }

    #[test]
    fn decimal_strings_parse_exactly() {
        assert_eq!(Money::parse_decimal("144.69").unwrap().cents(), 14469);
        assert_eq!(Money::parse_decimal("5").unwrap().cents(), 500);
        assert_eq!(Money::parse_decimal(" 0.5 ").unwrap().cents(), 50);
        assert_eq!(Money::parse_decimal("-2.5").unwrap().cents(), -250);
        assert_eq!(Money::parse_decimal("1.005").unwrap().cents(), 101);
        assert_eq!(Money::parse_decimal("1.004").unwrap().cents(), 100);
        assert!(Money::parse_decimal("").is_err());
        assert!(Money::parse_decimal("12a").is_err());
        assert!(Money::parse_decimal("1.2.3").is_err());
    }

    #[test]
    fn numbers_and_strings_round_alike() {
        for text in ["1.005", "0.015", "144.695", "-2.675", "19.99"] {
            let number: Money = serde_json::from_str(text).unwrap();
            let quoted: Money = serde_json::from_str(&format!("\"{text}\"")).unwrap();
            assert_eq!(number, quoted, "{text}");
        }
        let number: Money = serde_json::from_str("1.005").unwrap();
        assert_eq!(number.cents(), 101);
    }

    #[test]
    fn display_pads_cents() {
        assert_eq!(Money::from_cents(2500).to_string(), "25.00");
        assert_eq!(Money::from_cents(525).to_string(), "5.25");
        assert_eq!(Money::from_cents(7).to_string(), "0.07");
        assert_eq!(Money::from_cents(-250).to_string(), "-2.50");
    }

    #[test]
    fn percent_rounds_half_away_from_zero() {
        assert_eq!(Money::from_cents(2500).percent(21), Money::from_cents(525));
        assert_eq!(Money::from_cents(1050).percent(21), Money::from_cents(221));
        assert_eq!(Money::from_cents(-1050).percent(21), Money::from_cents(-221));
        assert_eq!(Money::ZERO.percent(21), Money::ZERO);
    }

    #[test]
    fn serde_accepts_numbers_and_strings() {
        let from_number: Money = serde_json::from_str("10.5").unwrap();
        let from_int: Money = serde_json::from_str("3").unwrap();
        let from_text: Money = serde_json::from_str("\"19.99\"").unwrap();
        assert_eq!(from_number.cents(), 1050);
        assert_eq!(from_int.cents(), 300);
        assert_eq!(from_text.cents(), 1999);
        assert_eq!(serde_json::to_string(&from_text).unwrap(), "19.99");
    }
}
