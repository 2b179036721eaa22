//! Exact decimal prices

use crate::error::{Error, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

/// Non-negative price, kept at cent precision.
///
/// Prices are read from JSON numbers or strings, must have at most two
/// decimal places and are stored with exactly two, so sums never drift the
/// way `f64` sums do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Zero price
    pub const ZERO: Price = Price(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// Rejects negatives, fractions of a cent and amounts above
    /// 1,000,000,000.00.
    pub fn new(amount: Decimal) -> Result<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(Error::InvalidPrice(amount.to_string()));
        }
        if amount.normalize().scale() > 2 {
            return Err(Error::InvalidPrice(format!(
                "{amount} has more than two decimal places"
            )));
        }
        if amount > max_amount() {
            return Err(Error::InvalidPrice(format!("{amount} exceeds {}", max_amount())));
        }
        Ok(Self(to_cents(amount.abs())))
    }

    /// Create a price from a whole number of cents
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), 2))
    }

    /// Get the decimal amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply by a rate and round half away from zero to cents.
    pub fn scaled(&self, rate: Decimal) -> Price {
        Price(to_cents(self.0.saturating_mul(rate)).max(Decimal::ZERO))
    }

    /// Subtract, clamping at zero
    pub fn saturating_sub(self, other: Price) -> Price {
        Price((self.0 - other.0).max(Decimal::ZERO))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

fn max_amount() -> Decimal {
    Decimal::new(100_000_000_000, 2)
}

fn to_cents(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

impl TryFrom<Decimal> for Price {
    type Error = Error;

    fn try_from(amount: Decimal) -> Result<Self> {
        Price::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl FromStr for Price {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let amount = Decimal::from_str(s.trim().trim_start_matches('$'))
            .map_err(|_| Error::InvalidPrice(s.to_string()))?;
        Price::new(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{:.2}", self.0))
    }
}

impl Add for Price {
    type Output = Price;

    /// Saturates at `Decimal::MAX` instead of panicking
    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Price {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_sum() {
        let a: Price = "540.00".parse().unwrap();
        let b: Price = "89.99".parse().unwrap();
        assert_eq!((a + b).to_string(), "629.99");

        let many: Price = std::iter::repeat(Price::from_cents(10)).take(10).sum();
        assert_eq!(many, Price::from_cents(100));
    }

    #[test]
    fn test_rejects_negative() {
        assert!("-1.00".parse::<Price>().is_err());
        assert!("abc".parse::<Price>().is_err());
        assert_eq!("0".parse::<Price>().unwrap(), Price::ZERO);
    }

    #[test]
    fn test_json_number_and_string() {
        let from_number: Price = serde_json::from_str("899.99").unwrap();
        let from_string: Price = serde_json::from_str("\"899.99\"").unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_number.to_string(), "899.99");
        assert!(serde_json::from_str::<Price>("-5").is_err());
    }

    #[test]
    fn test_scaled_rounds_to_cents() {
        let subtotal: Price = "629.99".parse().unwrap();
        let rate = Decimal::new(8, 2);
        assert_eq!(subtotal.scaled(rate).to_string(), "50.40");
    }

    #[test]
    fn test_display_pads_cents() {
        assert_eq!(Price::from_cents(54000).to_string(), "540.00");
        assert_eq!("99".parse::<Price>().unwrap().to_string(), "99.00");
    }

    #[test]
    fn test_rejects_fractions_of_a_cent() {
        assert!("0.005".parse::<Price>().is_err());
        assert!(serde_json::from_str::<Price>("19.999").is_err());
        assert_eq!("1.10".parse::<Price>().unwrap().to_string(), "1.10");
        assert_eq!("2.5000".parse::<Price>().unwrap().to_string(), "2.50");
    }

    #[test]
    fn test_rejects_huge_amounts() {
        assert!("1000000000.00".parse::<Price>().is_ok());
        assert!("1000000000.01".parse::<Price>().is_err());
        assert!("79228162514264337593543950335".parse::<Price>().is_err());
    }

    #[test]
    fn test_add_saturates() {
        let huge = Price(Decimal::MAX);
        assert_eq!(huge + Price::from_cents(1), huge);
        assert_eq!(huge.scaled(Decimal::TWO), Price(to_cents(Decimal::MAX)));
    }
}
