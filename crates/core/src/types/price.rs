//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are rupee amounts held as [`Decimal`] so that line totals are exact.
//! On the wire and in stored documents they are plain JSON numbers
//! (`299.0`), matching what storefront clients already send and expect.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
    /// Arithmetic on the amount exceeded the decimal range.
    #[error("price arithmetic overflowed")]
    Overflow,
}

/// A non-negative amount in Indian rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// Zero rupees.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Create a price from paise (1/100 rupee).
    #[must_use]
    pub const fn from_paise(paise: u32) -> Self {
        Self(Decimal::from_parts(paise, 0, 0, false, 2))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Overflow`] if the product leaves the decimal range.
    pub fn times(self, quantity: u32) -> Result<Self, PriceError> {
        self.0
            .checked_mul(Decimal::from(quantity))
            .map(Self)
            .ok_or(PriceError::Overflow)
    }

    /// Sum of two prices.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Overflow`] if the sum leaves the decimal range.
    pub fn checked_add(self, other: Self) -> Result<Self, PriceError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(PriceError::Overflow)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{:.2}", self.0)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = rust_decimal::serde::float::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_negative_amount() {
        let err = Price::new(Decimal::new(-1, 0)).unwrap_err();
        assert!(matches!(err, PriceError::Negative(_)));
        assert!(Price::new(Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_times_quantity() {
        let price = Price::from_paise(29_900);
        assert_eq!(price.times(2).unwrap().amount(), Decimal::new(598, 0));
        assert_eq!(price.times(0).unwrap(), Price::ZERO);
    }

    #[test]
    fn test_checked_arithmetic_reports_overflow() {
        let max = Price::new(Decimal::MAX).unwrap();
        assert_eq!(max.checked_add(Price::from_paise(100)), Err(PriceError::Overflow));
        assert_eq!(max.times(2), Err(PriceError::Overflow));
    }

    #[test]
    fn test_serializes_as_json_number() {
        let json = serde_json::to_string(&Price::from_paise(59_800)).unwrap();
        assert_eq!(json, "598.0");

        let back: Price = serde_json::from_str("299.5").unwrap();
        assert_eq!(back.amount(), Decimal::new(2995, 1));
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Price>("-10.0").is_err());
    }

    #[test]
    fn test_display_has_rupee_symbol() {
        assert_eq!(Price::from_paise(25_900).to_string(), "₹259.00");
    }
}
