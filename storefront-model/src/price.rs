use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ModelError;

/// Monetary amount held in minor units (cents).
///
/// The catalog backend is inconsistent about price encoding: some products
/// carry `19.99`, others `"19.99"`. Both decode to the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(i64);

impl Price {
    pub const fn from_cents(cents: i64) -> Self {
        Price(cents)
    }

    pub fn from_major(amount: f64) -> Self {
        Price((amount * 100.0).round() as i64)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse a decimal string such as `"19.99"`, `"20"` or `" 5.5 "`.
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        let trimmed = raw.trim();
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Price::from_major)
            .ok_or_else(|| ModelError::InvalidPrice(raw.to_string()))
    }

    /// Whole-percent discount of `self` relative to a higher `original`.
    /// Returns `None` when `original` is not strictly greater.
    pub fn discount_from(&self, original: Price) -> Option<u8> {
        if original.0 <= 0 || original.0 <= self.0 {
            return None;
        }
        let saved = (original.0 - self.0) as f64;
        let pct = (saved / original.0 as f64 * 100.0).round();
        Some(pct.clamp(0.0, 100.0) as u8)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(self.0 as f64 / 100.0)
    }
}

struct PriceVisitor;

impl Visitor<'_> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a numeric string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
        Ok(Price::from_major(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
        v.checked_mul(100)
            .map(Price)
            .ok_or_else(|| E::custom(format!("price {v} out of range")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
        i64::try_from(v)
            .ok()
            .and_then(|major| major.checked_mul(100))
            .map(Price)
            .ok_or_else(|| E::custom(format!("price {v} out of range")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
        Price::parse(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(PriceVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_numbers_and_strings() {
        let a: Price = serde_json::from_str("19.99").unwrap();
        let b: Price = serde_json::from_str("\"19.99\"").unwrap();
        let c: Price = serde_json::from_str("20").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.cents(), 1999);
        assert_eq!(c.cents(), 2000);
    }

    #[test]
    fn oversized_integers_are_errors() {
        assert!(serde_json::from_str::<Price>("184467440737095516").is_err());
        assert!(serde_json::from_str::<Price>("18446744073709551615").is_err());
        assert!(serde_json::from_str::<Price>("-92233720368547759").is_err());
        let max: Price = serde_json::from_str("92233720368547758").unwrap();
        assert_eq!(max.cents(), 9223372036854775800);
    }

    #[test]
    fn rejects_garbage_strings() {
        assert!(serde_json::from_str::<Price>("\"free\"").is_err());
        assert!(Price::parse("NaN").is_err());
    }

    #[test]
    fn formats_with_two_decimals() {
        assert_eq!(Price::from_cents(505).to_string(), "5.05");
        assert_eq!(Price::from_cents(-150).to_string(), "-1.50");
    }

    #[test]
    fn discount_requires_a_higher_original() {
        let now = Price::from_cents(7500);
        assert_eq!(now.discount_from(Price::from_cents(10000)), Some(25));
        assert_eq!(now.discount_from(Price::from_cents(7500)), None);
        assert_eq!(now.discount_from(Price::from_cents(0)), None);
    }
}
