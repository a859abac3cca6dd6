//! Money helpers using rust_decimal for precision
//!
//! All arithmetic stays in `Decimal`. Values are rounded to two places only
//! when they leave the system as JSON (see [`display`]).

use rust_decimal::prelude::*;

/// Currency display precision (2 decimal places, half away from zero)
pub const DECIMAL_PLACES: u32 = 2;

/// Round a monetary value for display
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Parse a stored decimal string (canonical `Decimal::to_string` form)
pub fn parse_money(raw: &str) -> Result<Decimal, rust_decimal::Error> {
    Decimal::from_str_exact(raw.trim())
}

/// Serde adapter: serialize as a JSON number rounded to two places.
///
/// Deserialization accepts numbers or strings and keeps the exact value.
pub mod display {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        rust_decimal::serde::float::serialize(&super::round_money(*value), serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        <Decimal as Deserialize>::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Priced {
        #[serde(with = "display")]
        amount: Decimal,
    }

    #[test]
    fn test_round_money_half_away_from_zero() {
        assert_eq!(round_money(Decimal::new(39375, 3)), Decimal::new(3938, 2));
        assert_eq!(round_money(Decimal::new(1875, 3)), Decimal::new(188, 2));
        assert_eq!(round_money(Decimal::new(1874, 3)), Decimal::new(187, 2));
    }

    #[test]
    fn test_accumulation_precision() {
        // 0.1 + 0.2 drifts in f64 but not in Decimal
        let sum = Decimal::new(1, 1) + Decimal::new(2, 1);
        assert_eq!(sum, Decimal::new(3, 1));

        let mut total = Decimal::ZERO;
        for _ in 0..1000 {
            total += Decimal::new(1, 2);
        }
        assert_eq!(total, Decimal::new(10, 0));
    }

    #[test]
    fn test_parse_money() {
        assert_eq!(parse_money("39.375").unwrap(), Decimal::new(39375, 3));
        assert_eq!(parse_money(" 15.00 ").unwrap(), Decimal::new(1500, 2));
        assert!(parse_money("abc").is_err());
    }

    #[test]
    fn test_display_serializes_rounded_number() {
        let json = serde_json::to_string(&Priced {
            amount: Decimal::new(39375, 3),
        })
        .unwrap();
        assert_eq!(json, r#"{"amount":39.38}"#);
    }

    #[test]
    fn test_display_deserializes_exact_value() {
        let p: Priced = serde_json::from_str(r#"{"amount":2.5}"#).unwrap();
        assert_eq!(p.amount, Decimal::new(25, 1));

        let p: Priced = serde_json::from_str(r#"{"amount":"1.875"}"#).unwrap();
        assert_eq!(p.amount, Decimal::new(1875, 3));
    }
}
