use super::StockError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A stock level after coercion from integer or text input.
///
/// Always finite, so comparisons are total in practice.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct StockQuantity(f64);

impl StockQuantity {
    /// Wrap a number, rejecting `NaN` and infinities.
    pub fn new(value: f64) -> Result<Self, StockError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(StockError::InvalidInput {
                value: value.to_string(),
            })
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Parse numeric text such as `"10"`, `" 5.5 "`, `"-3"` or `"1e3"`.
    ///
    /// Blank, non-finite and non-numeric text is rejected.
    pub fn parse(text: &str) -> Result<Self, StockError> {
        let invalid = || StockError::InvalidInput {
            value: text.to_string(),
        };
        let value = text.trim().parse::<f64>().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }
        Ok(Self(value))
    }
}

impl fmt::Display for StockQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Anything that can be coerced into a [`StockQuantity`].
pub trait StockInput {
    fn into_quantity(self) -> Result<StockQuantity, StockError>;
}

impl StockInput for StockQuantity {
    fn into_quantity(self) -> Result<StockQuantity, StockError> {
        Ok(self)
    }
}

impl StockInput for f64 {
    fn into_quantity(self) -> Result<StockQuantity, StockError> {
        StockQuantity::new(self)
    }
}

impl StockInput for i64 {
    fn into_quantity(self) -> Result<StockQuantity, StockError> {
        Ok(StockQuantity(self as f64))
    }
}

impl StockInput for i32 {
    fn into_quantity(self) -> Result<StockQuantity, StockError> {
        Ok(StockQuantity(f64::from(self)))
    }
}

impl StockInput for u32 {
    fn into_quantity(self) -> Result<StockQuantity, StockError> {
        Ok(StockQuantity(f64::from(self)))
    }
}

impl StockInput for u64 {
    fn into_quantity(self) -> Result<StockQuantity, StockError> {
        Ok(StockQuantity(self as f64))
    }
}

impl StockInput for &str {
    fn into_quantity(self) -> Result<StockQuantity, StockError> {
        StockQuantity::parse(self)
    }
}

impl StockInput for String {
    fn into_quantity(self) -> Result<StockQuantity, StockError> {
        StockQuantity::parse(&self)
    }
}

impl StockInput for &String {
    fn into_quantity(self) -> Result<StockQuantity, StockError> {
        StockQuantity::parse(self)
    }
}

/// Stock level classification.
///
/// The numeric codes are part of the public contract:
/// - `0`: out of stock
/// - `-1`: low stock (at or below the minimum)
/// - `1`: normal stock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    Low,
    Normal,
}

impl StockStatus {
    pub fn code(self) -> i8 {
        match self {
            StockStatus::OutOfStock => 0,
            StockStatus::Low => -1,
            StockStatus::Normal => 1,
        }
    }

    pub fn from_code(code: i8) -> Option<Self> {
        match code {
            0 => Some(StockStatus::OutOfStock),
            -1 => Some(StockStatus::Low),
            1 => Some(StockStatus::Normal),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "out of stock",
            StockStatus::Low => "low stock",
            StockStatus::Normal => "in stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(StockQuantity::parse("10").unwrap().value(), 10.0);
        assert_eq!(StockQuantity::parse("-5").unwrap().value(), -5.0);
        assert_eq!(StockQuantity::parse("+7").unwrap().value(), 7.0);
    }

    #[test]
    fn test_parse_decimal_and_exponent() {
        assert_eq!(StockQuantity::parse("5.5").unwrap().value(), 5.5);
        assert_eq!(StockQuantity::parse(".5").unwrap().value(), 0.5);
        assert_eq!(StockQuantity::parse("1e3").unwrap().value(), 1000.0);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(StockQuantity::parse("  42\n").unwrap().value(), 42.0);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        for text in ["abc", "", "   ", "10 units", "inf", "-infinity", "NaN", "1e400"] {
            let err = StockQuantity::parse(text).unwrap_err();
            assert!(
                matches!(err, StockError::InvalidInput { ref value } if value == text),
                "expected InvalidInput for {:?}",
                text
            );
        }
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(StockQuantity::new(f64::NAN).is_err());
        assert!(StockQuantity::new(f64::INFINITY).is_err());
        assert_eq!(StockQuantity::new(2.5).unwrap().value(), 2.5);
    }

    #[test]
    fn test_integer_inputs() {
        assert_eq!(42u64.into_quantity().unwrap().value(), 42.0);
        assert_eq!((-3i32).into_quantity().unwrap().value(), -3.0);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(StockStatus::OutOfStock.code(), 0);
        assert_eq!(StockStatus::Low.code(), -1);
        assert_eq!(StockStatus::Normal.code(), 1);
    }

    #[test]
    fn test_status_from_code() {
        for status in [StockStatus::OutOfStock, StockStatus::Low, StockStatus::Normal] {
            assert_eq!(StockStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(StockStatus::from_code(2), None);
    }

    #[test]
    fn test_status_serializes_as_snake_case() {
        let json = serde_json::to_string(&StockStatus::OutOfStock).unwrap();
        assert_eq!(json, r#""out_of_stock""#);
    }
}
