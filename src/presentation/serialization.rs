//! Serialization utilities for upstream API responses
//!
//! The brokerage API returns most numeric fields as decimal strings
//! (`"quantity": "10.0000"`) and omits fields it has no value for. These
//! helpers deserialize such fields leniently: missing, null, empty or
//! malformed values fall back to a safe default instead of failing the whole
//! record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes a string-or-number field into an `f64`, defaulting to 0.0
///
/// Use with `#[serde(default, deserialize_with = "string_as_float")]`.
pub fn string_as_float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value_as_float(value).unwrap_or(0.0))
}

/// Deserializes a string-or-number field into an `Option<f64>`
///
/// Missing, null, empty or malformed values become `None`.
pub fn string_as_float_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value_as_float(value))
}

fn value_as_float(value: Option<Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Record {
        #[serde(default, deserialize_with = "string_as_float")]
        amount: f64,
        #[serde(default, deserialize_with = "string_as_float_opt")]
        rate: Option<f64>,
    }

    #[test]
    fn test_numeric_strings_parse() {
        let record: Record = serde_json::from_str(r#"{"amount": "3.50", "rate": "0.73"}"#).unwrap();
        assert_eq!(record.amount, 3.5);
        assert_eq!(record.rate, Some(0.73));
    }

    #[test]
    fn test_bare_numbers_parse() {
        let record: Record = serde_json::from_str(r#"{"amount": 2, "rate": 1.5}"#).unwrap();
        assert_eq!(record.amount, 2.0);
        assert_eq!(record.rate, Some(1.5));
    }

    #[test]
    fn test_missing_and_empty_default() {
        let record: Record = serde_json::from_str(r#"{"amount": ""}"#).unwrap();
        assert_eq!(record.amount, 0.0);
        assert_eq!(record.rate, None);

        let record: Record = serde_json::from_str(r#"{"amount": null, "rate": null}"#).unwrap();
        assert_eq!(record.amount, 0.0);
        assert_eq!(record.rate, None);
    }

    #[test]
    fn test_malformed_defaults() {
        let record: Record = serde_json::from_str(r#"{"amount": "n/a", "rate": "oops"}"#).unwrap();
        assert_eq!(record.amount, 0.0);
        assert_eq!(record.rate, None);
    }
}
