//! Lenient decoding for monetary amounts.
//!
//! Some server versions format amounts before sending them (`"123.40"`),
//! others send plain JSON numbers (`123.4`). Both decode to `f64`.

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

/// Parse an amount given as text. Surrounding whitespace is ignored and a
/// decimal comma is accepted.
pub fn parse_amount(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .or_else(|| trimmed.replace(',', ".").parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// `deserialize_with` helper accepting a JSON number or a decimal string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(value) => Ok(value),
        RawAmount::Text(text) => parse_amount(&text)
            .ok_or_else(|| de::Error::custom(format!("invalid amount: {:?}", text))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "deserialize")]
        value: f64,
    }

    fn decode(json: &str) -> Result<f64, serde_json::Error> {
        serde_json::from_str::<Holder>(json).map(|h| h.value)
    }

    #[test]
    fn test_number_and_string_forms() {
        assert_eq!(decode(r#"{"value": 123.4}"#).unwrap(), 123.4);
        assert_eq!(decode(r#"{"value": 10}"#).unwrap(), 10.0);
        assert_eq!(decode(r#"{"value": "123.40"}"#).unwrap(), 123.4);
        assert_eq!(decode(r#"{"value": " 7,5 "}"#).unwrap(), 7.5);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(decode(r#"{"value": "abc"}"#).is_err());
        assert!(decode(r#"{"value": ""}"#).is_err());
        assert!(decode(r#"{"value": null}"#).is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("0.00"), Some(0.0));
        assert_eq!(parse_amount("-5"), Some(-5.0));
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("   "), None);
    }
}
