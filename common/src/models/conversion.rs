use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// Body posted to the conversion endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversionRequest {
    pub base: String,
    pub target: String,
    pub amount: f64,
}

/// Successful conversion as reported by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversionResult {
    pub base_currency: String,
    pub target_currency: String,
    #[serde(deserialize_with = "number_or_string")]
    pub amount: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub converted_amount: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub exchange_rate: f64,
}

/// What the conversion endpoint said about a request it accepted
#[derive(Debug, Clone, PartialEq)]
pub enum ExchangeOutcome {
    /// `status == "success"`
    Converted(ConversionResult),
    /// Any other status, with the backend's message if it sent one
    Rejected(Option<String>),
}

impl ExchangeOutcome {
    /// Interprets a decoded response body.
    pub fn from_payload(payload: Value) -> Result<Self> {
        let status = payload.get("status").and_then(Value::as_str);
        if status == Some("success") {
            let result = serde_json::from_value(payload)
                .map_err(|e| Error::ParseError(format!("Malformed conversion payload: {}", e)))?;
            return Ok(ExchangeOutcome::Converted(result));
        }

        let message = payload
            .get("message")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string);
        Ok(ExchangeOutcome::Rejected(message))
    }
}

// The backend emits JSON numbers; other deployments quote them.
fn number_or_string<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    let value = match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n,
        Raw::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid number {:?}: {}", s, e)))?,
    };
    // f64's parser also accepts "NaN" and "inf"
    if !value.is_finite() {
        return Err(serde::de::Error::custom(format!("non-finite number {}", value)));
    }
    Ok(value)
}
