//! Tolerant field decoders.
//!
//! The API stores form input as it arrives, so a jersey number may come back
//! as `10`, `"10"` or `""`, and a published flag as `true` or `1`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Decode a scalar that may be a number, a numeric string, empty or null.
/// Values that do not parse become `None`.
pub fn opt_parsed<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse().ok()
            }
        }
        Some(Value::Number(n)) => n.to_string().parse().ok(),
        Some(Value::Bool(b)) => b.to_string().parse().ok(),
        _ => None,
    })
}

/// Like [`opt_parsed`], falling back to `T::default()`.
pub fn parsed_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    Ok(opt_parsed(deserializer)?.unwrap_or_default())
}

/// Decode a boolean stored as `true`/`false`, `0`/`1` or a string of either.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(Value::String(s)) => matches!(
            s.trim().to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        _ => false,
    })
}

/// Treat blank optional text as absent.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
