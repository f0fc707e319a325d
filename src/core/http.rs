//! HTTP helpers shared by every API call

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::Deserialize;

/// Headers sent with every request. Cookies come from the session jar.
pub fn default_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Human-readable reason from an error response body. The API answers with
/// `{"error": ...}` or `{"message": ...}`; anything else is passed through.
pub fn error_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(msg) = parsed.error.or(parsed.message) {
            return msg;
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no details".to_string()
    } else {
        trimmed.chars().take(200).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers() {
        let headers = default_headers();

        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_error_message_variants() {
        assert_eq!(
            error_message(r#"{"error": "Team name already exists"}"#),
            "Team name already exists"
        );
        assert_eq!(
            error_message(r#"{"success": false, "message": "Invalid credentials"}"#),
            "Invalid credentials"
        );
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(error_message("   "), "no details");
    }
}
