//! Authentication payloads.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
}

/// Body of `GET /check_auth`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStatus {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<User>,
}

impl AuthStatus {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(user: User) -> Self {
        Self {
            authenticated: true,
            user: Some(user),
        }
    }
}

/// Body of `POST /login`.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Response of `POST /login`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_auth_payloads() {
        let status: AuthStatus = serde_json::from_value(json!({
            "authenticated": true,
            "user": {"username": "admin"}
        }))
        .unwrap();
        assert_eq!(status, AuthStatus::signed_in(User { username: "admin".to_string() }));

        let status: AuthStatus = serde_json::from_value(json!({"authenticated": false})).unwrap();
        assert_eq!(status, AuthStatus::signed_out());
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials {
            username: "admin".to_string(),
            password: "hunter2".to_string(),
        };
        let debug = format!("{:?}", creds);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
    }
}
