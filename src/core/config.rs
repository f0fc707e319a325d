//! Client configuration: where the API lives and where the session is kept.
//!
//! One base URL and one credential mode for every request. The URL comes from
//! `--api-url`, then `NUFL_API_URL`, then the local development default.

use std::path::PathBuf;

use crate::{error::NuflError, Result};

pub const API_URL_ENV_VAR: &str = "NUFL_API_URL";
pub const SESSION_FILE_ENV_VAR: &str = "NUFL_SESSION_FILE";
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub session_file: PathBuf,
}

impl ClientConfig {
    pub fn resolve(api_url: Option<String>) -> Result<Self> {
        Ok(Self {
            api_url: resolve_api_url(api_url)?,
            session_file: session_file_path(),
        })
    }
}

/// Pick the API base URL from the flag, the environment or the default, and
/// check that it is an absolute http(s) URL. Trailing slashes are dropped.
pub fn resolve_api_url(flag: Option<String>) -> Result<String> {
    let raw = flag
        .filter(|s| !s.trim().is_empty())
        .or_else(|| {
            std::env::var(API_URL_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
        })
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    normalize_api_url(&raw)
}

fn normalize_api_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = reqwest::Url::parse(trimmed).map_err(|_| NuflError::InvalidApiUrl {
        url: raw.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(NuflError::InvalidApiUrl {
            url: raw.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Path: ~/.cache/nufl/session.json, unless `NUFL_SESSION_FILE` is set.
pub fn session_file_path() -> PathBuf {
    if let Some(path) = std::env::var_os(SESSION_FILE_ENV_VAR).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("nufl").join("session.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_api_url() {
        assert_eq!(
            normalize_api_url("https://league.example.com/api/").unwrap(),
            "https://league.example.com/api"
        );
        assert_eq!(
            normalize_api_url(" http://localhost:5000/api ").unwrap(),
            "http://localhost:5000/api"
        );
        assert!(matches!(
            normalize_api_url("/api"),
            Err(NuflError::InvalidApiUrl { .. })
        ));
        assert!(matches!(
            normalize_api_url("ftp://league.example.com"),
            Err(NuflError::InvalidApiUrl { .. })
        ));
    }

    #[test]
    fn test_resolve_api_url_precedence() {
        // Single test so the env var is not raced by a sibling test
        std::env::remove_var(API_URL_ENV_VAR);
        assert_eq!(resolve_api_url(None).unwrap(), DEFAULT_API_URL);

        std::env::set_var(API_URL_ENV_VAR, "https://nufl.example.org/api/");
        assert_eq!(
            resolve_api_url(None).unwrap(),
            "https://nufl.example.org/api"
        );

        // Flag wins over the environment
        assert_eq!(
            resolve_api_url(Some("http://127.0.0.1:8000/api".to_string())).unwrap(),
            "http://127.0.0.1:8000/api"
        );

        // Blank flag falls through to the environment
        assert_eq!(
            resolve_api_url(Some("  ".to_string())).unwrap(),
            "https://nufl.example.org/api"
        );

        std::env::remove_var(API_URL_ENV_VAR);
    }

    #[test]
    fn test_session_file_path_default_location() {
        if std::env::var_os(SESSION_FILE_ENV_VAR).is_none() {
            let path = session_file_path();
            assert!(path.ends_with("nufl/session.json"));
        }
    }
}
