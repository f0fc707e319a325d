//! Error types for the NUFL league client

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NuflError>;

#[derive(Error, Debug)]
pub enum NuflError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session store error: {message}")]
    Session { message: String },

    #[error("Prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("Invalid API base URL: {url}")]
    InvalidApiUrl { url: String },

    #[error("Not signed in (API answered 401 for {endpoint})")]
    Unauthorized { endpoint: String },

    #[error("Login required to open {path}")]
    LoginRequired { path: String },

    #[error("Login rejected: {message}")]
    LoginRejected { message: String },

    #[error("Request rejected ({status}): {message}")]
    Validation { status: u16, message: String },

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Home team and away team cannot be the same")]
    SameTeams,

    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Unknown team: {id}")]
    UnknownTeam { id: u64 },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid fixture status: {status}")]
    InvalidStatus { status: String },

    #[error("Invalid date (expected YYYY-MM-DD): {value}")]
    InvalidDate { value: String },

    #[error("Invalid kick-off time (expected HH:MM): {value}")]
    InvalidTime { value: String },

    #[error("Failed to parse id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Unsupported image type: {file} (allowed: png, jpg, jpeg, gif, webp)")]
    UnsupportedImage { file: String },

    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: u64 },
}

impl NuflError {
    /// True when the failure means the session is missing or expired, and the
    /// caller should send the user to the admin login route.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            NuflError::Unauthorized { .. } | NuflError::LoginRequired { .. }
        )
    }

    /// True for failures caught on the client before any request was sent.
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            NuflError::SameTeams
                | NuflError::MissingField { .. }
                | NuflError::UnknownTeam { .. }
                | NuflError::InvalidPosition { .. }
                | NuflError::InvalidStatus { .. }
                | NuflError::InvalidDate { .. }
                | NuflError::InvalidTime { .. }
                | NuflError::UnsupportedImage { .. }
        )
    }
}

#[cfg(test)]
mod tests;
