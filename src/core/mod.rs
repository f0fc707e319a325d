//! Core utilities for the NUFL client
//!
//! - `config`: API base URL and session file resolution
//! - `http`: default headers and error body decoding
//! - `session`: the persistent session cookie jar

pub mod config;
pub mod http;
pub mod session;

pub use config::{resolve_api_url, session_file_path, ClientConfig};
pub use http::{default_headers, error_message};
pub use session::SessionStore;
