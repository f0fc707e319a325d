//! League API access.
//!
//! [`ApiClient`] is the single gateway to the backend: one base URL, one
//! session jar, credentials on every request.

pub mod client;

pub use client::{image_mime, ApiClient, CHECK_AUTH_PATH, IMAGE_EXTENSIONS};
