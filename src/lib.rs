//! NUFL League Client Library
//!
//! A typed client and terminal front end for the Nigerian Universities
//! Football League API: public fixtures, results, tables, statistics, news,
//! teams and players, plus the signed-in admin workflow for managing them.
//!
//! ## Features
//!
//! - **One API client**: a single base URL and a persistent session cookie
//! - **Guarded routes**: admin pages render only for a signed-in session
//! - **Derived views**: summaries, zones, recent form and the next match
//! - **Admin editors**: create, edit, delete and record results
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nufl::{api::ApiClient, app::App, core::SessionStore};
//!
//! # async fn example() -> nufl::Result<()> {
//! let api = ApiClient::new("http://localhost:5000/api", SessionStore::in_memory())?;
//! let mut app = App::start(api).await;
//! let visit = app.visit("/tables").await;
//! print!("{}", visit.page.render());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export NUFL_API_URL=https://nufl.example.org/api
//! ```

pub mod admin;
pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod guard;
pub mod models;
pub mod views;

// Re-export commonly used types
pub use cli::types::{FixtureFilter, FixtureId, FixtureStatus, NewsId, PlayerId, Position, TeamId};
pub use crate::core::config::{API_URL_ENV_VAR, DEFAULT_API_URL, SESSION_FILE_ENV_VAR};
pub use error::{NuflError, Result};
