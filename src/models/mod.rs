//! Mirrors of the records owned by the league API, plus the drafts the admin
//! forms submit.

pub mod auth;
pub mod fixture;
pub mod lenient;
pub mod news;
pub mod player;
pub mod standings;
pub mod team;

use serde::{Deserialize, Serialize};

pub use auth::{AuthStatus, Credentials, LoginResponse, User};
pub use fixture::{Fixture, FixtureDraft, LegacyFixture, ScoreDraft};
pub use news::{NewsArticle, NewsDraft};
pub use player::{Player, PlayerDraft};
pub use standings::{LeagueStats, LeagueTableRow};
pub use team::{team_name, Team, TeamDraft};

/// Acknowledgement body returned by mutating endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    /// Server-assigned id, present on create.
    #[serde(default, deserialize_with = "lenient::opt_parsed")]
    pub id: Option<u64>,
}

/// Response of `POST /upload`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub url: String,
}
