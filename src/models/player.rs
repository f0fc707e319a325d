//! Player records and the admin player form.

use serde::{Deserialize, Serialize};

use super::{lenient, Team};
use crate::{error::NuflError, PlayerId, Position, Result, TeamId};

/// A squad member as returned by `GET /players`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default, deserialize_with = "lenient::opt_parsed")]
    pub position: Option<Position>,
    #[serde(default, deserialize_with = "lenient::opt_parsed")]
    pub team_id: Option<TeamId>,
    /// Joined in by the list endpoint; absent from `/teams/:id/players`.
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_parsed")]
    pub jersey_number: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_parsed")]
    pub age: Option<u32>,
    #[serde(default)]
    pub nationality: Option<String>,
    /// Centimetres.
    #[serde(default, deserialize_with = "lenient::opt_parsed")]
    pub height: Option<f64>,
    /// Kilograms.
    #[serde(default, deserialize_with = "lenient::opt_parsed")]
    pub weight: Option<f64>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Form state for creating or editing a player.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerDraft {
    pub name: String,
    pub position: Option<Position>,
    pub team_id: Option<TeamId>,
    pub jersey_number: Option<u32>,
    pub age: Option<u32>,
    pub nationality: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub photo_url: Option<String>,
}

impl PlayerDraft {
    /// Check required fields and that the selected team is one of `teams`.
    pub fn validate(&self, teams: &[Team]) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(NuflError::MissingField { field: "name" });
        }
        if self.position.is_none() {
            return Err(NuflError::MissingField { field: "position" });
        }
        let team_id = self
            .team_id
            .ok_or(NuflError::MissingField { field: "team_id" })?;
        if !teams.iter().any(|t| t.id == team_id) {
            return Err(NuflError::UnknownTeam {
                id: team_id.as_u64(),
            });
        }
        Ok(())
    }
}

impl From<&Player> for PlayerDraft {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            position: player.position,
            team_id: player.team_id,
            jersey_number: player.jersey_number,
            age: player.age,
            nationality: player.nationality.clone(),
            height: player.height,
            weight: player.weight,
            photo_url: player.photo_url.clone(),
        }
    }
}
