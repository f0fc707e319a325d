//! Fixtures, results and the admin fixture form.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{lenient, team_name, Team};
use crate::{error::NuflError, FixtureId, FixtureStatus, Result, TeamId};

/// A match as returned by `GET /fixtures`.
///
/// The list endpoint joins in team names and ids; the single-record endpoint
/// only carries names, so both are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub away_team: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_parsed")]
    pub home_team_id: Option<TeamId>,
    #[serde(default, deserialize_with = "lenient::opt_parsed")]
    pub away_team_id: Option<TeamId>,
    /// `match_date` on deployments that only serve the legacy endpoints.
    #[serde(default, alias = "match_date")]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default, deserialize_with = "lenient::parsed_or_default")]
    pub status: FixtureStatus,
    #[serde(default, deserialize_with = "lenient::opt_parsed")]
    pub home_score: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_parsed")]
    pub away_score: Option<u32>,
}

impl Fixture {
    pub fn is_completed(&self) -> bool {
        self.status == FixtureStatus::Completed
    }

    pub fn is_scheduled(&self) -> bool {
        self.status == FixtureStatus::Scheduled
    }

    /// Goals scored by both sides; missing scores count as zero.
    pub fn goals(&self) -> u32 {
        self.home_score.unwrap_or(0) + self.away_score.unwrap_or(0)
    }

    pub fn is_draw(&self) -> bool {
        self.is_completed() && self.home_score.unwrap_or(0) == self.away_score.unwrap_or(0)
    }

    /// Final score, only for completed fixtures.
    pub fn score(&self) -> Option<(u32, u32)> {
        if !self.is_completed() {
            return None;
        }
        Some((self.home_score.unwrap_or(0), self.away_score.unwrap_or(0)))
    }

    pub fn home_name<'a>(&'a self, teams: &'a [Team]) -> &'a str {
        Self::side_name(&self.home_team, self.home_team_id, teams)
    }

    pub fn away_name<'a>(&'a self, teams: &'a [Team]) -> &'a str {
        Self::side_name(&self.away_team, self.away_team_id, teams)
    }

    fn side_name<'a>(name: &'a Option<String>, id: Option<TeamId>, teams: &'a [Team]) -> &'a str {
        match (lenient::non_blank(name), id) {
            (Some(name), _) => name,
            (None, Some(id)) => team_name(teams, id),
            (None, None) => "Unknown Team",
        }
    }
}

/// Form state for scheduling or editing a fixture.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FixtureDraft {
    pub home_team_id: Option<TeamId>,
    pub away_team_id: Option<TeamId>,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub venue: String,
    pub status: FixtureStatus,
}

impl FixtureDraft {
    /// Reject the draft before any request is made, including identical home
    /// and away selections.
    pub fn validate(&self, teams: &[Team]) -> Result<()> {
        let home = self
            .home_team_id
            .ok_or(NuflError::MissingField { field: "home_team_id" })?;
        let away = self
            .away_team_id
            .ok_or(NuflError::MissingField { field: "away_team_id" })?;
        if home == away {
            return Err(NuflError::SameTeams);
        }
        if self.date.trim().is_empty() {
            return Err(NuflError::MissingField { field: "date" });
        }
        parse_date(&self.date)?;
        if self.time.trim().is_empty() {
            return Err(NuflError::MissingField { field: "time" });
        }
        parse_time(&self.time)?;
        for id in [home, away] {
            if !teams.iter().any(|t| t.id == id) {
                return Err(NuflError::UnknownTeam { id: id.as_u64() });
            }
        }
        Ok(())
    }

    /// The legacy body for a validated draft, with team names looked up in
    /// `teams`.
    pub fn to_legacy(&self, teams: &[Team]) -> Result<LegacyFixture> {
        let name_of = |id: Option<TeamId>, field: &'static str| -> Result<String> {
            let id = id.ok_or(NuflError::MissingField { field })?;
            teams
                .iter()
                .find(|t| t.id == id)
                .map(|t| t.name.clone())
                .ok_or(NuflError::UnknownTeam { id: id.as_u64() })
        };
        Ok(LegacyFixture {
            home_team: name_of(self.home_team_id, "home_team_id")?,
            away_team: name_of(self.away_team_id, "away_team_id")?,
            match_date: self.date.trim().to_string(),
        })
    }
}

/// Body of the legacy `POST /add_fixture`, which identifies teams by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyFixture {
    pub home_team: String,
    pub away_team: String,
    pub match_date: String,
}

impl From<&Fixture> for FixtureDraft {
    fn from(fixture: &Fixture) -> Self {
        Self {
            home_team_id: fixture.home_team_id,
            away_team_id: fixture.away_team_id,
            date: fixture.date.clone().unwrap_or_default(),
            time: fixture.time.clone().unwrap_or_default(),
            venue: fixture.venue.clone().unwrap_or_default(),
            status: fixture.status,
        }
    }
}

/// Body of `POST /fixtures/:id/result`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDraft {
    pub home_score: u32,
    pub away_score: u32,
}

/// Parse a fixture date in the form the API stores it.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| NuflError::InvalidDate {
        value: value.to_string(),
    })
}

/// Parse a kick-off time, with or without seconds.
pub fn parse_time(value: &str) -> Result<NaiveTime> {
    let value_trimmed = value.trim();
    NaiveTime::parse_from_str(value_trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value_trimmed, "%H:%M:%S"))
        .map_err(|_| NuflError::InvalidTime {
            value: value.to_string(),
        })
}
