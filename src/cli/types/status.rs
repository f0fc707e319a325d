//! Fixture lifecycle status.

use crate::error::NuflError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a fixture as stored by the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixtureStatus {
    #[default]
    Scheduled,
    Live,
    Completed,
    Cancelled,
}

impl FixtureStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FixtureStatus::Scheduled => "scheduled",
            FixtureStatus::Live => "live",
            FixtureStatus::Completed => "completed",
            FixtureStatus::Cancelled => "cancelled",
        }
    }

    /// Title-cased label for listings.
    pub fn label(&self) -> &'static str {
        match self {
            FixtureStatus::Scheduled => "Scheduled",
            FixtureStatus::Live => "Live",
            FixtureStatus::Completed => "Completed",
            FixtureStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for FixtureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FixtureStatus {
    type Err = NuflError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scheduled" => Ok(FixtureStatus::Scheduled),
            "live" => Ok(FixtureStatus::Live),
            "completed" => Ok(FixtureStatus::Completed),
            "cancelled" | "canceled" => Ok(FixtureStatus::Cancelled),
            _ => Err(NuflError::InvalidStatus {
                status: s.to_string(),
            }),
        }
    }
}
