//! Filter types for the public fixture pages.

use std::fmt;

use crate::models::Fixture;

use super::status::FixtureStatus;

/// Which fixtures the fixtures page lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum FixtureFilter {
    /// Every fixture
    #[default]
    All,
    /// Scheduled fixtures only
    Upcoming,
    /// Completed fixtures only
    Completed,
}

impl FixtureFilter {
    pub fn matches(&self, fixture: &Fixture) -> bool {
        match self {
            FixtureFilter::All => true,
            FixtureFilter::Upcoming => fixture.status == FixtureStatus::Scheduled,
            FixtureFilter::Completed => fixture.status == FixtureStatus::Completed,
        }
    }
}

impl fmt::Display for FixtureFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FixtureFilter::All => "all",
            FixtureFilter::Upcoming => "upcoming",
            FixtureFilter::Completed => "completed",
        };
        write!(f, "{}", s)
    }
}
