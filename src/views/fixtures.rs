//! Fixtures page: filtered list, summary panel and next match.

use serde::Serialize;

use super::format::{average, format_date, format_time, matchup, or_placeholder, section};
use crate::{
    models::{
        fixture::{parse_date, parse_time},
        Fixture, Team,
    },
    FixtureFilter,
};

/// Display-only counters over the fetched fixture list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FixtureSummary {
    pub total: usize,
    pub completed: usize,
    pub scheduled: usize,
    /// Goals across completed fixtures.
    pub goals: u32,
    pub draws: usize,
}

impl FixtureSummary {
    pub fn from_fixtures(fixtures: &[Fixture]) -> Self {
        let mut summary = Self {
            total: fixtures.len(),
            ..Self::default()
        };
        for fixture in fixtures {
            if fixture.is_scheduled() {
                summary.scheduled += 1;
            }
            if fixture.is_completed() {
                summary.completed += 1;
                summary.goals += fixture.goals();
                if fixture.is_draw() {
                    summary.draws += 1;
                }
            }
        }
        summary
    }

    pub fn average_goals(&self) -> String {
        average(self.goals, self.completed)
    }
}

/// Scheduled fixtures, soonest first. Fixtures without a usable date sort
/// last, in the order the API returned them.
pub fn upcoming(fixtures: &[Fixture]) -> Vec<&Fixture> {
    let mut scheduled: Vec<&Fixture> = fixtures.iter().filter(|f| f.is_scheduled()).collect();
    scheduled.sort_by_key(|f| {
        let date = f.date.as_deref().and_then(|d| parse_date(d).ok());
        let time = f.time.as_deref().and_then(|t| parse_time(t).ok());
        (date.is_none(), date, time)
    });
    scheduled
}

pub fn next_match(fixtures: &[Fixture]) -> Option<&Fixture> {
    upcoming(fixtures).into_iter().next()
}

/// `#id  date  time  home vs away  @ venue  [Status]`
pub fn fixture_row(fixture: &Fixture, teams: &[Team]) -> String {
    format!(
        "#{:<4} {:<18} {:<6} {:<45} @ {:<20} [{}]",
        fixture.id.as_u64(),
        format_date(fixture.date.as_deref()),
        format_time(fixture.time.as_deref()),
        matchup(fixture, teams),
        or_placeholder(fixture.venue.as_deref()),
        fixture.status.label()
    )
}

pub fn render_fixtures(fixtures: &[Fixture], teams: &[Team], filter: FixtureFilter) -> String {
    let mut out = String::new();
    let shown: Vec<&Fixture> = fixtures.iter().filter(|f| filter.matches(f)).collect();

    out.push_str(&format!("Showing: {}\n\n", filter));
    if shown.is_empty() {
        out.push_str("No fixtures found for the selected filter.\n");
    }
    for fixture in &shown {
        out.push_str(&fixture_row(fixture, teams));
        out.push('\n');
    }

    let summary = FixtureSummary::from_fixtures(fixtures);
    out.push_str(&section("Season Summary"));
    out.push_str(&format!("Total fixtures:  {}\n", summary.total));
    out.push_str(&format!("Completed:       {}\n", summary.completed));
    out.push_str(&format!("Scheduled:       {}\n", summary.scheduled));
    out.push_str(&format!("Total goals:     {}\n", summary.goals));
    out.push_str(&format!("Avg goals/match: {}\n", summary.average_goals()));
    out.push_str(&format!("Draws:           {}\n", summary.draws));

    out.push_str(&section("Next Match"));
    match next_match(fixtures) {
        Some(next) => out.push_str(&format!(
            "{}\n{} at {}, {}\n",
            matchup(next, teams),
            format_date(next.date.as_deref()),
            format_time(next.time.as_deref()),
            or_placeholder(next.venue.as_deref())
        )),
        None => out.push_str("No upcoming matches scheduled.\n"),
    }
    out
}

pub fn render_fixture(fixture: &Fixture, teams: &[Team]) -> String {
    let mut out = format!("Fixture #{}\n", fixture.id);
    out.push_str(&format!("{}\n", matchup(fixture, teams)));
    out.push_str(&format!("Date:   {}\n", format_date(fixture.date.as_deref())));
    out.push_str(&format!("Time:   {}\n", format_time(fixture.time.as_deref())));
    out.push_str(&format!("Venue:  {}\n", or_placeholder(fixture.venue.as_deref())));
    out.push_str(&format!("Status: {}\n", fixture.status.label()));
    out
}
