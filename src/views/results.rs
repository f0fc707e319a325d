//! Results page: completed fixtures, matchweek filter and summary.

use serde::Serialize;

use super::format::{average, format_date, matchup, section};
use crate::{
    models::{
        fixture::{parse_date, parse_time},
        Fixture, Team,
    },
    FixtureId,
};

/// Number of results in the recent form strip.
pub const RECENT_FORM: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl Outcome {
    pub fn of(fixture: &Fixture) -> Option<Outcome> {
        let (home, away) = fixture.score()?;
        Some(match home.cmp(&away) {
            std::cmp::Ordering::Greater => Outcome::HomeWin,
            std::cmp::Ordering::Less => Outcome::AwayWin,
            std::cmp::Ordering::Equal => Outcome::Draw,
        })
    }

    /// Letter from the home side's point of view.
    pub fn letter(&self) -> char {
        match self {
            Outcome::HomeWin => 'W',
            Outcome::AwayWin => 'L',
            Outcome::Draw => 'D',
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ResultsSummary {
    pub matches: usize,
    pub goals: u32,
    pub draws: usize,
}

impl ResultsSummary {
    pub fn from_results(results: &[&Fixture]) -> Self {
        Self {
            matches: results.len(),
            goals: results.iter().map(|f| f.goals()).sum(),
            draws: results.iter().filter(|f| f.is_draw()).count(),
        }
    }

    pub fn average_goals(&self) -> String {
        average(self.goals, self.matches)
    }
}

pub fn completed(fixtures: &[Fixture]) -> Vec<&Fixture> {
    fixtures.iter().filter(|f| f.is_completed()).collect()
}

/// Outcome letters of the last [`RECENT_FORM`] results, oldest first. The
/// API lists fixtures newest first, so results are ordered by date and time
/// here; undated results count as the oldest.
pub fn recent_form(fixtures: &[Fixture]) -> String {
    let mut results = completed(fixtures);
    results.sort_by_key(|f| {
        let date = f.date.as_deref().and_then(|d| parse_date(d).ok());
        let time = f.time.as_deref().and_then(|t| parse_time(t).ok());
        (date, time)
    });
    let start = results.len().saturating_sub(RECENT_FORM);
    results[start..]
        .iter()
        .filter_map(|f| Outcome::of(f).map(|o| o.letter()))
        .collect()
}

/// Matchweeks with a result, ascending. A matchweek is a fixture id.
pub fn matchweeks(fixtures: &[Fixture]) -> Vec<FixtureId> {
    let mut weeks: Vec<FixtureId> = completed(fixtures).iter().map(|f| f.id).collect();
    weeks.sort();
    weeks.dedup();
    weeks
}

pub fn result_row(fixture: &Fixture, teams: &[Team]) -> String {
    let letter = Outcome::of(fixture).map(|o| o.letter()).unwrap_or('-');
    format!(
        "#{:<4} {:<18} {:<45} {}",
        fixture.id.as_u64(),
        format_date(fixture.date.as_deref()),
        matchup(fixture, teams),
        letter
    )
}

pub fn render_results(fixtures: &[Fixture], teams: &[Team], matchweek: Option<FixtureId>) -> String {
    let results = completed(fixtures);
    let mut out = String::new();

    let weeks = matchweeks(fixtures)
        .iter()
        .map(|w| w.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    match matchweek {
        Some(week) => out.push_str(&format!("Matchweek {} (available: {})\n\n", week, weeks)),
        None => out.push_str(&format!("All matchweeks (available: {})\n\n", weeks)),
    }

    let shown: Vec<&&Fixture> = results
        .iter()
        .filter(|f| matchweek.map_or(true, |week| f.id == week))
        .collect();
    if shown.is_empty() {
        out.push_str("No results found.\n");
    }
    for fixture in shown {
        out.push_str(&result_row(fixture, teams));
        out.push('\n');
    }

    let summary = ResultsSummary::from_results(&results);
    out.push_str(&section("Summary"));
    out.push_str(&format!("Matches played:  {}\n", summary.matches));
    out.push_str(&format!("Total goals:     {}\n", summary.goals));
    out.push_str(&format!("Draws:           {}\n", summary.draws));
    out.push_str(&format!("Avg goals/match: {}\n", summary.average_goals()));

    let form = recent_form(fixtures);
    if !form.is_empty() {
        out.push_str(&format!("Recent form:     {}\n", form));
    }
    out
}
