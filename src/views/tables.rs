//! League table page.
//!
//! Rows arrive sorted from the server; positions are their order. Zone labels
//! and the summary panel are display-only.

use serde::Serialize;

use super::format::{opt_number, section};
use crate::models::LeagueTableRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    ChampionsLeague,
    EuropaLeague,
    Relegation,
}

impl Zone {
    /// Zone of the 1-based `position` in a table of `total` teams.
    pub fn of(position: usize, total: usize) -> Option<Zone> {
        if position <= 4 {
            Some(Zone::ChampionsLeague)
        } else if position <= 6 {
            Some(Zone::EuropaLeague)
        } else if position + 2 > total {
            Some(Zone::Relegation)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Zone::ChampionsLeague => "Champions League",
            Zone::EuropaLeague => "Europa League",
            Zone::Relegation => "Relegation",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TableSummary {
    pub teams: usize,
    /// Each match appears in two rows.
    pub matches: u32,
    pub goals: u32,
}

impl TableSummary {
    pub fn from_rows(rows: &[LeagueTableRow]) -> Self {
        Self {
            teams: rows.len(),
            matches: rows.iter().map(|r| r.matches_played).sum::<u32>() / 2,
            goals: rows.iter().map(|r| r.goals_for).sum(),
        }
    }

    pub fn goals_per_match(&self) -> String {
        super::format::average(self.goals, self.matches as usize)
    }
}

pub fn table_row(position: usize, row: &LeagueTableRow, total: usize) -> String {
    let zone = Zone::of(position, total).map(|z| z.label()).unwrap_or("");
    format!(
        "{:>2}. #{:<4} {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>+4} {:>4}  {}",
        position,
        row.team_id.as_u64(),
        row.team_name,
        row.matches_played,
        opt_number(row.wins),
        opt_number(row.draws),
        opt_number(row.losses),
        row.goals_for,
        row.goals_against,
        row.goal_difference,
        row.points,
        zone
    )
    .trim_end()
    .to_string()
}

/// Render the table, optionally cut to the first `limit` rows. Zones always
/// refer to the full table.
pub fn render_table(rows: &[LeagueTableRow], limit: Option<usize>) -> String {
    let mut out = format!(
        "{:>2}  {:<5} {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}\n",
        "#", "ID", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
    );
    if rows.is_empty() {
        out.push_str("No standings available yet.\n");
        return out;
    }
    let shown = limit.unwrap_or(rows.len()).min(rows.len());
    for (index, row) in rows[..shown].iter().enumerate() {
        out.push_str(&table_row(index + 1, row, rows.len()));
        out.push('\n');
    }
    out
}

pub fn render_standings(rows: &[LeagueTableRow]) -> String {
    let mut out = render_table(rows, None);

    let summary = TableSummary::from_rows(rows);
    out.push_str(&section("Season Summary"));
    out.push_str(&format!("Teams:           {}\n", summary.teams));
    out.push_str(&format!("Matches played:  {}\n", summary.matches));
    out.push_str(&format!("Goals scored:    {}\n", summary.goals));
    out.push_str(&format!("Goals per match: {}\n", summary.goals_per_match()));

    out.push_str(&section("Zones"));
    for zone in [Zone::ChampionsLeague, Zone::EuropaLeague, Zone::Relegation] {
        let names: Vec<&str> = rows
            .iter()
            .enumerate()
            .filter(|(i, _)| Zone::of(i + 1, rows.len()) == Some(zone))
            .map(|(_, r)| r.team_name.as_str())
            .collect();
        if !names.is_empty() {
            out.push_str(&format!("{:<17} {}\n", format!("{}:", zone.label()), names.join(", ")));
        }
    }
    out
}
