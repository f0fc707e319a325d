//! Statistics page.
//!
//! `/stats` needs a signed-in session, so visitors see counters reduced from
//! the public fixture list and table instead.

use serde::Serialize;

use super::{
    fixtures::FixtureSummary,
    format::{average, section},
    results::{completed, Outcome},
};
use crate::models::{Fixture, LeagueStats, LeagueTableRow, Team};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatsPage {
    /// Server counters, present for a signed-in session.
    pub server: Option<LeagueStats>,
    pub teams: usize,
    pub fixtures: FixtureSummary,
    pub home_wins: usize,
    pub away_wins: usize,
    /// Fixture id and goal margin of the biggest win.
    pub biggest_win: Option<(u64, u32)>,
    pub best_attack: Option<String>,
    pub best_defence: Option<String>,
}

impl StatsPage {
    pub fn new(
        server: Option<LeagueStats>,
        fixtures: &[Fixture],
        table: &[LeagueTableRow],
    ) -> Self {
        let results = completed(fixtures);
        let outcomes: Vec<Outcome> = results.iter().filter_map(|f| Outcome::of(f)).collect();
        let biggest_win = results
            .iter()
            .filter_map(|f| f.score().map(|(h, a)| (f.id.as_u64(), h.abs_diff(a))))
            .filter(|(_, margin)| *margin > 0)
            .max_by_key(|(_, margin)| *margin);

        Self {
            server,
            teams: table.len(),
            fixtures: FixtureSummary::from_fixtures(fixtures),
            home_wins: outcomes.iter().filter(|o| **o == Outcome::HomeWin).count(),
            away_wins: outcomes.iter().filter(|o| **o == Outcome::AwayWin).count(),
            biggest_win,
            best_attack: table
                .iter()
                .max_by_key(|r| r.goals_for)
                .map(|r| r.team_name.clone()),
            best_defence: table
                .iter()
                .filter(|r| r.matches_played > 0)
                .min_by_key(|r| r.goals_against)
                .map(|r| r.team_name.clone()),
        }
    }

    pub fn render(&self, fixtures: &[Fixture], teams: &[Team]) -> String {
        let mut out = String::new();

        if let Some(server) = &self.server {
            out.push_str(&section("League"));
            out.push_str(&format!("Teams:             {}\n", server.total_teams));
            out.push_str(&format!("Players:           {}\n", server.total_players));
            out.push_str(&format!("Fixtures:          {}\n", server.total_fixtures));
            out.push_str(&format!("Completed matches: {}\n", server.completed_matches));
            out.push_str(&format!("Upcoming matches:  {}\n", server.upcoming_matches));
        } else {
            out.push_str(&section("League"));
            out.push_str(&format!("Teams:             {}\n", self.teams));
            out.push_str(&format!("Fixtures:          {}\n", self.fixtures.total));
            out.push_str(&format!("Completed matches: {}\n", self.fixtures.completed));
            out.push_str(&format!("Upcoming matches:  {}\n", self.fixtures.scheduled));
        }

        out.push_str(&section("Goals"));
        out.push_str(&format!("Total goals:       {}\n", self.fixtures.goals));
        out.push_str(&format!(
            "Goals per match:   {}\n",
            average(self.fixtures.goals, self.fixtures.completed)
        ));
        out.push_str(&format!("Home wins:         {}\n", self.home_wins));
        out.push_str(&format!("Away wins:         {}\n", self.away_wins));
        out.push_str(&format!("Draws:             {}\n", self.fixtures.draws));
        if let Some((id, margin)) = self.biggest_win {
            if let Some(fixture) = fixtures.iter().find(|f| f.id.as_u64() == id) {
                out.push_str(&format!(
                    "Biggest win:       {} (by {})\n",
                    super::format::matchup(fixture, teams),
                    margin
                ));
            }
        }
        if let Some(team) = &self.best_attack {
            out.push_str(&format!("Best attack:       {}\n", team));
        }
        if let Some(team) = &self.best_defence {
            out.push_str(&format!("Best defence:      {}\n", team));
        }
        out
    }
}
