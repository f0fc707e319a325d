//! Server-computed aggregates: the league table and the dashboard counters.

use serde::{Deserialize, Serialize};

use super::lenient;
use crate::TeamId;

/// One row of `GET /league_table`, already sorted by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueTableRow {
    pub team_id: TeamId,
    #[serde(alias = "name")]
    pub team_name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::parsed_or_default")]
    pub matches_played: u32,
    #[serde(default, deserialize_with = "lenient::opt_parsed")]
    pub wins: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_parsed")]
    pub draws: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_parsed")]
    pub losses: Option<u32>,
    #[serde(default, deserialize_with = "lenient::parsed_or_default")]
    pub goals_for: u32,
    #[serde(default, deserialize_with = "lenient::parsed_or_default")]
    pub goals_against: u32,
    #[serde(default, deserialize_with = "lenient::parsed_or_default")]
    pub goal_difference: i32,
    #[serde(default, deserialize_with = "lenient::parsed_or_default")]
    pub points: u32,
}

/// Counters behind the admin dashboard (`GET /stats`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueStats {
    #[serde(default)]
    pub total_teams: u32,
    #[serde(default)]
    pub total_players: u32,
    #[serde(default)]
    pub total_fixtures: u32,
    #[serde(default)]
    pub completed_matches: u32,
    #[serde(default)]
    pub upcoming_matches: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_table_row_payload() {
        let row: LeagueTableRow = serde_json::from_value(json!({
            "team_id": 1,
            "team_name": "Hall FC",
            "logo_url": null,
            "matches_played": 4,
            "points": 10,
            "goals_for": 9,
            "goals_against": 3,
            "goal_difference": 6
        }))
        .unwrap();

        assert_eq!(row.points, 10);
        assert_eq!(row.goal_difference, 6);
        assert_eq!(row.wins, None);
    }

    #[test]
    fn test_table_row_tolerates_nulls_and_name_alias() {
        let row: LeagueTableRow = serde_json::from_value(json!({
            "team_id": 2,
            "name": "Dockside",
            "points": null,
            "goal_difference": -2
        }))
        .unwrap();

        assert_eq!(row.team_name, "Dockside");
        assert_eq!(row.points, 0);
        assert_eq!(row.goal_difference, -2);
    }

    #[test]
    fn test_stats_payload() {
        let stats: LeagueStats = serde_json::from_value(json!({
            "total_teams": 8,
            "total_players": 160,
            "total_fixtures": 28,
            "completed_matches": 12,
            "upcoming_matches": 16
        }))
        .unwrap();
        assert_eq!(stats.total_players, 160);
        assert_eq!(stats.upcoming_matches, 16);
    }
}
