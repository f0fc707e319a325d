//! Admin dashboard.

use super::format::section;
use crate::{
    guard::Route,
    models::{LeagueStats, User},
};

/// Sections linked from the dashboard.
pub const SECTIONS: [Route; 4] = [
    Route::AdminTeams,
    Route::AdminPlayers,
    Route::AdminFixtures,
    Route::AdminNews,
];

pub fn render_dashboard(stats: &LeagueStats, user: Option<&User>) -> String {
    let mut out = match user {
        Some(user) => format!("Signed in as {}\n", user.username),
        None => String::from("Signed in\n"),
    };

    out.push_str(&section("Overview"));
    out.push_str(&format!("Teams:             {}\n", stats.total_teams));
    out.push_str(&format!("Players:           {}\n", stats.total_players));
    out.push_str(&format!("Fixtures:          {}\n", stats.total_fixtures));
    out.push_str(&format!("Completed matches: {}\n", stats.completed_matches));
    out.push_str(&format!("Upcoming matches:  {}\n", stats.upcoming_matches));

    out.push_str(&section("Manage"));
    for route in SECTIONS {
        out.push_str(&format!("{:<16} {}\n", route.title(), route.path()));
    }
    out.push_str(&format!(
        "{:<16} {}\n",
        Route::Tables.title(),
        Route::Tables.path()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_lists_sections() {
        let stats = LeagueStats {
            total_teams: 8,
            total_players: 120,
            ..Default::default()
        };
        let user = User {
            username: "admin".to_string(),
        };
        let text = render_dashboard(&stats, Some(&user));
        assert!(text.starts_with("Signed in as admin"));
        assert!(text.contains("Teams:             8"));
        for route in SECTIONS {
            assert!(text.contains(route.path()));
        }
    }
}
