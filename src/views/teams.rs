//! Teams listing and team page with squad.

use super::{
    format::{opt_number, or_placeholder, section},
    players::player_row,
};
use crate::models::{Player, Team};

pub fn team_row(team: &Team) -> String {
    format!(
        "#{:<4} {:<24} {:<28} {:<14} {:>5} {}",
        team.id.as_u64(),
        team.name,
        or_placeholder(team.university.as_deref()),
        or_placeholder(team.city.as_deref()),
        opt_number(team.founded),
        team.player_count
            .map(|n| format!("{} players", n))
            .unwrap_or_default()
    )
    .trim_end()
    .to_string()
}

pub fn render_teams(teams: &[Team]) -> String {
    if teams.is_empty() {
        return "No teams registered.\n".to_string();
    }
    let mut out = String::new();
    for team in teams {
        out.push_str(&team_row(team));
        out.push('\n');
    }
    out
}

pub fn render_team(team: &Team, squad: &[Player]) -> String {
    let mut out = format!("{} (#{})\n", team.name, team.id);
    out.push_str(&format!("University: {}\n", or_placeholder(team.university.as_deref())));
    out.push_str(&format!("City:       {}\n", or_placeholder(team.city.as_deref())));
    out.push_str(&format!("Stadium:    {}\n", or_placeholder(team.stadium.as_deref())));
    out.push_str(&format!("Founded:    {}\n", opt_number(team.founded)));
    out.push_str(&format!("Coach:      {}\n", or_placeholder(team.coach.as_deref())));
    if let Some(logo) = team.logo_url.as_deref().filter(|u| !u.is_empty()) {
        out.push_str(&format!("Logo:       {}\n", logo));
    }

    out.push_str(&section(&format!("Squad ({})", squad.len())));
    if squad.is_empty() {
        out.push_str("No players registered.\n");
    }
    let teams = std::slice::from_ref(team);
    for player in squad {
        out.push_str(&player_row(player, teams));
        out.push('\n');
    }
    out
}
