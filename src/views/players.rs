//! Players listing and player profile.

use super::format::{opt_number, or_placeholder};
use crate::{
    models::{team_name, Player, Team},
    TeamId,
};

fn club<'a>(player: &'a Player, teams: &'a [Team]) -> &'a str {
    match (player.team_name.as_deref().filter(|n| !n.is_empty()), player.team_id) {
        (Some(name), _) => name,
        (None, Some(id)) => team_name(teams, id),
        (None, None) => "Unknown Team",
    }
}

pub fn player_row(player: &Player, teams: &[Team]) -> String {
    format!(
        "#{:<4} {:>3}  {:<26} {:<4} {}",
        player.id.as_u64(),
        opt_number(player.jersey_number),
        player.name,
        player.position.map(|p| p.abbreviation()).unwrap_or("-"),
        club(player, teams)
    )
}

/// Players list, optionally narrowed to one team.
pub fn render_players(players: &[Player], teams: &[Team], team: Option<TeamId>) -> String {
    let shown: Vec<&Player> = players
        .iter()
        .filter(|p| team.map_or(true, |id| p.team_id == Some(id)))
        .collect();
    if shown.is_empty() {
        return "No players found.\n".to_string();
    }
    let mut out = String::new();
    for player in shown {
        out.push_str(&player_row(player, teams));
        out.push('\n');
    }
    out
}

pub fn render_player(player: &Player, teams: &[Team]) -> String {
    let mut out = format!("{} (#{})\n", player.name, player.id);
    out.push_str(&format!(
        "Position:    {}\n",
        player
            .position
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string())
    ));
    out.push_str(&format!("Team:        {}\n", club(player, teams)));
    out.push_str(&format!("Number:      {}\n", opt_number(player.jersey_number)));
    out.push_str(&format!("Age:         {}\n", opt_number(player.age)));
    out.push_str(&format!(
        "Nationality: {}\n",
        or_placeholder(player.nationality.as_deref())
    ));
    out.push_str(&format!(
        "Height:      {}\n",
        player
            .height
            .map(|h| format!("{:.2} m", h))
            .unwrap_or_else(|| "-".to_string())
    ));
    out.push_str(&format!(
        "Weight:      {}\n",
        player
            .weight
            .map(|w| format!("{:.1} kg", w))
            .unwrap_or_else(|| "-".to_string())
    ));
    if let Some(photo) = player.photo_url.as_deref().filter(|u| !u.is_empty()) {
        out.push_str(&format!("Photo:       {}\n", photo));
    }
    out
}
