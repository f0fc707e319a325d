//! Integration tests for rendering fetched records

use nufl::{
    models::{Fixture, Team},
    views::{render_fixtures, render_teams, FixtureSummary},
    FixtureFilter,
};
use serde_json::json;

fn teams() -> Vec<Team> {
    serde_json::from_value(json!([
        {"id": 1, "name": "Lagos Lions", "university": "University of Lagos", "player_count": 22},
        {"id": 2, "name": "Ibadan Eagles"},
        {"id": 3, "name": "Abuja Rams", "founded": "2001"}
    ]))
    .unwrap()
}

fn fixtures() -> Vec<Fixture> {
    serde_json::from_value(json!([
        {"id": 3, "home_team_id": 1, "away_team_id": 3, "date": "2025-10-18", "status": "scheduled"},
        {"id": 2, "home_team_id": 2, "away_team_id": 3, "date": "2025-10-11", "status": "completed",
         "home_score": 1, "away_score": 1},
        {"id": 1, "home_team_id": 1, "away_team_id": 2, "date": "2025-10-04", "status": "completed",
         "home_score": 3, "away_score": 0}
    ]))
    .unwrap()
}

#[test]
fn test_one_row_per_team() {
    let out = render_teams(&teams());
    assert_eq!(out.lines().count(), 3);
    assert!(out.contains("Lagos Lions"));
    assert!(out.contains("22 players"));
}

#[test]
fn test_fixture_summary_counts() {
    let summary = FixtureSummary::from_fixtures(&fixtures());
    assert_eq!(summary.total, 3);
    assert_eq!(summary.completed, 2);
    assert_eq!(summary.scheduled, 1);
    assert_eq!(summary.goals, 5);
    assert_eq!(summary.draws, 1);
}

#[test]
fn test_upcoming_filter_lists_only_scheduled_matches() {
    let out = render_fixtures(&fixtures(), &teams(), FixtureFilter::Upcoming);
    assert!(out.contains("Lagos Lions vs Abuja Rams"));
    assert!(!out.contains("3 - 0"));
}
