//! Text formatting shared by the page renderers.

use chrono::NaiveDateTime;

use crate::models::{fixture, Fixture, Team};

pub const PLACEHOLDER: &str = "-";

/// `2025-10-04` → `Sat, Oct 4, 2025`. Unparseable input is shown as is.
pub fn format_date(value: Option<&str>) -> String {
    match value {
        None => "TBD".to_string(),
        Some(raw) => fixture::parse_date(raw)
            .map(|d| d.format("%a, %b %-d, %Y").to_string())
            .unwrap_or_else(|_| raw.to_string()),
    }
}

/// Kick-off time as `HH:MM`.
pub fn format_time(value: Option<&str>) -> String {
    match value {
        None => "TBD".to_string(),
        Some(raw) => fixture::parse_time(raw)
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|_| raw.to_string()),
    }
}

pub fn format_timestamp(value: Option<NaiveDateTime>) -> String {
    value
        .map(|ts| ts.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => PLACEHOLDER,
    }
}

pub fn opt_number<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// `Home 2 - 1 Away`, or `Home vs Away` before kick-off.
pub fn matchup(fixture: &Fixture, teams: &[Team]) -> String {
    let home = fixture.home_name(teams);
    let away = fixture.away_name(teams);
    match fixture.score() {
        Some((h, a)) if fixture.is_completed() => format!("{} {} - {} {}", home, h, a, away),
        _ => format!("{} vs {}", home, away),
    }
}

/// One decimal place, `0.0` for an empty sample.
pub fn average(total: u32, count: usize) -> String {
    if count == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", f64::from(total) / count as f64)
}

pub fn heading(title: &str) -> String {
    format!("{}\n{}\n", title, "=".repeat(title.chars().count()))
}

pub fn section(title: &str) -> String {
    format!("\n{}\n{}\n", title, "-".repeat(title.chars().count()))
}
