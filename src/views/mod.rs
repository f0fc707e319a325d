//! Page renderers.
//!
//! Each page is plain text built from data the app has already fetched. Lists
//! print one line per record, starting with its id.

pub mod dashboard;
pub mod fixtures;
pub mod format;
pub mod home;
pub mod nav;
pub mod news;
pub mod players;
pub mod results;
pub mod stats;
pub mod tables;
pub mod teams;

pub use dashboard::render_dashboard;
pub use fixtures::{render_fixture, render_fixtures, FixtureSummary};
pub use home::HomePage;
pub use nav::{nav_entries, render_nav, NavAction, NavEntry};
pub use news::{render_article, render_news};
pub use players::{render_player, render_players};
pub use results::{render_results, Outcome, ResultsSummary};
pub use stats::StatsPage;
pub use tables::{render_standings, render_table, TableSummary, Zone};
pub use teams::{render_team, render_teams};
