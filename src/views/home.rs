//! Home page: upcoming fixtures, top of the table, latest news.

use serde::Serialize;

use super::{
    fixtures::{fixture_row, upcoming},
    format::section,
    news::news_row,
    tables::render_table,
};
use crate::models::{Fixture, LeagueTableRow, NewsArticle};

pub const UPCOMING_LIMIT: usize = 5;
pub const TABLE_LIMIT: usize = 10;
pub const NEWS_LIMIT: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HomePage {
    pub upcoming: Vec<Fixture>,
    pub table: Vec<LeagueTableRow>,
    pub news: Vec<NewsArticle>,
}

impl HomePage {
    pub fn new(fixtures: &[Fixture], table: Vec<LeagueTableRow>, news: Vec<NewsArticle>) -> Self {
        Self {
            upcoming: upcoming(fixtures)
                .into_iter()
                .take(UPCOMING_LIMIT)
                .cloned()
                .collect(),
            table,
            news: news.into_iter().take(NEWS_LIMIT).collect(),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("Nigerian Universities Football League\n");

        out.push_str(&section("Upcoming Matches"));
        if self.upcoming.is_empty() {
            out.push_str("No upcoming matches scheduled.\n");
        }
        for fixture in &self.upcoming {
            out.push_str(&fixture_row(fixture, &[]));
            out.push('\n');
        }

        out.push_str(&section("League Table"));
        out.push_str(&render_table(&self.table, Some(TABLE_LIMIT)));

        out.push_str(&section("Latest News"));
        if self.news.is_empty() {
            out.push_str("No news articles yet.\n");
        }
        for article in &self.news {
            out.push_str(&news_row(article));
            out.push('\n');
        }
        out
    }
}
