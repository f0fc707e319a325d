//! News listing and article view.

use super::format::{format_timestamp, or_placeholder};
use crate::models::NewsArticle;

pub const EXCERPT_CHARS: usize = 120;

pub fn news_row(article: &NewsArticle) -> String {
    format!(
        "#{:<4} {:<13} {} ({} - {})",
        article.id.as_u64(),
        format_timestamp(article.created()),
        article.title,
        or_placeholder(article.author.as_deref()),
        or_placeholder(article.category.as_deref())
    )
}

pub fn render_news(articles: &[NewsArticle]) -> String {
    if articles.is_empty() {
        return "No news articles yet.\n".to_string();
    }
    let mut out = String::new();
    for article in articles {
        out.push_str(&news_row(article));
        out.push('\n');
        let excerpt = article.excerpt(EXCERPT_CHARS);
        if !excerpt.is_empty() {
            out.push_str(&format!("       {}\n", excerpt));
        }
    }
    out
}

pub fn render_article(article: &NewsArticle) -> String {
    let mut out = format!("{}\n", article.title);
    out.push_str(&format!(
        "By {} in {} on {}{}\n\n",
        or_placeholder(article.author.as_deref()),
        or_placeholder(article.category.as_deref()),
        format_timestamp(article.created()),
        if article.published { "" } else { " (draft)" }
    ));
    out.push_str(article.content.as_deref().unwrap_or("").trim());
    out.push('\n');
    if let Some(image) = article.image_url.as_deref().filter(|u| !u.is_empty()) {
        out.push_str(&format!("\nImage: {}\n", image));
    }
    out
}
