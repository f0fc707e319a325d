//! News articles and the admin news form.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::lenient;
use crate::{error::NuflError, NewsId, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: NewsId,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub published: bool,
    /// ISO-8601 timestamp assigned by the server.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl NewsArticle {
    pub fn created(&self) -> Option<NaiveDateTime> {
        let raw = lenient::non_blank(&self.created_at)?;
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
    }

    /// First `max_chars` characters of the body, with an ellipsis when cut.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let body = self.content.as_deref().unwrap_or("").trim();
        if body.chars().count() <= max_chars {
            return body.to_string();
        }
        let cut: String = body.chars().take(max_chars).collect();
        format!("{}...", cut.trim_end())
    }
}

/// Form state for writing or editing an article.
///
/// `author` and `category` are left out of the request when unset so the API
/// applies its own defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsDraft {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub published: bool,
}

impl Default for NewsDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            author: None,
            category: None,
            image_url: None,
            published: true,
        }
    }
}

impl NewsDraft {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(NuflError::MissingField { field: "title" });
        }
        if self.content.trim().is_empty() {
            return Err(NuflError::MissingField { field: "content" });
        }
        Ok(())
    }
}

impl From<&NewsArticle> for NewsDraft {
    fn from(article: &NewsArticle) -> Self {
        Self {
            title: article.title.clone(),
            content: article.content.clone().unwrap_or_default(),
            author: article.author.clone(),
            category: article.category.clone(),
            image_url: article.image_url.clone(),
            published: article.published,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_article_payload() {
        let article: NewsArticle = serde_json::from_value(json!({
            "id": 8,
            "title": "Derby day",
            "content": "Hall FC host Dockside on Saturday.",
            "author": "Admin",
            "category": "Match Report",
            "image_url": null,
            "published": 1,
            "created_at": "2025-10-01T09:30:12.123456"
        }))
        .unwrap();

        assert!(article.published);
        let created = article.created().unwrap();
        assert_eq!(created.format("%Y-%m-%d %H:%M").to_string(), "2025-10-01 09:30");
    }

    #[test]
    fn test_excerpt() {
        let article: NewsArticle = serde_json::from_value(json!({
            "id": 1, "title": "t", "content": "abcdefghij"
        }))
        .unwrap();
        assert_eq!(article.excerpt(20), "abcdefghij");
        assert_eq!(article.excerpt(4), "abcd...");
    }

    #[test]
    fn test_draft_defaults_to_published() {
        let draft = NewsDraft::default();
        assert!(draft.published);
        assert!(matches!(
            draft.validate(),
            Err(NuflError::MissingField { field: "title" })
        ));
    }

    #[test]
    fn test_unset_author_is_not_sent() {
        let draft = NewsDraft {
            title: "Signing".to_string(),
            content: "New striker joins.".to_string(),
            ..Default::default()
        };
        let body = serde_json::to_value(&draft).unwrap();
        assert!(body.get("author").is_none());
        assert!(body.get("category").is_none());
        assert_eq!(body["published"], json!(true));
    }

    #[test]
    fn test_draft_from_article() {
        let article: NewsArticle = serde_json::from_value(json!({
            "id": 2, "title": "Injury update", "content": "Out for a month",
            "author": "Physio", "category": "Injury News",
            "image_url": "http://img/x.png", "published": true
        }))
        .unwrap();
        let draft = NewsDraft::from(&article);
        assert_eq!(draft.title, "Injury update");
        assert_eq!(draft.content, "Out for a month");
        assert_eq!(draft.author.as_deref(), Some("Physio"));
        assert_eq!(draft.category.as_deref(), Some("Injury News"));
        assert_eq!(draft.image_url.as_deref(), Some("http://img/x.png"));
        assert!(draft.published);
    }
}
