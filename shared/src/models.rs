use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Blog,
    Story,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blog => f.write_str("blog post"),
            Self::Story => f.write_str("story"),
        }
    }
}

/// Moderation status as reported by the backend.
///
/// Blogs use lower-case `published`, contributions use `Approved`; both are
/// parsed case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentStatus {
    #[default]
    Published,
    Approved,
    Draft,
    Pending,
    Rejected,
    Other(String),
}

impl ContentStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "published" => Self::Published,
            "approved" => Self::Approved,
            "draft" => Self::Draft,
            "pending" => Self::Pending,
            "rejected" => Self::Rejected,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Published => "published",
            Self::Approved => "Approved",
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
            Self::Other(raw) => raw,
        }
    }

    /// Only published blogs and approved stories reach end users.
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Published | Self::Approved)
    }
}

impl From<String> for ContentStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<ContentStatus> for String {
    fn from(status: ContentStatus) -> Self {
        status.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    /// Short bio for blog authors, role line for story contributors.
    pub bio: String,
    pub avatar_url: String,
}

/// Fields only community stories carry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoryDetails {
    pub location: String,
    pub author_location: String,
    pub author_age: Option<String>,
    pub impact: String,
    pub inspiration: String,
    pub submitted_at: Option<String>,
}

/// A blog post or community story normalized for rendering.
///
/// Built once from API JSON or bundled samples and never mutated; the
/// view-models only replace the lists that hold them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub kind: ContentKind,
    pub slug: Option<String>,
    pub title: String,
    pub excerpt: String,
    pub body_html: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author: Author,
    /// Raw timestamp as sent by the backend (ISO 8601 or `YYYY-MM-DD`).
    pub published_at: Option<String>,
    pub read_time_label: String,
    pub image_url: String,
    pub status: ContentStatus,
    pub story: Option<StoryDetails>,
}

impl ContentItem {
    pub fn is_public(&self) -> bool {
        self.status.is_public()
    }

    pub fn published_timestamp(&self) -> Option<NaiveDateTime> {
        self.published_at.as_deref().and_then(utils::parse_timestamp)
    }

    /// Human date for cards, e.g. "January 15, 2025".
    pub fn date_label(&self) -> String {
        self.published_at
            .as_deref()
            .map(utils::format_date)
            .unwrap_or_default()
    }

    pub fn shares_tag_with(&self, other: &ContentItem) -> bool {
        self.tags
            .iter()
            .any(|tag| other.tags.iter().any(|candidate| candidate == tag))
    }
}

/// Newest first; items without a parseable date sink to the end.
pub fn sort_by_recency(items: &mut [ContentItem]) {
    items.sort_by(|a, b| b.published_timestamp().cmp(&a.published_timestamp()));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub page_size: u32,
}

impl Pagination {
    pub fn first(page_size: u32) -> Self {
        Self {
            page: 1,
            total_pages: 1,
            total_count: 0,
            page_size,
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn next_page(&self) -> Option<u32> {
        self.has_next().then_some(self.page + 1)
    }

    /// Restore `1 <= page <= total_pages`.
    pub fn clamped(mut self) -> Self {
        self.total_pages = self.total_pages.max(1);
        self.page = self.page.clamp(1, self.total_pages);
        self
    }
}

/// Active listing filters. Empty strings are stored as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Filters {
    pub category: Option<String>,
    pub search: Option<String>,
}

impl Filters {
    pub fn new(category: Option<String>, search: Option<String>) -> Self {
        Self {
            category: non_blank(category),
            search: non_blank(search),
        }
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, published_at: Option<&str>) -> ContentItem {
        ContentItem {
            id: id.to_string(),
            kind: ContentKind::Blog,
            slug: None,
            title: format!("Post {id}"),
            excerpt: String::new(),
            body_html: String::new(),
            category: "Governance".to_string(),
            tags: vec![],
            author: Author::default(),
            published_at: published_at.map(str::to_string),
            read_time_label: String::new(),
            image_url: String::new(),
            status: ContentStatus::Published,
            story: None,
        }
    }

    #[test]
    fn status_parsing_is_case_insensitive() {
        assert_eq!(ContentStatus::parse("Approved"), ContentStatus::Approved);
        assert_eq!(ContentStatus::parse("PUBLISHED"), ContentStatus::Published);
        assert!(!ContentStatus::parse("draft").is_public());
        assert_eq!(ContentStatus::parse("archived"), ContentStatus::Other("archived".to_string()));
    }

    #[test]
    fn recency_sort_puts_undated_last() {
        let mut items = vec![
            item("a", Some("2025-01-05T00:00:00Z")),
            item("b", None),
            item("c", Some("2025-01-15")),
        ];
        sort_by_recency(&mut items);
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn pagination_clamp_keeps_page_in_range() {
        let pagination = Pagination {
            page: 7,
            total_pages: 0,
            total_count: 0,
            page_size: 9,
        }
        .clamped();
        assert_eq!(pagination.total_pages, 1);
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.next_page(), None);
    }

    #[test]
    fn filters_drop_blank_values() {
        let filters = Filters::new(Some("  ".to_string()), Some(" water ".to_string()));
        assert_eq!(filters.category, None);
        assert_eq!(filters.search.as_deref(), Some("water"));
    }
}
