use std::{str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};

/// Backend used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:5002/api";

/// What a data source does when the backend cannot deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackPolicy {
    /// Surface the error.
    None,
    /// Substitute the bundled sample content and mark it as fallback data.
    #[default]
    StaticSample,
}

impl FromStr for FallbackPolicy {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "none" | "off" | "disabled" => Ok(Self::None),
            "static-sample" | "static" | "sample" => Ok(Self::StaticSample),
            other => Err(format!("unknown fallback policy `{other}` (expected none|static-sample)")),
        }
    }
}

/// Runtime settings shared by the browser app and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub api_base_url: String,
    /// Items per listing page.
    pub page_size: u32,
    /// Items shown in the homepage "recent" strip.
    pub recent_limit: u32,
    /// Related items shown under a detail page.
    pub related_limit: u32,
    pub stories_per_page: usize,
    pub search_debounce_ms: u64,
    pub notification_duration_ms: u32,
    pub recent_fallback: FallbackPolicy,
    pub stories_fallback: FallbackPolicy,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            page_size: 9,
            recent_limit: 3,
            related_limit: 3,
            stories_per_page: 6,
            search_debounce_ms: 500,
            notification_duration_ms: 5000,
            recent_fallback: FallbackPolicy::StaticSample,
            stories_fallback: FallbackPolicy::StaticSample,
        }
    }
}

impl SiteConfig {
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base_url = base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

/// Badge styling for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub class: &'static str,
    pub color: &'static str,
}

pub const OTHER_CATEGORY: &str = "Other";

const CATEGORY_STYLES: &[(&str, CategoryStyle)] = &[
    ("Reform Victory", CategoryStyle { class: "bg-primary", color: "#195a9c" }),
    ("Youth Power", CategoryStyle { class: "bg-secondary", color: "#144A7F" }),
    (
        "Governance",
        CategoryStyle { class: "bg-gradient-to-r from-primary to-secondary", color: "#195a9c" },
    ),
    ("Civic Action", CategoryStyle { class: "bg-primary", color: "#195a9c" }),
    ("Community", CategoryStyle { class: "bg-secondary", color: "#144A7F" }),
    ("Education", CategoryStyle { class: "bg-blue-600", color: "#2563eb" }),
    ("Environment", CategoryStyle { class: "bg-green-600", color: "#16a34a" }),
    ("Technology", CategoryStyle { class: "bg-purple-600", color: "#9333ea" }),
    ("Economy", CategoryStyle { class: "bg-yellow-600", color: "#ca8a04" }),
    ("Health", CategoryStyle { class: "bg-red-600", color: "#dc2626" }),
    ("Infrastructure", CategoryStyle { class: "bg-gray-600", color: "#4b5563" }),
    (OTHER_CATEGORY, CategoryStyle { class: "bg-gray-500", color: "#6b7280" }),
];

/// Exact-name lookup; unknown categories get the "Other" style.
pub fn category_style(category: &str) -> CategoryStyle {
    CATEGORY_STYLES
        .iter()
        .find(|(name, _)| *name == category)
        .or_else(|| CATEGORY_STYLES.iter().find(|(name, _)| *name == OTHER_CATEGORY))
        .map(|(_, style)| *style)
        .unwrap_or(CategoryStyle {
            class: "bg-gray-500",
            color: "#6b7280",
        })
}

/// Blog categories in display order, for filter bars and forms.
pub fn blog_categories() -> impl Iterator<Item = &'static str> {
    CATEGORY_STYLES.iter().map(|(name, _)| *name)
}

/// Blog categories whose posts read as community stories.
pub const STORY_CATEGORIES: &[&str] =
    &["Community", "Education", "Healthcare", "Justice", "Youth", "Environment", "Women"];

/// Placeholder media and identity defaults.
pub mod defaults {
    pub const BLOG_IMAGE: &str = "/assets/images/blog-placeholder.jpg";
    pub const STORY_IMAGE: &str = "https://cdn-icons-png.flaticon.com/512/149/149071.png";
    pub const AUTHOR_IMAGE: &str = "https://cdn-icons-png.flaticon.com/512/149/149071.png";
    /// Portrait used for posts written by the site administrator.
    pub const ADMIN_AVATAR: &str = "/assets/images/neta g.jpg";
    pub const ADMIN_AUTHOR_NAME: &str = "Admin User";
    pub const COMMUNITY_MEMBER: &str = "Community Member";
    pub const ANONYMOUS_MEMBER: &str = "Anonymous Community Member";
    pub const LOCATION: &str = "Patna, Bihar";
    pub const FEATURED_AUTHOR_BIO: &str = "Movement Leader";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_falls_back_to_other() {
        assert_eq!(category_style("Governance").class, "bg-gradient-to-r from-primary to-secondary");
        assert_eq!(category_style("Astrology").class, "bg-gray-500");
        assert_eq!(category_style("governance").class, "bg-gray-500");
    }

    #[test]
    fn fallback_policy_parses_aliases() {
        assert_eq!("none".parse::<FallbackPolicy>(), Ok(FallbackPolicy::None));
        assert_eq!("Static-Sample".parse::<FallbackPolicy>(), Ok(FallbackPolicy::StaticSample));
        assert!("maybe".parse::<FallbackPolicy>().is_err());
    }

    #[test]
    fn api_base_drops_trailing_slash() {
        let config = SiteConfig::default().with_api_base("https://api.example.org/api/");
        assert_eq!(config.api_base_url, "https://api.example.org/api");
        assert_eq!(config.search_debounce(), Duration::from_millis(500));
    }
}
