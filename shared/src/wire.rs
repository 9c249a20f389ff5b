//! Backend JSON shapes and their normalization into [`ContentItem`].
//!
//! The backend is loose about types (`readTime` may be `"5 min read"` or
//! `5`, contributor ages arrive as strings or numbers), so every field is
//! optional and decoded leniently. Normalization is where defaults live.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{
    config::defaults,
    models::{Author, ContentItem, ContentKind, ContentStatus, StoryDetails},
    utils,
};

fn default_true() -> bool {
    true
}

/// `{success, data, pagination?, message?}` around every JSON response.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub pagination: Option<WirePagination>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WirePagination {
    pub current: u32,
    pub pages: u32,
    pub total: u64,
    pub limit: u32,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(raw)) => Some(raw),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(values)) => values
            .into_iter()
            .filter_map(|value| match value {
                Value::String(tag) if !tag.trim().is_empty() => Some(tag.trim().to_string()),
                _ => None,
            })
            .collect(),
        Some(Value::String(raw)) => utils::parse_tags(&raw),
        _ => Vec::new(),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogRecord {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_bio: Option<String>,
    #[serde(default)]
    pub author_location: Option<String>,
    #[serde(default)]
    pub author: Option<AuthorRecord>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub read_time: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

impl BlogRecord {
    fn author_name(&self) -> String {
        non_empty(self.author_name.clone())
            .or_else(|| self.author.as_ref().and_then(|author| non_empty(author.name.clone())))
            .unwrap_or_else(|| defaults::COMMUNITY_MEMBER.to_string())
    }

    fn author_avatar(&self) -> String {
        self.author
            .as_ref()
            .and_then(|author| non_empty(author.avatar.clone()))
            .map(|avatar| utils::image_url(&avatar))
            .unwrap_or_else(|| defaults::AUTHOR_IMAGE.to_string())
    }

    fn image_or(&self, fallback: &str) -> String {
        non_empty(self.featured_image.clone())
            .map(|path| utils::image_url(&path))
            .unwrap_or_else(|| fallback.to_string())
    }

    fn excerpt(&self) -> String {
        non_empty(self.excerpt.clone()).unwrap_or_else(|| utils::generate_excerpt(&self.content))
    }

    pub fn into_item(self) -> ContentItem {
        let author = Author {
            name: self.author_name(),
            bio: self.author_bio.clone().unwrap_or_default(),
            avatar_url: self.author_avatar(),
        };
        let image_url = self.image_or(defaults::BLOG_IMAGE);
        let excerpt = self.excerpt();
        ContentItem {
            id: self.id.unwrap_or_default(),
            kind: ContentKind::Blog,
            slug: non_empty(self.slug),
            title: self.title,
            excerpt,
            body_html: self.content,
            category: self.category,
            tags: self.tags,
            author,
            published_at: non_empty(self.published_at).or(self.created_at),
            read_time_label: read_time_label(self.read_time),
            image_url,
            status: self
                .status
                .as_deref()
                .map(ContentStatus::parse)
                .unwrap_or(ContentStatus::Published),
            story: None,
        }
    }

    /// Present a story-category blog in the stories grid.
    pub fn into_story(self, index: usize) -> ContentItem {
        let author = Author {
            name: self.author_name(),
            bio: non_empty(self.author_bio.clone())
                .unwrap_or_else(|| defaults::COMMUNITY_MEMBER.to_string()),
            avatar_url: self.author_avatar(),
        };
        let image_url = self.image_or(defaults::STORY_IMAGE);
        let excerpt = self.excerpt();
        let tags = if self.tags.is_empty() {
            utils::generate_tags(&self.category, &self.content)
        } else {
            self.tags
        };
        let location =
            non_empty(self.author_location).unwrap_or_else(|| defaults::LOCATION.to_string());
        ContentItem {
            id: non_empty(self.id).unwrap_or_else(|| (index + 1).to_string()),
            kind: ContentKind::Story,
            slug: non_empty(self.slug),
            title: self.title,
            excerpt,
            body_html: self.content,
            category: self.category,
            tags,
            author,
            published_at: non_empty(self.published_at).or_else(|| self.created_at.clone()),
            read_time_label: read_time_label(self.read_time),
            image_url,
            status: self
                .status
                .as_deref()
                .map(ContentStatus::parse)
                .unwrap_or(ContentStatus::Published),
            story: Some(StoryDetails {
                location: location.clone(),
                author_location: location,
                author_age: None,
                impact: String::new(),
                inspiration: String::new(),
                submitted_at: self.created_at,
            }),
        }
    }
}

/// Bare minutes become "N min read".
fn read_time_label(raw: Option<String>) -> String {
    match non_empty(raw) {
        Some(label) if label.chars().all(|c| c.is_ascii_digit()) => format!("{label} min read"),
        Some(label) => label,
        None => String::new(),
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContributorRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub age: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaRecord {
    #[serde(default)]
    pub url: String,
}

/// An approved community submission.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionRecord {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub contributor: Option<ContributorRecord>,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub media: Vec<MediaRecord>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub impact: Option<String>,
    #[serde(default)]
    pub inspiration: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl ContributionRecord {
    pub fn into_story(self, index: usize) -> ContentItem {
        let contributor = self.contributor.unwrap_or_default();
        let author = if self.is_anonymous {
            Author {
                name: defaults::ANONYMOUS_MEMBER.to_string(),
                bio: defaults::COMMUNITY_MEMBER.to_string(),
                avatar_url: defaults::AUTHOR_IMAGE.to_string(),
            }
        } else {
            Author {
                name: non_empty(contributor.name)
                    .unwrap_or_else(|| defaults::COMMUNITY_MEMBER.to_string()),
                bio: non_empty(contributor.role)
                    .or_else(|| non_empty(contributor.category))
                    .unwrap_or_else(|| defaults::COMMUNITY_MEMBER.to_string()),
                avatar_url: non_empty(contributor.photo_url)
                    .map(|photo| utils::image_url(&photo))
                    .unwrap_or_else(|| defaults::AUTHOR_IMAGE.to_string()),
            }
        };
        let author_age = if self.is_anonymous {
            None
        } else {
            non_empty(contributor.age)
        };
        let location = non_empty(self.location).unwrap_or_else(|| defaults::LOCATION.to_string());
        let image_url = self
            .media
            .into_iter()
            .map(|media| media.url)
            .find(|url| !url.trim().is_empty())
            .unwrap_or_else(|| defaults::STORY_IMAGE.to_string());

        ContentItem {
            id: non_empty(self.id).unwrap_or_else(|| format!("story_{}", index + 1)),
            kind: ContentKind::Story,
            slug: None,
            excerpt: utils::generate_excerpt(&self.description),
            tags: utils::generate_tags(&self.category, &self.description),
            title: self.title,
            body_html: self.description,
            category: self.category,
            author,
            published_at: self.date.clone(),
            read_time_label: String::new(),
            image_url,
            status: self
                .status
                .as_deref()
                .map(ContentStatus::parse)
                .unwrap_or(ContentStatus::Approved),
            story: Some(StoryDetails {
                location: location.clone(),
                author_location: location,
                author_age,
                impact: self.impact.unwrap_or_default(),
                inspiration: self.inspiration.unwrap_or_default(),
                submitted_at: self.created_at.or(self.date),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogsPayload {
    #[serde(default)]
    pub blogs: Vec<BlogRecord>,
}

/// Single-blog responses come either wrapped as `{blog}` or bare.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BlogPayload {
    Wrapped { blog: BlogRecord },
    Bare(BlogRecord),
}

impl BlogPayload {
    pub fn into_record(self) -> BlogRecord {
        match self {
            Self::Wrapped {
                blog,
            } => blog,
            Self::Bare(blog) => blog,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContributionsPayload {
    #[serde(default)]
    pub contributions: Vec<ContributionRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadPayload {
    pub url: String,
}

/// Category/tag metadata: a plain list of names, a list of `{name}` or
/// `{_id}` objects, or either of those wrapped under `key`.
pub fn names_from(value: &Value, key: &str) -> Vec<String> {
    let list = match value {
        Value::Object(map) => map.get(key).and_then(Value::as_array),
        Value::Array(list) => Some(list),
        _ => None,
    };
    list.map(|entries| {
        entries
            .iter()
            .filter_map(|entry| match entry {
                Value::String(name) => Some(name.clone()),
                Value::Object(map) => map
                    .get("name")
                    .or_else(|| map.get("_id"))
                    .and_then(Value::as_str)
                    .map(str::to_string),
                _ => None,
            })
            .collect()
    })
    .unwrap_or_default()
}
