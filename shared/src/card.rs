//! Pure mapping from a [`ContentItem`] to what a card shows.

use serde::Serialize;

use crate::{
    config::{category_style, defaults},
    models::{Author, ContentItem, ContentKind},
    utils,
};

/// Where a card is rendered. Only affects presentation details such as
/// excerpt length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardContext {
    Listing,
    Homepage,
    Related,
    Featured,
}

impl CardContext {
    fn excerpt_limit(self) -> Option<usize> {
        match self {
            Self::Related => Some(100),
            Self::Listing | Self::Homepage => Some(150),
            Self::Featured => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: String,
    pub kind: ContentKind,
    pub context: CardContext,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub category_class: &'static str,
    pub href: String,
    pub date_label: String,
    pub read_time_label: String,
    pub image_url: String,
    /// Shown when `image_url` fails to load.
    pub fallback_image: &'static str,
    pub author_name: String,
    pub author_bio: String,
    pub author_avatar: String,
    pub location: Option<String>,
    pub tags: Vec<String>,
}

impl CardView {
    pub fn build(item: &ContentItem, context: CardContext) -> Self {
        let fallback_image = match item.kind {
            ContentKind::Blog => defaults::BLOG_IMAGE,
            ContentKind::Story => defaults::STORY_IMAGE,
        };
        let image_url = if item.image_url.trim().is_empty() {
            fallback_image.to_string()
        } else {
            item.image_url.clone()
        };
        let excerpt = match context.excerpt_limit() {
            Some(limit) => utils::truncate_text(&item.excerpt, limit),
            None => item.excerpt.clone(),
        };

        Self {
            id: item.id.clone(),
            kind: item.kind,
            context,
            title: item.title.clone(),
            excerpt,
            category: item.category.clone(),
            category_class: category_style(&item.category).class,
            href: detail_href(item.kind, &item.id),
            date_label: item.date_label(),
            read_time_label: item.read_time_label.clone(),
            image_url,
            fallback_image,
            author_name: item.author.name.clone(),
            author_bio: item.author.bio.clone(),
            author_avatar: author_avatar(&item.author),
            location: item.story.as_ref().map(|story| story.location.clone()),
            tags: item.tags.clone(),
        }
    }
}

pub fn detail_href(kind: ContentKind, id: &str) -> String {
    let path = match kind {
        ContentKind::Blog => "/blog-details",
        ContentKind::Story => "/story-details",
    };
    format!("{path}?id={}", urlencoding::encode(id))
}

/// Posts by the site administrator always show the movement portrait.
pub fn author_avatar(author: &Author) -> String {
    if author.name == defaults::ADMIN_AUTHOR_NAME {
        return utils::image_url(defaults::ADMIN_AVATAR);
    }
    if author.avatar_url.trim().is_empty() {
        defaults::AUTHOR_IMAGE.to_string()
    } else {
        author.avatar_url.clone()
    }
}
