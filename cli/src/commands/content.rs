use anyhow::{bail, Context, Result};
use serde::Serialize;
use wtp_shared::{
    card::{CardContext, CardView},
    wire::WirePagination,
    ApiResponse, ApiService, BlogQuery, DataOrigin, SiteConfig,
};

use super::print_json;
use crate::cli::BlogLookup;

/// JSON shape printed for every successful call.
#[derive(Debug, Serialize)]
pub struct Output<T> {
    pub origin: DataOrigin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<WirePagination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> From<ApiResponse<T>> for Output<T> {
    fn from(response: ApiResponse<T>) -> Self {
        Self {
            origin: response.origin,
            pagination: response.pagination,
            message: response.message,
            data: response.data,
        }
    }
}

fn print_response<T: Serialize>(response: ApiResponse<T>) -> Result<()> {
    if response.origin == DataOrigin::Fallback {
        tracing::warn!("backend unavailable, printing bundled sample data");
    }
    print_json(&Output::from(response))
}

pub async fn health(api: &ApiService) -> Result<()> {
    let response = api.health().await.context("health check failed")?;
    print_response(response)
}

pub async fn blogs(
    api: &ApiService,
    page: u32,
    limit: u32,
    category: Option<String>,
    search: Option<String>,
) -> Result<()> {
    if page == 0 {
        bail!("--page is 1-based");
    }
    let query = BlogQuery::published()
        .page(page)
        .limit(limit)
        .category(category)
        .search(search);
    print_response(api.get_blogs(&query).await?)
}

pub async fn blog(api: &ApiService, lookup: BlogLookup) -> Result<()> {
    let response = match (lookup.id.as_deref(), lookup.slug.as_deref()) {
        (Some(id), _) => api.get_blog_by_id(id).await?,
        (None, Some(slug)) => api.get_blog_by_slug(slug).await?,
        (None, None) => bail!("either --id or --slug is required"),
    };
    print_response(response)
}

pub async fn recent(api: &ApiService, limit: u32) -> Result<()> {
    print_response(api.get_recent_blogs(limit).await?)
}

pub async fn related(api: &ApiService, category: &str, exclude: &str, limit: u32) -> Result<()> {
    print_response(api.get_related_blogs(category, exclude, limit).await?)
}

pub async fn categories(api: &ApiService) -> Result<()> {
    print_response(api.get_blog_categories().await?)
}

pub async fn tags(api: &ApiService) -> Result<()> {
    print_response(api.get_blog_tags().await?)
}

pub async fn cards(api: &ApiService, config: &SiteConfig, context: CardContext, page: u32) -> Result<()> {
    let query = BlogQuery::published().page(page.max(1)).limit(config.page_size);
    let response = api.get_blogs(&query).await?;
    print_response(response.map(|items| {
        items
            .iter()
            .map(|item| CardView::build(item, context))
            .collect::<Vec<_>>()
    }))
}
