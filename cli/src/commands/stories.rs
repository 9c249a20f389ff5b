use anyhow::{anyhow, Result};
use serde::Serialize;
use wtp_shared::{ApiService, ContentItem, DataOrigin, LoadOutcome, SiteConfig, StoriesViewModel};

use super::print_json;

#[derive(Debug, Serialize)]
struct StoryList {
    origin: DataOrigin,
    featured: Option<ContentItem>,
    stories: Vec<ContentItem>,
}

#[derive(Debug, Serialize)]
struct StoryWithRelated {
    origin: DataOrigin,
    story: ContentItem,
    related: Vec<ContentItem>,
}

async fn load(view_model: &StoriesViewModel) -> Result<()> {
    match view_model.load().await {
        LoadOutcome::Failed => {
            let err = view_model.state().error;
            Err(err.map_or_else(|| anyhow!("stories failed to load"), anyhow::Error::from))
        },
        _ => Ok(()),
    }
}

pub async fn list(
    api: ApiService,
    config: &SiteConfig,
    category: Option<String>,
    search: Option<String>,
) -> Result<()> {
    let view_model = StoriesViewModel::new(api, config);
    load(&view_model).await?;
    view_model.set_category(category);
    view_model.set_search(search);

    let state = view_model.state();
    print_json(&StoryList {
        origin: state.origin,
        featured: state.featured().cloned(),
        stories: state.matching().into_iter().cloned().collect(),
    })
}

pub async fn show(api: ApiService, config: &SiteConfig, id: &str) -> Result<()> {
    let view_model = StoriesViewModel::new(api, config);
    load(&view_model).await?;
    let story = view_model.story(id)?;
    let related = view_model.related(&story);
    print_json(&StoryWithRelated {
        origin: view_model.state().origin,
        story,
        related,
    })
}
