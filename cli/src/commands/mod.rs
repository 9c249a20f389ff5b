//! Subcommand execution. Every command prints one JSON document on stdout.

pub mod content;
pub mod stories;

use std::rc::Rc;

use anyhow::Result;
use serde::Serialize;
use wtp_shared::{transport::ReqwestTransport, ApiService, SiteConfig};

use crate::cli::{Cli, Commands, GlobalArgs};

/// Client settings derived from the global flags.
pub fn site_config(global: &GlobalArgs) -> SiteConfig {
    SiteConfig {
        recent_fallback: global.fallback,
        stories_fallback: global.fallback,
        ..SiteConfig::default()
    }
    .with_api_base(global.api_base.as_str())
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = site_config(&cli.global);
    let api = ApiService::from_config(&config, Rc::new(ReqwestTransport::new()));
    tracing::debug!(base = api.base_url(), "using content API");

    match cli.command {
        Commands::Health => content::health(&api).await,
        Commands::Blogs {
            page,
            limit,
            category,
            search,
        } => content::blogs(&api, page, limit, category, search).await,
        Commands::Blog(lookup) => content::blog(&api, lookup).await,
        Commands::Recent {
            limit,
        } => content::recent(&api, limit).await,
        Commands::Related {
            category,
            exclude,
            limit,
        } => content::related(&api, &category, &exclude, limit).await,
        Commands::Categories => content::categories(&api).await,
        Commands::Tags => content::tags(&api).await,
        Commands::Cards {
            context,
            page,
        } => content::cards(&api, &config, context.into(), page).await,
        Commands::Stories {
            category,
            search,
        } => stories::list(api, &config, category, search).await,
        Commands::Story {
            id,
        } => stories::show(api, &config, &id).await,
        Commands::Config => print_json(&config),
    }
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
