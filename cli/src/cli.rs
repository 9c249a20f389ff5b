//! Argument definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use wtp_shared::{card::CardContext, config::DEFAULT_API_BASE, FallbackPolicy};

/// Card presentation context, as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CardArg {
    Listing,
    Homepage,
    Related,
    Featured,
}

impl From<CardArg> for CardContext {
    fn from(arg: CardArg) -> Self {
        match arg {
            CardArg::Listing => Self::Listing,
            CardArg::Homepage => Self::Homepage,
            CardArg::Related => Self::Related,
            CardArg::Featured => Self::Featured,
        }
    }
}

#[derive(Parser)]
#[command(name = "wtp-cli", version, about = "Community content API client")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// API base URL, e.g. http://localhost:5002/api.
    #[arg(long, global = true, env = "WTP_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,
    /// What to serve when the recent/stories endpoints fail: none | static-sample.
    #[arg(long, global = true, default_value = "static-sample")]
    pub fallback: FallbackPolicy,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// GET /health
    Health,
    /// GET /blogs with paging and filters.
    Blogs {
        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Items per page.
        #[arg(long, default_value_t = 9)]
        limit: u32,
        /// Optional category filter.
        #[arg(long)]
        category: Option<String>,
        /// Optional search term.
        #[arg(long)]
        search: Option<String>,
    },
    /// Fetch one blog post by id or slug.
    Blog(BlogLookup),
    /// Newest published posts (falls back to samples per --fallback).
    Recent {
        #[arg(long, default_value_t = 3)]
        limit: u32,
    },
    /// Same-category posts excluding one id.
    Related {
        #[arg(long)]
        category: String,
        /// Id of the post being viewed.
        #[arg(long)]
        exclude: String,
        #[arg(long, default_value_t = 3)]
        limit: u32,
    },
    /// GET /blogs/categories
    Categories,
    /// GET /blogs/tags
    Tags,
    /// Load community stories the way the stories page does.
    Stories {
        /// Optional category filter applied after loading.
        #[arg(long)]
        category: Option<String>,
        /// Optional search term applied after loading.
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one story and its related stories.
    Story {
        /// Story id.
        id: String,
    },
    /// Render listing results as card views.
    Cards {
        /// Presentation context.
        #[arg(long, value_enum, default_value_t = CardArg::Listing)]
        context: CardArg,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Print the effective client configuration.
    Config,
}

/// Exactly one of `--id` / `--slug`.
#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct BlogLookup {
    #[arg(long)]
    pub id: Option<String>,
    #[arg(long)]
    pub slug: Option<String>,
}
