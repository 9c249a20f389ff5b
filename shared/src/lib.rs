//! Content client core for the community site.
//!
//! Everything here is platform neutral so the browser app and the
//! diagnostic CLI drive the same API service, view-models and card
//! mapping. The only native-only piece is the `reqwest` transport.

pub mod api;
pub mod card;
pub mod config;
pub mod debounce;
pub mod error;
pub mod fallback;
pub mod messages;
pub mod models;
pub mod notification;
pub mod query;
pub mod scheduler;
pub mod sequence;
pub mod stories;
pub mod submission;
pub mod transport;
pub mod utils;
pub mod view_model;
pub mod wire;

pub use api::{ApiResponse, ApiResult, ApiService, BlogQuery, DataOrigin};
pub use config::{FallbackPolicy, SiteConfig};
pub use error::{ContentError, ValidationError};
pub use models::{Author, ContentItem, ContentKind, ContentStatus, Filters, Pagination, StoryDetails};
pub use stories::{StoriesState, StoriesViewModel};
pub use view_model::{ContentViewModel, LoadOutcome, PageState};
