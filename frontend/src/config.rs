//! Build-time settings for the browser app.

use wtp_shared::{config::DEFAULT_API_BASE, FallbackPolicy, SiteConfig};

// API base URL - 编译时从环境变量读取，默认本地开发地址
pub const API_BASE: &str = match option_env!("WTP_API_BASE") {
    Some(url) => url,
    None => DEFAULT_API_BASE,
};

/// `none` disables the sample items shown when the backend is down.
const RECENT_FALLBACK: Option<&str> = option_env!("WTP_RECENT_FALLBACK");

pub fn site_config() -> SiteConfig {
    let policy = RECENT_FALLBACK
        .and_then(|raw| raw.parse::<FallbackPolicy>().ok())
        .unwrap_or_default();
    SiteConfig {
        recent_fallback: policy,
        stories_fallback: policy,
        ..SiteConfig::default().with_api_base(API_BASE)
    }
}
