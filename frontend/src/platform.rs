//! Browser implementations of the timer and URL seams.

use std::time::Duration;

use async_trait::async_trait;
use gloo_timers::future::sleep;
use wasm_bindgen::JsValue;
use wtp_shared::{debounce::Sleeper, query::UrlSync};

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooSleeper;

#[async_trait(?Send)]
impl Sleeper for GlooSleeper {
    async fn sleep(&self, duration: Duration) {
        sleep(duration).await;
    }
}

/// Query string of `window.location`, rewritten with
/// `history.replaceState` so filters never add history entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserUrl;

impl UrlSync for BrowserUrl {
    fn query(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default()
    }

    fn replace_query(&self, query: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let path = window.location().pathname().unwrap_or_default();
        let target = if query.is_empty() {
            path
        } else {
            format!("{path}?{query}")
        };
        if let Ok(history) = window.history() {
            if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(&target)) {
                web_sys::console::warn_1(&format!("URL sync failed: {err:?}").into());
            }
        }
    }
}
