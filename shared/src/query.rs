//! URL query-string state for bookmarkable listings and detail pages.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::models::non_blank;

/// Ordered query parameters. Keys keep their first-seen position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Accepts the string with or without the leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        Self {
            pairs: form_urlencoded::parse(query.as_bytes())
                .map(|(key, value)| (key.into_owned(), value.into_owned()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value.as_str())
    }

    /// `None` or an empty value removes the key.
    pub fn set(&mut self, key: &str, value: Option<&str>) {
        let value = value.filter(|value| !value.is_empty());
        let Some(value) = value else {
            self.pairs.retain(|(candidate, _)| candidate != key);
            return;
        };
        match self.pairs.iter().position(|(candidate, _)| candidate == key) {
            Some(index) => {
                self.pairs[index].1 = value.to_string();
                let mut seen = false;
                self.pairs.retain(|(candidate, _)| {
                    if candidate != key {
                        return true;
                    }
                    let keep = !seen;
                    seen = true;
                    keep
                });
            },
            None => self.pairs.push((key.to_string(), value.to_string())),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encoded form without the leading `?`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

/// `page`, `category` and `search` of a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub page: u32,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            page: 1,
            category: None,
            search: None,
        }
    }
}

impl ListingQuery {
    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            page: params
                .get("page")
                .and_then(|raw| raw.trim().parse::<u32>().ok())
                .filter(|page| *page >= 1)
                .unwrap_or(1),
            category: non_blank(params.get("category").map(str::to_string)),
            search: non_blank(params.get("search").map(str::to_string)),
        }
    }

    /// Page 1 and empty filters are removed rather than written.
    pub fn apply(&self, params: &mut QueryParams) {
        let page = (self.page > 1).then(|| self.page.to_string());
        params.set("page", page.as_deref());
        params.set("category", self.category.as_deref());
        params.set("search", self.search.as_deref());
    }
}

/// `?id=` or `?slug=` of a detail page; also the typed query for router
/// links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl DetailQuery {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            slug: None,
        }
    }

    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            id: params.get("id").map(str::to_string),
            slug: params.get("slug").map(str::to_string),
        }
    }

    /// `id` wins over `slug`; blank values count as missing.
    pub fn identifier(&self) -> Option<&str> {
        self.id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .or_else(|| self.slug.as_deref().map(str::trim).filter(|slug| !slug.is_empty()))
    }
}

/// Access to the current location's query string.
///
/// The browser implementation uses `history.replaceState`, so syncing
/// never adds history entries or reloads the page.
pub trait UrlSync {
    fn query(&self) -> String;
    fn replace_query(&self, query: &str);
}

/// In-memory location for the CLI and tests. Records every write.
#[derive(Debug, Default)]
pub struct MemoryUrl {
    current: RefCell<String>,
    writes: RefCell<Vec<String>>,
}

impl MemoryUrl {
    pub fn new(initial: &str) -> Self {
        Self {
            current: RefCell::new(initial.trim_start_matches('?').to_string()),
            writes: RefCell::new(Vec::new()),
        }
    }

    pub fn current(&self) -> String {
        self.current.borrow().clone()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl UrlSync for MemoryUrl {
    fn query(&self) -> String {
        self.current()
    }

    fn replace_query(&self, query: &str) {
        *self.current.borrow_mut() = query.to_string();
        self.writes.borrow_mut().push(query.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_round_trips_through_params() {
        let mut params = QueryParams::parse("?utm=mail&page=1");
        let listing = ListingQuery {
            page: 3,
            category: Some("Youth".to_string()),
            search: Some("clean water".to_string()),
        };
        listing.apply(&mut params);
        assert_eq!(params.to_query_string(), "utm=mail&page=3&category=Youth&search=clean+water");
        assert_eq!(ListingQuery::from_params(&params), listing);
    }

    #[test]
    fn first_page_and_empty_filters_are_removed() {
        let mut params = QueryParams::parse("page=4&category=Youth&search=x");
        ListingQuery::default().apply(&mut params);
        assert!(params.is_empty());
    }

    #[test]
    fn invalid_page_defaults_to_first() {
        let params = QueryParams::parse("page=zero");
        assert_eq!(ListingQuery::from_params(&params).page, 1);
        let params = QueryParams::parse("page=0");
        assert_eq!(ListingQuery::from_params(&params).page, 1);
    }

    #[test]
    fn detail_identifier_prefers_id() {
        let query = DetailQuery::from_params(&QueryParams::parse("slug=ward-democracy&id=42"));
        assert_eq!(query.identifier(), Some("42"));
        let query = DetailQuery::from_params(&QueryParams::parse("id=&slug=ward-democracy"));
        assert_eq!(query.identifier(), Some("ward-democracy"));
        assert_eq!(DetailQuery::default().identifier(), None);
    }

    #[test]
    fn set_collapses_duplicate_keys() {
        let mut params = QueryParams::parse("tag=a&tag=b&x=1");
        params.set("tag", Some("c"));
        assert_eq!(params.to_query_string(), "tag=c&x=1");
    }
}
