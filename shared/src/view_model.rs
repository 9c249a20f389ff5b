//! Page state for the blog listing, blog detail and homepage views.
//!
//! [`ContentViewModel`] mediates every fetch: it marks the state as
//! loading, calls [`ApiService`], drops responses that a newer request of
//! the same kind has superseded, commits the result through a single
//! setter, and hands a snapshot to the render scheduler.
//!
//! Single-threaded by construction. State lives in a `RefCell` and no
//! borrow is held across an `.await`.

use std::{
    cell::{Cell, RefCell},
    collections::HashSet,
    rc::Rc,
};

use tracing::{debug, info, warn};

use crate::{
    api::{ApiService, BlogQuery, DataOrigin},
    config::SiteConfig,
    debounce::{Debouncer, Sleeper},
    error::ContentError,
    messages,
    models::{ContentItem, ContentKind, Filters, Pagination},
    notification::{Notification, NotificationKind},
    query::{DetailQuery, ListingQuery, QueryParams, UrlSync},
    scheduler::{RenderScheduler, Subscription},
    sequence::{Operation, RequestSequencer},
    wire::WirePagination,
};

#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub items: Vec<ContentItem>,
    /// Lead item of a fresh first-page listing.
    pub featured: Option<ContentItem>,
    pub current_detail: Option<ContentItem>,
    pub related: Vec<ContentItem>,
    pub loading: bool,
    pub error: Option<ContentError>,
    pub notification: Option<Notification>,
    pub origin: DataOrigin,
    pub pagination: Pagination,
    pub filters: Filters,
}

impl PageState {
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            featured: None,
            current_detail: None,
            related: Vec::new(),
            loading: false,
            error: None,
            notification: None,
            origin: DataOrigin::Remote,
            pagination: Pagination::first(page_size),
            filters: Filters::default(),
        }
    }

    pub fn has_more(&self) -> bool {
        self.pagination.has_next()
    }
}

/// What happened to one view-model operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The response was applied to the state.
    Committed,
    /// The request failed; `error` and a notification were set.
    Failed,
    /// A newer request of the same kind was issued meanwhile; the
    /// response was dropped without touching state.
    Stale,
    /// A newer debounced call replaced this one before it fired.
    Superseded,
    /// Nothing to do (no next page, related items already loaded, ...).
    Skipped,
}

pub struct ContentViewModel {
    api: ApiService,
    config: SiteConfig,
    url: Rc<dyn UrlSync>,
    sleeper: Rc<dyn Sleeper>,
    state: RefCell<PageState>,
    sequencer: RequestSequencer,
    search_debouncer: Debouncer,
    scheduler: Rc<RenderScheduler<PageState>>,
    related_loaded_for: RefCell<Option<String>>,
    notification_seq: Cell<u64>,
}

impl ContentViewModel {
    pub fn new(
        api: ApiService,
        config: SiteConfig,
        url: Rc<dyn UrlSync>,
        sleeper: Rc<dyn Sleeper>,
    ) -> Self {
        Self {
            state: RefCell::new(PageState::new(config.page_size)),
            search_debouncer: Debouncer::new(config.search_debounce()),
            api,
            config,
            url,
            sleeper,
            sequencer: RequestSequencer::new(),
            scheduler: RenderScheduler::new(),
            related_loaded_for: RefCell::new(None),
            notification_seq: Cell::new(0),
        }
    }

    pub fn api(&self) -> &ApiService {
        &self.api
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn state(&self) -> PageState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self, listener: impl Fn(&PageState) + 'static) -> Subscription {
        self.scheduler.subscribe(listener)
    }

    /// Completed render passes, for diagnostics.
    pub fn render_passes(&self) -> u64 {
        self.scheduler.passes()
    }

    /// The one place state changes. Restores the pagination invariant and
    /// schedules a render with the committed snapshot.
    fn update(&self, change: impl FnOnce(&mut PageState)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            change(&mut state);
            state.pagination = state.pagination.clamped();
            state.clone()
        };
        debug!(
            items = snapshot.items.len(),
            page = snapshot.pagination.page,
            loading = snapshot.loading,
            "page state committed"
        );
        self.scheduler.request(snapshot);
    }

    fn next_notification(&self, kind: NotificationKind, message: impl Into<String>) -> Notification {
        let id = self.notification_seq.get() + 1;
        self.notification_seq.set(id);
        Notification::new(id, kind, message)
    }

    /// Raise a toast from outside a fetch (form results, subscriptions).
    pub fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        let notification = self.next_notification(kind, message);
        self.update(|state| state.notification = Some(notification));
    }

    pub fn dismiss_notification(&self) {
        self.update(|state| state.notification = None);
    }

    fn begin_loading(&self) {
        self.update(|state| {
            state.loading = true;
            state.error = None;
        });
    }

    fn fail(&self, err: ContentError, message: String, clear_featured: bool) {
        let notification = self.next_notification(NotificationKind::Error, message);
        self.update(|state| {
            state.loading = false;
            state.error = Some(err);
            state.notification = Some(notification);
            if clear_featured {
                state.featured = None;
            }
        });
    }

    fn write_listing_url(&self, listing: &ListingQuery) {
        let mut params = QueryParams::parse(&self.url.query());
        listing.apply(&mut params);
        self.url.replace_query(&params.to_query_string());
    }

    pub async fn load_page(
        &self,
        page: u32,
        category: Option<String>,
        search: Option<String>,
        append: bool,
    ) -> LoadOutcome {
        let page = page.max(1);
        let filters = Filters::new(category, search);
        let fresh_first_page = page == 1 && !append;
        let ticket = self.sequencer.issue(Operation::Listing);
        self.begin_loading();
        info!(page, append, category = ?filters.category, search = ?filters.search, "loading blogs");

        let query = BlogQuery::published()
            .page(page)
            .limit(self.config.page_size)
            .category(filters.category.clone())
            .search(filters.search.clone());
        let result = self.api.get_blogs(&query).await;

        if !self.sequencer.is_current(ticket) {
            debug!(seq = ticket.seq, "discarding stale listing response");
            return LoadOutcome::Stale;
        }

        match result {
            Ok(response) => {
                let fetched: Vec<ContentItem> =
                    response.data.into_iter().filter(ContentItem::is_public).collect();
                let page_size = self.config.page_size;
                self.update(|state| {
                    if append {
                        let mut seen: HashSet<String> =
                            state.items.iter().map(|item| item.id.clone()).collect();
                        state
                            .items
                            .extend(fetched.into_iter().filter(|item| seen.insert(item.id.clone())));
                    } else {
                        state.items = fetched;
                    }
                    state.pagination =
                        pagination_from(response.pagination, page, page_size, state.items.len());
                    state.filters = filters.clone();
                    state.origin = response.origin;
                    state.loading = false;
                    if fresh_first_page {
                        state.featured = state.items.first().cloned();
                    }
                });
                self.write_listing_url(&ListingQuery {
                    page,
                    category: filters.category,
                    search: filters.search,
                });
                LoadOutcome::Committed
            },
            Err(err) => {
                let message = err.user_message();
                self.fail(err, message, fresh_first_page);
                LoadOutcome::Failed
            },
        }
    }

    /// Load the listing described by the current URL.
    pub async fn restore_from_url(&self) -> LoadOutcome {
        let listing = ListingQuery::from_params(&QueryParams::parse(&self.url.query()));
        self.load_page(listing.page, listing.category, listing.search, false)
            .await
    }

    /// Debounced search within the current category.
    pub async fn search(&self, term: &str) -> LoadOutcome {
        if !self.search_debouncer.settle(self.sleeper.as_ref()).await {
            return LoadOutcome::Superseded;
        }
        let category = self.state.borrow().filters.category.clone();
        self.load_page(1, category, Some(term.to_string()), false)
            .await
    }

    pub async fn filter_by_category(&self, category: Option<String>) -> LoadOutcome {
        let search = self.state.borrow().filters.search.clone();
        self.load_page(1, category, search, false).await
    }

    /// Append the next page. Does nothing on the last page.
    pub async fn load_more(&self) -> LoadOutcome {
        let (next_page, filters) = {
            let state = self.state.borrow();
            (state.pagination.next_page(), state.filters.clone())
        };
        match next_page {
            Some(page) => {
                self.load_page(page, filters.category, filters.search, true)
                    .await
            },
            None => LoadOutcome::Skipped,
        }
    }

    /// Homepage strip. Sample items may stand in, see
    /// [`ApiService::get_recent_blogs`]; `origin` tells them apart.
    pub async fn load_recent(&self) -> LoadOutcome {
        let ticket = self.sequencer.issue(Operation::Recent);
        self.begin_loading();
        let result = self.api.get_recent_blogs(self.config.recent_limit).await;
        if !self.sequencer.is_current(ticket) {
            debug!(seq = ticket.seq, "discarding stale recent response");
            return LoadOutcome::Stale;
        }
        match result {
            Ok(response) => {
                if response.origin == DataOrigin::Fallback {
                    warn!("showing sample recent items");
                }
                let limit = self.config.recent_limit as usize;
                self.update(|state| {
                    state.items = response
                        .data
                        .into_iter()
                        .filter(ContentItem::is_public)
                        .take(limit)
                        .collect();
                    state.origin = response.origin;
                    state.loading = false;
                });
                LoadOutcome::Committed
            },
            Err(err) => {
                let message = err.user_message();
                self.fail(err, message, false);
                LoadOutcome::Failed
            },
        }
    }

    /// Load the detail named by `?id=` / `?slug=` in the current URL.
    pub async fn load_detail(&self) -> LoadOutcome {
        let query = DetailQuery::from_params(&QueryParams::parse(&self.url.query()));
        self.load_detail_for(&query).await
    }

    pub async fn load_detail_for(&self, query: &DetailQuery) -> LoadOutcome {
        // A new detail supersedes any detail or related fetch still in flight.
        let ticket = self.sequencer.issue(Operation::Detail);
        self.sequencer.issue(Operation::Related);
        *self.related_loaded_for.borrow_mut() = None;

        let Some(identifier) = query.identifier().map(str::to_string) else {
            self.update(|state| {
                state.current_detail = None;
                state.related.clear();
            });
            self.fail(
                ContentError::NotFound(ContentKind::Blog),
                messages::errors::BLOG_NOT_FOUND.to_string(),
                false,
            );
            return LoadOutcome::Failed;
        };

        self.begin_loading();
        self.update(|state| state.related.clear());
        info!(identifier = %identifier, "loading blog detail");

        let by_id = query.id.as_deref().is_some_and(|id| !id.trim().is_empty());
        let result = if by_id {
            self.api.get_blog_by_id(&identifier).await
        } else {
            self.api.get_blog_by_slug(&identifier).await
        };
        if !self.sequencer.is_current(ticket) {
            debug!(seq = ticket.seq, "discarding stale detail response");
            return LoadOutcome::Stale;
        }

        let result = result.and_then(|response| {
            if response.data.is_public() {
                Ok(response)
            } else {
                Err(ContentError::NotFound(ContentKind::Blog))
            }
        });
        match result {
            Ok(response) => {
                self.update(|state| {
                    state.current_detail = Some(response.data);
                    state.origin = response.origin;
                    state.loading = false;
                });
                self.load_related().await;
                LoadOutcome::Committed
            },
            Err(err) => {
                let message = if err.is_not_found() {
                    messages::errors::BLOG_NOT_FOUND.to_string()
                } else {
                    err.user_message()
                };
                self.update(|state| state.current_detail = None);
                self.fail(err, message, false);
                LoadOutcome::Failed
            },
        }
    }

    /// Same-category items for the current detail. Runs at most once per
    /// loaded detail.
    pub async fn load_related(&self) -> LoadOutcome {
        let Some(detail) = self.state.borrow().current_detail.clone() else {
            return LoadOutcome::Skipped;
        };
        {
            let mut loaded_for = self.related_loaded_for.borrow_mut();
            if loaded_for.as_deref() == Some(detail.id.as_str()) {
                return LoadOutcome::Skipped;
            }
            *loaded_for = Some(detail.id.clone());
        }

        let ticket = self.sequencer.issue(Operation::Related);
        let limit = self.config.related_limit;
        let result = self
            .api
            .get_related_blogs(&detail.category, &detail.id, limit)
            .await;
        if !self.sequencer.is_current(ticket) {
            debug!(seq = ticket.seq, "discarding stale related response");
            return LoadOutcome::Stale;
        }

        match result {
            Ok(response) => {
                let related: Vec<ContentItem> = response
                    .data
                    .into_iter()
                    .filter(|item| item.is_public() && item.id != detail.id)
                    .take(limit as usize)
                    .collect();
                self.update(|state| state.related = related);
                LoadOutcome::Committed
            },
            Err(err) => {
                // The detail itself is on screen; an empty related strip is enough.
                warn!(error = %err, "related blogs unavailable");
                self.update(|state| state.related.clear());
                LoadOutcome::Failed
            },
        }
    }
}

/// `page` always echoes the request; `total_pages` never drops below it.
/// Without server pagination the loaded page is treated as the last one.
fn pagination_from(
    wire: Option<WirePagination>,
    requested: u32,
    page_size: u32,
    loaded: usize,
) -> Pagination {
    match wire {
        Some(wire) => Pagination {
            page: requested,
            total_pages: wire.pages.max(requested).max(1),
            total_count: wire.total,
            page_size: if wire.limit > 0 { wire.limit } else { page_size },
        },
        None => Pagination {
            page: requested,
            total_pages: requested,
            total_count: loaded as u64,
            page_size,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_echoes_requested_page() {
        let wire = WirePagination {
            current: 1,
            pages: 4,
            total: 31,
            limit: 9,
        };
        let pagination = pagination_from(Some(wire), 2, 9, 9);
        assert_eq!(pagination.page, 2);
        assert_eq!(pagination.total_pages, 4);
        assert_eq!(pagination.next_page(), Some(3));
    }

    #[test]
    fn missing_pagination_means_last_page() {
        let pagination = pagination_from(None, 1, 9, 5);
        assert!(!pagination.has_next());
        assert_eq!(pagination.total_count, 5);
    }

    #[test]
    fn fresh_state_is_first_page() {
        let state = PageState::new(9);
        assert_eq!(state.pagination.page, 1);
        assert!(!state.has_more());
        assert_eq!(state.origin, DataOrigin::Remote);
    }
}
