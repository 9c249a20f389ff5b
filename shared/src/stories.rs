//! Community stories: loading with a source chain, client-side filtering,
//! incremental reveal, detail lookup and submission.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use tracing::{debug, info, warn};

use crate::{
    api::{ApiService, DataOrigin},
    config::{FallbackPolicy, SiteConfig},
    error::ContentError,
    fallback, messages,
    models::{non_blank, ContentItem, ContentKind},
    notification::{Notification, NotificationKind},
    scheduler::{RenderScheduler, Subscription},
    sequence::{Operation, RequestSequencer},
    submission::{self, StorySubmissionForm},
    transport::FilePart,
    view_model::LoadOutcome,
};

const CONTRIBUTION_STATUS: &str = "Approved";
const CONTRIBUTION_LIMIT: u32 = 50;
const STORY_BLOG_LIMIT: u32 = 20;
const RELATED_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct StoriesState {
    /// All loaded stories; the first one is featured.
    pub stories: Vec<ContentItem>,
    pub loading: bool,
    pub error: Option<ContentError>,
    pub notification: Option<Notification>,
    pub origin: DataOrigin,
    /// Lower-cased category filter.
    pub category: Option<String>,
    /// Lower-cased search term.
    pub search: Option<String>,
    /// Number of revealed grid pages, starting at 1.
    pub page: usize,
    pub per_page: usize,
}

impl StoriesState {
    pub fn new(per_page: usize) -> Self {
        Self {
            stories: Vec::new(),
            loading: false,
            error: None,
            notification: None,
            origin: DataOrigin::Remote,
            category: None,
            search: None,
            page: 1,
            per_page: per_page.max(1),
        }
    }

    pub fn featured(&self) -> Option<&ContentItem> {
        self.stories.first()
    }

    /// Grid candidates: everything but the featured story, narrowed by the
    /// category (substring) and search (title, excerpt, author, category).
    pub fn matching(&self) -> Vec<&ContentItem> {
        self.stories
            .iter()
            .skip(1)
            .filter(|story| {
                self.category
                    .as_deref()
                    .map_or(true, |category| story.category.to_lowercase().contains(category))
            })
            .filter(|story| {
                self.search.as_deref().map_or(true, |term| {
                    [&story.title, &story.excerpt, &story.author.name, &story.category]
                        .iter()
                        .any(|field| field.to_lowercase().contains(term))
                })
            })
            .collect()
    }

    /// The first `page × per_page` matches.
    pub fn visible(&self) -> Vec<ContentItem> {
        self.matching()
            .into_iter()
            .take(self.page * self.per_page)
            .cloned()
            .collect()
    }

    pub fn has_more(&self) -> bool {
        self.matching().len() > self.page * self.per_page
    }

    pub fn story(&self, id: &str) -> Result<ContentItem, ContentError> {
        self.stories
            .iter()
            .find(|story| story.id == id)
            .cloned()
            .ok_or(ContentError::NotFound(ContentKind::Story))
    }

    /// Same category or at least one shared tag, never the story itself.
    pub fn related(&self, story: &ContentItem) -> Vec<ContentItem> {
        self.stories
            .iter()
            .filter(|candidate| candidate.id != story.id)
            .filter(|candidate| candidate.category == story.category || candidate.shares_tag_with(story))
            .take(RELATED_LIMIT)
            .cloned()
            .collect()
    }
}

pub struct StoriesViewModel {
    api: ApiService,
    fallback: FallbackPolicy,
    state: RefCell<StoriesState>,
    sequencer: RequestSequencer,
    scheduler: Rc<RenderScheduler<StoriesState>>,
    notification_seq: Cell<u64>,
}

impl StoriesViewModel {
    pub fn new(api: ApiService, config: &SiteConfig) -> Self {
        Self {
            api,
            fallback: config.stories_fallback,
            state: RefCell::new(StoriesState::new(config.stories_per_page)),
            sequencer: RequestSequencer::new(),
            scheduler: RenderScheduler::new(),
            notification_seq: Cell::new(0),
        }
    }

    pub fn state(&self) -> StoriesState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self, listener: impl Fn(&StoriesState) + 'static) -> Subscription {
        self.scheduler.subscribe(listener)
    }

    fn update(&self, change: impl FnOnce(&mut StoriesState)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            change(&mut state);
            state.page = state.page.max(1);
            state.clone()
        };
        debug!(stories = snapshot.stories.len(), page = snapshot.page, "stories state committed");
        self.scheduler.request(snapshot);
    }

    fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        let id = self.notification_seq.get() + 1;
        self.notification_seq.set(id);
        let notification = Notification::new(id, kind, message);
        self.update(|state| state.notification = Some(notification));
    }

    pub fn dismiss_notification(&self) {
        self.update(|state| state.notification = None);
    }

    /// Load stories from the first source that has any:
    /// approved contributions, then story-category blogs. When neither
    /// yields anything the fallback policy decides between the sample
    /// stories and an error.
    pub async fn load(&self) -> LoadOutcome {
        let ticket = self.sequencer.issue(Operation::Stories);
        self.update(|state| {
            state.loading = true;
            state.error = None;
        });

        let result = self.fetch_chain().await;
        if !self.sequencer.is_current(ticket) {
            debug!(seq = ticket.seq, "discarding stale stories response");
            return LoadOutcome::Stale;
        }

        let (stories, origin) = match result {
            Ok(stories) if !stories.is_empty() => (stories, DataOrigin::Remote),
            outcome => match self.fallback {
                FallbackPolicy::StaticSample => {
                    warn!("using sample stories as fallback");
                    (fallback::sample_stories(), DataOrigin::Fallback)
                },
                FallbackPolicy::None => match outcome {
                    Ok(stories) => (stories, DataOrigin::Remote),
                    Err(err) => {
                        let message = err.user_message();
                        let id = self.notification_seq.get() + 1;
                        self.notification_seq.set(id);
                        self.update(|state| {
                            state.loading = false;
                            state.stories.clear();
                            state.error = Some(err);
                            state.notification =
                                Some(Notification::new(id, NotificationKind::Error, message));
                        });
                        return LoadOutcome::Failed;
                    },
                },
            },
        };

        info!(count = stories.len(), origin = ?origin, "stories loaded");
        self.update(|state| {
            state.stories = stories;
            state.origin = origin;
            state.loading = false;
            state.page = 1;
        });
        LoadOutcome::Committed
    }

    /// `Ok(empty)` means every source answered but had nothing; `Err`
    /// carries the last failure when nothing could be loaded.
    async fn fetch_chain(&self) -> Result<Vec<ContentItem>, ContentError> {
        let mut last_error = None;

        match self
            .api
            .get_contributions(CONTRIBUTION_STATUS, CONTRIBUTION_LIMIT)
            .await
        {
            Ok(response) => {
                let stories = public_only(response.data);
                if !stories.is_empty() {
                    info!(count = stories.len(), "stories from contributions");
                    return Ok(stories);
                }
            },
            Err(err) => last_error = Some(err),
        }

        match self.api.get_story_blogs(STORY_BLOG_LIMIT).await {
            Ok(response) => {
                let stories = public_only(response.data);
                if !stories.is_empty() {
                    info!(count = stories.len(), "stories from blogs");
                    return Ok(stories);
                }
            },
            Err(err) => last_error = Some(err),
        }

        if let Err(err) = self.api.health().await {
            warn!(error = %err, "backend server is not available");
            last_error = Some(err);
        }

        match last_error {
            Some(err) => Err(err),
            None => Ok(Vec::new()),
        }
    }

    pub fn set_category(&self, category: Option<String>) {
        let category = non_blank(category).map(|category| category.to_lowercase());
        self.update(|state| {
            state.category = category;
            state.page = 1;
        });
    }

    pub fn set_search(&self, search: Option<String>) {
        let search = non_blank(search).map(|search| search.to_lowercase());
        self.update(|state| {
            state.search = search;
            state.page = 1;
        });
    }

    /// Reveal one more grid page. Returns `false` when everything is
    /// already visible.
    pub fn load_more(&self) -> bool {
        if !self.state.borrow().has_more() {
            return false;
        }
        self.update(|state| state.page += 1);
        true
    }

    pub fn visible(&self) -> Vec<ContentItem> {
        self.state.borrow().visible()
    }

    pub fn has_more(&self) -> bool {
        self.state.borrow().has_more()
    }

    pub fn story(&self, id: &str) -> Result<ContentItem, ContentError> {
        self.state.borrow().story(id)
    }

    pub fn related(&self, story: &ContentItem) -> Vec<ContentItem> {
        self.state.borrow().related(story)
    }

    /// Post a story with its media, then reload so an auto-approved story
    /// shows up. Returns the confirmation text.
    pub async fn submit(
        &self,
        form: StorySubmissionForm,
        media: Vec<FilePart>,
    ) -> Result<String, ContentError> {
        let multipart = match form.into_multipart(media) {
            Ok(multipart) => multipart,
            Err(err) => {
                let err = ContentError::from(err);
                self.notify(NotificationKind::Error, submission::story_failure_message(&err));
                return Err(err);
            },
        };

        match self.api.submit_anonymous_story(multipart).await {
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| messages::success::STORY_SUBMITTED.to_string());
                self.load().await;
                self.notify(NotificationKind::Success, message.clone());
                Ok(message)
            },
            Err(err) => {
                self.notify(NotificationKind::Error, submission::story_failure_message(&err));
                Err(err)
            },
        }
    }
}

fn public_only(items: Vec<ContentItem>) -> Vec<ContentItem> {
    items.into_iter().filter(ContentItem::is_public).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> StoriesState {
        let mut state = StoriesState::new(2);
        state.stories = fallback::sample_stories();
        state
    }

    #[test]
    fn grid_excludes_featured_and_reveals_by_page() {
        let mut state = loaded();
        assert_eq!(state.featured().map(|s| s.id.as_str()), Some("1"));
        let ids: Vec<_> = state.visible().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["2", "3"]);
        assert!(state.has_more());
        state.page = 3;
        assert_eq!(state.visible().len(), 5);
        assert!(!state.has_more());
    }

    #[test]
    fn category_and_search_are_case_insensitive() {
        let mut state = loaded();
        state.category = Some("community".to_string());
        let ids: Vec<_> = state.matching().iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, vec!["4", "6"]);
        state.category = None;
        state.search = Some("kavya".to_string());
        assert_eq!(state.matching().len(), 1);
    }

    #[test]
    fn related_shares_category_or_tag() {
        let state = loaded();
        let rekha = state.story("6").unwrap();
        let related: Vec<_> = state.related(&rekha).into_iter().map(|s| s.id).collect();
        // Priya shares "women empowerment", Amit shares the category.
        assert_eq!(related, vec!["1", "4"]);
        assert_eq!(state.story("99"), Err(ContentError::NotFound(ContentKind::Story)));
    }
}
