mod common;

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wtp_shared::{
        messages,
        notification::NotificationKind,
        submission::StorySubmissionForm,
        transport::{FilePart, Method, RequestBody},
        ContentError, DataOrigin, FallbackPolicy, LoadOutcome, StoriesViewModel, ValidationError,
    };

    use crate::common::{api, blog, config, FakeBackend, Reply};

    const CONTRIBUTIONS: &str = "/admin/web/contributions";
    const SUBMIT: &str = "/admin/submit-anonymous";

    fn stories_vm(backend: &std::rc::Rc<FakeBackend>, fallback: FallbackPolicy) -> StoriesViewModel {
        let config = config(fallback);
        StoriesViewModel::new(api(backend, &config), &config)
    }

    fn contribution(id: &str, category: &str, anonymous: bool) -> serde_json::Value {
        json!({
            "_id": id,
            "title": format!("Story {id}"),
            "description": "Our ward finally got clean drinking water after months of petitions.",
            "category": category,
            "isAnonymous": anonymous,
            "contributor": { "name": "Meena Devi", "role": "Teacher", "age": 41 },
            "location": "Gaya, Bihar",
            "media": [{ "url": "" }, { "url": "https://cdn.example.org/well.jpg" }],
            "date": "2025-02-01",
            "status": "Approved"
        })
    }

    #[tokio::test]
    async fn contributions_come_first() {
        let backend = FakeBackend::new();
        backend.get(
            CONTRIBUTIONS,
            Reply::ok(json!({ "success": true, "data": { "contributions": [
                contribution("c1", "Community", false),
                contribution("c2", "Education", true),
            ] } })),
        );
        let vm = stories_vm(&backend, FallbackPolicy::StaticSample);

        assert_eq!(vm.load().await, LoadOutcome::Committed);

        let state = vm.state();
        assert_eq!(state.origin, DataOrigin::Remote);
        assert_eq!(state.stories.len(), 2);
        let named = &state.stories[0];
        assert_eq!(named.author.name, "Meena Devi");
        assert_eq!(named.image_url, "https://cdn.example.org/well.jpg");
        let anonymous = &state.stories[1];
        assert_eq!(anonymous.author.name, "Anonymous Community Member");
        assert_eq!(anonymous.story.as_ref().and_then(|story| story.author_age.clone()), None);

        let query = &backend.queries(CONTRIBUTIONS)[0];
        assert_eq!(query.get("status"), Some("Approved"));
        assert_eq!(query.get("limit"), Some("50"));
        assert_eq!(backend.count("/blogs"), 0);
    }

    #[tokio::test]
    async fn empty_contributions_fall_through_to_story_blogs() {
        let backend = FakeBackend::new();
        backend
            .get(CONTRIBUTIONS, Reply::ok(json!({ "success": true, "data": { "contributions": [] } })))
            .get(
                "/blogs",
                Reply::ok(json!({ "success": true, "data": { "blogs": [
                    blog("b1", "Governance", "2025-01-03"),
                    blog("b2", "Youth", "2025-01-02"),
                    blog("b3", "Community", "2025-01-01"),
                ] } })),
            );
        let vm = stories_vm(&backend, FallbackPolicy::None);

        assert_eq!(vm.load().await, LoadOutcome::Committed);

        let state = vm.state();
        let ids: Vec<_> = state.stories.iter().map(|story| story.id.as_str()).collect();
        assert_eq!(ids, vec!["b2", "b3"]);
        assert_eq!(state.origin, DataOrigin::Remote);
        let query = &backend.queries("/blogs")[0];
        assert_eq!(query.get("status"), Some("published"));
        assert_eq!(query.get("limit"), Some("20"));
        assert_eq!(backend.count("/health"), 0);
    }

    #[tokio::test]
    async fn dead_backend_serves_samples() {
        let backend = FakeBackend::new();
        backend
            .get(CONTRIBUTIONS, Reply::Unreachable)
            .get("/blogs", Reply::Unreachable)
            .get("/health", Reply::Unreachable);
        let vm = stories_vm(&backend, FallbackPolicy::StaticSample);

        assert_eq!(vm.load().await, LoadOutcome::Committed);

        let state = vm.state();
        assert_eq!(state.origin, DataOrigin::Fallback);
        assert_eq!(state.stories.len(), 6);
        assert_eq!(state.featured().map(|story| story.id.as_str()), Some("1"));
        assert!(state.error.is_none());
        assert_eq!(backend.count("/health"), 1);
    }

    #[tokio::test]
    async fn dead_backend_is_an_error_without_fallback() {
        let backend = FakeBackend::new();
        backend.get(CONTRIBUTIONS, Reply::status(500));
        let vm = stories_vm(&backend, FallbackPolicy::None);

        assert_eq!(vm.load().await, LoadOutcome::Failed);

        let state = vm.state();
        assert!(state.stories.is_empty());
        assert!(state.error.is_some());
        assert!(!state.loading);
        assert!(state.notification.is_some_and(|toast| toast.is_error()));
    }

    #[tokio::test]
    async fn empty_but_healthy_backend_shows_nothing_without_fallback() {
        let backend = FakeBackend::new();
        backend
            .get(CONTRIBUTIONS, Reply::ok(json!({ "success": true, "data": { "contributions": [] } })))
            .get("/blogs", Reply::ok(json!({ "success": true, "data": { "blogs": [] } })))
            .get("/health", Reply::ok(json!({ "success": true, "data": { "status": "ok" } })));
        let vm = stories_vm(&backend, FallbackPolicy::None);

        assert_eq!(vm.load().await, LoadOutcome::Committed);
        assert!(vm.state().stories.is_empty());
        assert!(vm.state().error.is_none());
    }

    #[tokio::test]
    async fn filters_and_reveal_work_on_loaded_samples() {
        let backend = FakeBackend::new();
        backend.get(CONTRIBUTIONS, Reply::Unreachable);
        let vm = stories_vm(&backend, FallbackPolicy::StaticSample);
        vm.load().await;

        // featured story is never part of the grid
        assert_eq!(vm.visible().len(), 5);
        assert!(!vm.has_more());
        assert!(!vm.load_more());

        vm.set_category(Some("  Community ".to_string()));
        let ids: Vec<_> = vm.visible().into_iter().map(|story| story.id).collect();
        assert_eq!(ids, vec!["4", "6"]);

        vm.set_category(None);
        vm.set_search(Some("KAVYA".to_string()));
        assert_eq!(vm.visible().len(), 1);

        let story = vm.story("3").expect("sample story");
        assert!(vm.related(&story).iter().all(|related| related.id != "3"));
        assert_eq!(vm.story("missing"), Err(ContentError::NotFound(wtp_shared::ContentKind::Story)));
    }

    fn story_form() -> StorySubmissionForm {
        StorySubmissionForm {
            title: "Solar lamps for night school".to_string(),
            description: "We raised funds for forty solar lamps.".to_string(),
            category: "Education".to_string(),
            name: "Ravi".to_string(),
            email: "ravi@example.org".to_string(),
            ..StorySubmissionForm::default()
        }
    }

    #[tokio::test]
    async fn invalid_story_never_reaches_the_network() {
        let backend = FakeBackend::new();
        let vm = stories_vm(&backend, FallbackPolicy::None);
        let form = StorySubmissionForm {
            title: String::new(),
            ..story_form()
        };

        let err = vm.submit(form, Vec::new()).await.expect_err("validation");

        assert_eq!(
            err,
            ContentError::Validation(ValidationError::MissingFields(vec!["title"]))
        );
        assert!(backend.requests().is_empty());
        let toast = vm.state().notification.expect("toast");
        assert_eq!(toast.message, messages::errors::VALIDATION_FAILED);
    }

    #[tokio::test]
    async fn accepted_story_reloads_and_confirms() {
        let backend = FakeBackend::new();
        backend
            .route(
                Method::Post,
                SUBMIT,
                Reply::ok(json!({ "success": true, "message": "Story received" })),
            )
            .get(
                CONTRIBUTIONS,
                Reply::ok(json!({ "success": true, "data": { "contributions": [
                    contribution("c9", "Education", false),
                ] } })),
            );
        let vm = stories_vm(&backend, FallbackPolicy::None);
        let photo = FilePart {
            field: "upload".to_string(),
            file_name: "lamps.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![0xff, 0xd8],
        };

        let message = vm.submit(story_form(), vec![photo]).await.expect("submitted");

        assert_eq!(message, "Story received");
        let post = backend
            .requests()
            .into_iter()
            .find(|request| request.method == Method::Post)
            .expect("submission request");
        let RequestBody::Multipart(form) = post.body else {
            panic!("story submissions are multipart");
        };
        assert_eq!(form.field("name"), Some("Ravi"));
        assert_eq!(form.files[0].field, "media");

        assert_eq!(backend.count(CONTRIBUTIONS), 1);
        let state = vm.state();
        assert_eq!(state.stories.len(), 1);
        let toast = state.notification.expect("toast");
        assert_eq!(toast.kind, NotificationKind::Success);
    }

    #[tokio::test]
    async fn rejected_story_passes_server_reason_through() {
        let backend = FakeBackend::new();
        backend.route(
            Method::Post,
            SUBMIT,
            Reply::ok(json!({ "success": false, "message": "Duplicate story" })),
        );
        let vm = stories_vm(&backend, FallbackPolicy::None);

        let err = vm.submit(story_form(), Vec::new()).await.expect_err("rejected");

        assert_eq!(err, ContentError::Rejected("Duplicate story".to_string()));
        assert_eq!(
            vm.state().notification.map(|toast| toast.message),
            Some("Duplicate story".to_string())
        );
    }
}
