mod common;

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wtp_shared::{
        messages,
        submission::{submit_blog, BlogSubmissionForm},
        transport::{FilePart, Method, RequestBody},
        ContentError, FallbackPolicy, ValidationError,
    };

    use crate::common::{api, config, FakeBackend, Reply};

    fn form() -> BlogSubmissionForm {
        BlogSubmissionForm {
            author_name: "Sanjay Kumar".to_string(),
            author_email: "sanjay@example.org".to_string(),
            author_bio: "Panchayat volunteer".to_string(),
            blog_title: "Ward sabhas that work".to_string(),
            blog_category: "Governance".to_string(),
            read_time: "6 min read".to_string(),
            blog_summary: "How three wards run open meetings.".to_string(),
            blog_content: "<p>It started with a notice board.</p>".to_string(),
            tags: "governance, wards".to_string(),
        }
    }

    fn cover() -> FilePart {
        FilePart {
            field: "cover".to_string(),
            file_name: "sabha.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
        }
    }

    fn submitted_json(backend: &FakeBackend) -> serde_json::Value {
        let request = backend
            .requests()
            .into_iter()
            .find(|request| request.method == Method::Post && request.url.ends_with("/submissions"))
            .expect("submission request");
        match request.body {
            RequestBody::Json(value) => value,
            other => panic!("expected a JSON body, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn uploaded_cover_is_attached() {
        let backend = FakeBackend::new();
        backend
            .route(
                Method::Post,
                "/upload",
                Reply::ok(json!({ "success": true, "data": { "url": "https://cdn.example.org/sabha.png" } })),
            )
            .route(Method::Post, "/submissions", Reply::ok(json!({ "success": true, "data": {} })));
        let api = api(&backend, &config(FallbackPolicy::None));

        let message = submit_blog(&api, &form(), Some(cover())).await.expect("submitted");

        assert_eq!(message, messages::success::BLOG_SUBMITTED);
        let upload = &backend.requests()[0];
        let RequestBody::Multipart(multipart) = &upload.body else {
            panic!("uploads are multipart");
        };
        assert_eq!(multipart.files[0].field, "image");
        assert_eq!(upload.header("content-type"), None);

        let body = submitted_json(&backend);
        assert_eq!(body["featuredImage"], "https://cdn.example.org/sabha.png");
        assert_eq!(body["status"], "draft");
        assert_eq!(body["tags"], json!(["governance", "wards"]));
    }

    #[tokio::test]
    async fn failed_upload_still_submits_text() {
        let backend = FakeBackend::new();
        backend
            .route(Method::Post, "/upload", Reply::status(500))
            .route(
                Method::Post,
                "/submissions",
                Reply::ok(json!({ "success": true, "message": "Queued for review" })),
            );
        let api = api(&backend, &config(FallbackPolicy::None));

        let message = submit_blog(&api, &form(), Some(cover())).await.expect("submitted");

        assert_eq!(message, "Queued for review");
        let body = submitted_json(&backend);
        assert!(body.get("featuredImage").is_none());
        assert_eq!(body["authorName"], "Sanjay Kumar");
    }

    #[tokio::test]
    async fn empty_file_is_not_uploaded() {
        let backend = FakeBackend::new();
        backend.route(Method::Post, "/submissions", Reply::ok(json!({ "success": true })));
        let api = api(&backend, &config(FallbackPolicy::None));
        let empty = FilePart {
            bytes: Vec::new(),
            ..cover()
        };

        submit_blog(&api, &form(), Some(empty)).await.expect("submitted");

        assert_eq!(backend.count("/upload"), 0);
        assert_eq!(backend.count("/submissions"), 1);
    }

    #[tokio::test]
    async fn invalid_form_makes_no_requests() {
        let backend = FakeBackend::new();
        let api = api(&backend, &config(FallbackPolicy::None));
        let form = BlogSubmissionForm {
            author_email: "sanjay.example.org".to_string(),
            ..form()
        };

        let err = submit_blog(&api, &form, Some(cover())).await.expect_err("invalid");

        assert_eq!(
            err,
            ContentError::Validation(ValidationError::InvalidEmail("sanjay.example.org".to_string()))
        );
        assert!(backend.requests().is_empty());
    }
}
