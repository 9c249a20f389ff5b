#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use serde_json::json;
    use wiremock::{
        matchers::{header, method, path, query_param},
        Mock, MockServer, Request, ResponseTemplate,
    };
    use wtp_shared::{
        transport::{FilePart, ReqwestTransport},
        ApiService, BlogQuery, ContentError,
    };

    fn service(base: &str) -> ApiService {
        ApiService::new(base, Rc::new(ReqwestTransport::new()))
    }

    #[tokio::test]
    async fn listing_sends_query_and_decodes_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/blogs"))
            .and(query_param("page", "2"))
            .and(query_param("status", "published"))
            .and(query_param("category", "Youth Power"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": { "blogs": [{
                    "_id": "b1",
                    "title": "Students audit the bus depot",
                    "category": "Youth Power",
                    "content": "<p>Twelve students spent a week at the depot.</p>",
                    "status": "published"
                }] },
                "pagination": { "current": 2, "pages": 5, "total": 41, "limit": 9 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = service(&format!("{}/api/", server.uri()));
        let query = BlogQuery::published()
            .page(2)
            .limit(9)
            .category(Some("Youth Power".to_string()));
        let response = api.get_blogs(&query).await.expect("blogs");

        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].id, "b1");
        assert_eq!(response.pagination.map(|p| p.pages), Some(5));
    }

    #[tokio::test]
    async fn server_error_maps_to_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let api = service(&format!("{}/api", server.uri()));
        let err = api.health().await.expect_err("500");

        assert_eq!(
            err,
            ContentError::Http {
                status: 500,
                status_text: "Internal Server Error".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn refused_connection_is_unreachable() {
        let api = service("http://127.0.0.1:9/api");

        let err = api.health().await.expect_err("nothing listens on the discard port");

        assert!(matches!(err, ContentError::NetworkUnreachable(_)));
    }

    #[tokio::test]
    async fn image_upload_is_multipart() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/upload"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": { "url": "/uploads/poster.jpg" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = service(&format!("{}/api", server.uri()));
        let url = api
            .upload_image(FilePart {
                field: "ignored".to_string(),
                file_name: "poster.jpg".to_string(),
                content_type: "image/jpeg".to_string(),
                bytes: vec![0xff, 0xd8, 0xff],
            })
            .await
            .expect("upload");
        assert_eq!(url.data, "/uploads/poster.jpg");

        let received: Vec<Request> = server.received_requests().await.expect("recording on");
        let content_type = received[0]
            .headers
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("multipart/form-data"));
        let body = String::from_utf8_lossy(&received[0].body);
        assert!(body.contains("name=\"image\""));
        assert!(body.contains("filename=\"poster.jpg\""));
    }
}
