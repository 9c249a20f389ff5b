use std::{fmt, rc::Rc};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::{
    config::{FallbackPolicy, SiteConfig, STORY_CATEGORIES},
    error::ContentError,
    fallback,
    models::{self, ContentItem, ContentKind},
    transport::{ApiRequest, FilePart, HttpTransport, Method, MultipartForm, RequestBody},
    wire::{self, BlogPayload, BlogsPayload, ContributionsPayload, Envelope, UploadPayload, WirePagination},
};

/// REST paths relative to the API base.
pub mod endpoints {
    pub const BLOGS: &str = "/blogs";
    pub const BLOG_CATEGORIES: &str = "/blogs/meta/categories";
    pub const BLOG_TAGS: &str = "/blogs/meta/tags";
    pub const UPLOAD: &str = "/upload";
    pub const SUBMISSIONS: &str = "/submissions";
    pub const ADMIN_SUBMIT_ANONYMOUS: &str = "/admin/submit-anonymous";
    pub const CONTRIBUTIONS: &str = "/admin/web/contributions";
    pub const HEALTH: &str = "/health";
}

/// Where the data in a successful result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataOrigin {
    #[default]
    Remote,
    /// Bundled sample content substituted after a failure.
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub data: T,
    pub pagination: Option<WirePagination>,
    pub origin: DataOrigin,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn remote(data: T) -> Self {
        Self {
            data,
            pagination: None,
            origin: DataOrigin::Remote,
            message: None,
        }
    }

    pub fn fallback(data: T) -> Self {
        Self {
            origin: DataOrigin::Fallback,
            ..Self::remote(data)
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            data: f(self.data),
            pagination: self.pagination,
            origin: self.origin,
            message: self.message,
        }
    }

    pub fn try_map<U>(
        self,
        f: impl FnOnce(T) -> Result<U, ContentError>,
    ) -> Result<ApiResponse<U>, ContentError> {
        Ok(ApiResponse {
            data: f(self.data)?,
            pagination: self.pagination,
            origin: self.origin,
            message: self.message,
        })
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, ContentError>;

/// Query for `GET /blogs`. Parameters are emitted in a fixed order so
/// requests are easy to compare in logs and tests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlogQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl BlogQuery {
    /// Published posts, newest first.
    pub fn published() -> Self {
        Self {
            status: Some("published".to_string()),
            sort_by: Some("publishedAt".to_string()),
            sort_order: Some("desc".to_string()),
            ..Self::default()
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn category(mut self, category: Option<String>) -> Self {
        self.category = models::non_blank(category);
        self
    }

    pub fn search(mut self, search: Option<String>) -> Self {
        self.search = models::non_blank(search);
        self
    }

    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        let numbers = [("page", self.page), ("limit", self.limit)];
        for (key, value) in numbers {
            if let Some(value) = value {
                serializer.append_pair(key, &value.to_string());
            }
        }
        let texts = [
            ("status", &self.status),
            ("sortBy", &self.sort_by),
            ("sortOrder", &self.sort_order),
            ("category", &self.category),
            ("search", &self.search),
        ];
        for (key, value) in texts {
            if let Some(value) = value {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }
}

/// Method, body and extra headers for [`ApiService::call`].
#[derive(Debug, Clone, PartialEq)]
pub struct CallOptions {
    pub method: Method,
    pub body: RequestBody,
    pub headers: Vec<(String, String)>,
}

impl Default for CallOptions {
    fn default() -> Self {
        Self::get()
    }
}

impl CallOptions {
    pub fn get() -> Self {
        Self {
            method: Method::Get,
            body: RequestBody::Empty,
            headers: Vec::new(),
        }
    }

    pub fn delete() -> Self {
        Self {
            method: Method::Delete,
            ..Self::get()
        }
    }

    pub fn json(method: Method, body: Value) -> Self {
        Self {
            method,
            body: RequestBody::Json(body),
            headers: Vec::new(),
        }
    }

    pub fn multipart(form: MultipartForm) -> Self {
        Self {
            method: Method::Post,
            body: RequestBody::Multipart(form),
            headers: Vec::new(),
        }
    }
}

/// Thin, parameter-binding client over the content backend.
///
/// Every method returns an [`ApiResult`]; nothing here panics or throws.
/// Cloning is cheap and clones share the transport.
#[derive(Clone)]
pub struct ApiService {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
    recent_fallback: FallbackPolicy,
}

impl fmt::Debug for ApiService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiService")
            .field("base_url", &self.base_url)
            .field("recent_fallback", &self.recent_fallback)
            .finish_non_exhaustive()
    }
}

impl ApiService {
    pub fn new(base_url: impl Into<String>, transport: Rc<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            recent_fallback: FallbackPolicy::default(),
        }
    }

    pub fn from_config(config: &SiteConfig, transport: Rc<dyn HttpTransport>) -> Self {
        Self::new(config.api_base_url.clone(), transport).with_recent_fallback(config.recent_fallback)
    }

    pub fn with_recent_fallback(mut self, policy: FallbackPolicy) -> Self {
        self.recent_fallback = policy;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn recent_fallback(&self) -> FallbackPolicy {
        self.recent_fallback
    }

    /// Send one request and unwrap the `{success, data, pagination}`
    /// envelope. An empty 2xx body yields `Value::Null`.
    pub async fn call(&self, endpoint: &str, options: CallOptions) -> ApiResult<Value> {
        let mut headers = Vec::with_capacity(options.headers.len() + 1);
        if !matches!(options.body, RequestBody::Multipart(_)) {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        headers.extend(options.headers);
        let method = options.method;
        let request = ApiRequest {
            method,
            url: format!("{}{}", self.base_url, endpoint),
            headers,
            body: options.body,
        };

        let result = self.dispatch(request).await;
        match &result {
            Ok(_) => debug!(method = method.as_str(), endpoint, "api call succeeded"),
            Err(err) => warn!(method = method.as_str(), endpoint, error = %err, "api call failed"),
        }
        result
    }

    async fn dispatch(&self, request: ApiRequest) -> ApiResult<Value> {
        let response = self
            .transport
            .send(request)
            .await
            .map_err(|err| ContentError::NetworkUnreachable(err.0))?;
        if !response.is_success() {
            return Err(ContentError::Http {
                status: response.status,
                status_text: response.status_text,
            });
        }
        if response.body.trim().is_empty() {
            return Ok(ApiResponse::remote(Value::Null));
        }
        let envelope: Envelope = serde_json::from_str(&response.body)
            .map_err(|err| ContentError::Decode(err.to_string()))?;
        if !envelope.success {
            return Err(ContentError::Rejected(
                envelope
                    .message
                    .unwrap_or_else(|| "Request was not successful".to_string()),
            ));
        }
        Ok(ApiResponse {
            data: envelope.data,
            pagination: envelope.pagination,
            origin: DataOrigin::Remote,
            message: envelope.message,
        })
    }

    async fn send_json(
        &self,
        endpoint: &str,
        method: Method,
        body: &impl Serialize,
    ) -> ApiResult<Value> {
        let body = serde_json::to_value(body).map_err(|err| ContentError::Decode(err.to_string()))?;
        self.call(endpoint, CallOptions::json(method, body)).await
    }

    pub async fn get_blogs(&self, query: &BlogQuery) -> ApiResult<Vec<ContentItem>> {
        let query_string = query.to_query_string();
        let endpoint = if query_string.is_empty() {
            endpoints::BLOGS.to_string()
        } else {
            format!("{}?{query_string}", endpoints::BLOGS)
        };
        self.call(&endpoint, CallOptions::get())
            .await?
            .try_map(|data| {
                let payload: BlogsPayload = decode_or_default(data)?;
                Ok(payload.blogs.into_iter().map(wire::BlogRecord::into_item).collect())
            })
    }

    pub async fn get_blog_by_id(&self, id: &str) -> ApiResult<ContentItem> {
        self.get_single_blog(id).await
    }

    /// The backend resolves slugs on the same path as ids.
    pub async fn get_blog_by_slug(&self, slug: &str) -> ApiResult<ContentItem> {
        self.get_single_blog(slug).await
    }

    async fn get_single_blog(&self, identifier: &str) -> ApiResult<ContentItem> {
        let endpoint = format!("{}/{}", endpoints::BLOGS, urlencoding::encode(identifier));
        self.call(&endpoint, CallOptions::get())
            .await?
            .try_map(|data| {
                if data.is_null() {
                    return Err(ContentError::NotFound(ContentKind::Blog));
                }
                Ok(decode::<BlogPayload>(data)?.into_record().into_item())
            })
    }

    pub async fn create_blog(&self, blog: &impl Serialize) -> ApiResult<Value> {
        self.send_json(endpoints::BLOGS, Method::Post, blog).await
    }

    pub async fn update_blog(&self, id: &str, blog: &impl Serialize) -> ApiResult<Value> {
        let endpoint = format!("{}/{}", endpoints::BLOGS, urlencoding::encode(id));
        self.send_json(&endpoint, Method::Put, blog).await
    }

    pub async fn delete_blog(&self, id: &str) -> ApiResult<Value> {
        let endpoint = format!("{}/{}", endpoints::BLOGS, urlencoding::encode(id));
        self.call(&endpoint, CallOptions::delete()).await
    }

    pub async fn get_blog_categories(&self) -> ApiResult<Vec<String>> {
        Ok(self
            .call(endpoints::BLOG_CATEGORIES, CallOptions::get())
            .await?
            .map(|data| wire::names_from(&data, "categories")))
    }

    pub async fn get_blog_tags(&self) -> ApiResult<Vec<String>> {
        Ok(self
            .call(endpoints::BLOG_TAGS, CallOptions::get())
            .await?
            .map(|data| wire::names_from(&data, "tags")))
    }

    /// Upload one image under the `image` field; yields its public URL.
    pub async fn upload_image(&self, image: FilePart) -> ApiResult<String> {
        let image = FilePart {
            field: "image".to_string(),
            ..image
        };
        self.call(endpoints::UPLOAD, CallOptions::multipart(MultipartForm::new().file(image)))
            .await?
            .try_map(|data| Ok(decode::<UploadPayload>(data)?.url))
    }

    pub async fn create_submission(&self, submission: &impl Serialize) -> ApiResult<Value> {
        self.send_json(endpoints::SUBMISSIONS, Method::Post, submission).await
    }

    /// Multipart story submission; media files go under repeated `media`
    /// fields.
    pub async fn submit_anonymous_story(&self, form: MultipartForm) -> ApiResult<Value> {
        self.call(endpoints::ADMIN_SUBMIT_ANONYMOUS, CallOptions::multipart(form))
            .await
    }

    pub async fn get_contributions(&self, status: &str, limit: u32) -> ApiResult<Vec<ContentItem>> {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("status", status)
            .append_pair("limit", &limit.to_string())
            .finish();
        let endpoint = format!("{}?{query}", endpoints::CONTRIBUTIONS);
        self.call(&endpoint, CallOptions::get())
            .await?
            .try_map(|data| {
                let payload: ContributionsPayload = decode_or_default(data)?;
                Ok(payload
                    .contributions
                    .into_iter()
                    .enumerate()
                    .map(|(index, record)| record.into_story(index))
                    .collect())
            })
    }

    pub async fn health(&self) -> ApiResult<Value> {
        self.call(endpoints::HEALTH, CallOptions::get()).await
    }

    /// Homepage items. On failure the configured [`FallbackPolicy`]
    /// decides between the error and the bundled samples; samples are
    /// tagged [`DataOrigin::Fallback`].
    pub async fn get_recent_blogs(&self, limit: u32) -> ApiResult<Vec<ContentItem>> {
        let query = BlogQuery::published().limit(limit);
        match self.get_blogs(&query).await {
            Ok(response) => Ok(response),
            Err(err) => match self.recent_fallback {
                FallbackPolicy::None => Err(err),
                FallbackPolicy::StaticSample => {
                    warn!(error = %err, "recent blogs unavailable, serving sample items");
                    Ok(ApiResponse::fallback(fallback::recent_blogs(limit as usize)))
                },
            },
        }
    }

    pub async fn get_blogs_by_category(&self, category: &str, limit: u32) -> ApiResult<Vec<ContentItem>> {
        let query = BlogQuery::published()
            .limit(limit)
            .category(Some(category.to_string()));
        self.get_blogs(&query).await
    }

    pub async fn search_blogs(&self, term: &str, limit: u32) -> ApiResult<Vec<ContentItem>> {
        let query = BlogQuery::published()
            .limit(limit)
            .search(Some(term.to_string()));
        self.get_blogs(&query).await
    }

    /// Same-category posts, newest first, never including `exclude_id`.
    pub async fn get_related_blogs(
        &self,
        category: &str,
        exclude_id: &str,
        limit: u32,
    ) -> ApiResult<Vec<ContentItem>> {
        Ok(self
            .get_blogs_by_category(category, limit.saturating_add(1))
            .await?
            .map(|items| {
                let mut related: Vec<ContentItem> =
                    items.into_iter().filter(|item| item.id != exclude_id).collect();
                models::sort_by_recency(&mut related);
                related.truncate(limit as usize);
                related
            }))
    }

    /// Published posts in story categories, presented as stories.
    pub async fn get_story_blogs(&self, limit: u32) -> ApiResult<Vec<ContentItem>> {
        let query = BlogQuery {
            status: Some("published".to_string()),
            limit: Some(limit),
            ..BlogQuery::default()
        };
        let query_string = query.to_query_string();
        self.call(&format!("{}?{query_string}", endpoints::BLOGS), CallOptions::get())
            .await?
            .try_map(|data| {
                let payload: BlogsPayload = decode_or_default(data)?;
                Ok(payload
                    .blogs
                    .into_iter()
                    .filter(|blog| STORY_CATEGORIES.contains(&blog.category.as_str()))
                    .enumerate()
                    .map(|(index, blog)| blog.into_story(index))
                    .collect())
            })
    }
}

fn decode<T: DeserializeOwned>(data: Value) -> Result<T, ContentError> {
    serde_json::from_value(data).map_err(|err| ContentError::Decode(err.to_string()))
}

/// Missing `data` decodes to the payload's empty default.
fn decode_or_default<T: DeserializeOwned + Default>(data: Value) -> Result<T, ContentError> {
    if data.is_null() {
        return Ok(T::default());
    }
    decode(data)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::transport::{RawResponse, TransportError};

    struct Canned {
        response: Result<RawResponse, TransportError>,
        seen: RefCell<Vec<ApiRequest>>,
    }

    impl Canned {
        fn ok(status: u16, body: Value) -> Rc<Self> {
            Rc::new(Self {
                response: Ok(RawResponse {
                    status,
                    status_text: (if status == 200 { "OK" } else { "Internal Server Error" })
                        .to_string(),
                    body: body.to_string(),
                }),
                seen: RefCell::new(Vec::new()),
            })
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for Canned {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
            self.seen.borrow_mut().push(request);
            self.response.clone()
        }
    }

    #[test]
    fn published_query_has_fixed_parameter_order() {
        let query = BlogQuery::published()
            .page(2)
            .limit(9)
            .category(Some("Youth Power".to_string()))
            .search(Some(String::new()));
        assert_eq!(
            query.to_query_string(),
            "page=2&limit=9&status=published&sortBy=publishedAt&sortOrder=desc&category=Youth+Power"
        );
    }

    #[tokio::test]
    async fn json_calls_carry_content_type() {
        let transport = Canned::ok(200, json!({"success": true, "data": {"ok": true}}));
        let api = ApiService::new("http://api.test/api/", transport.clone());
        let response = api.health().await.unwrap();
        assert_eq!(response.data, json!({"ok": true}));
        let seen = transport.seen.borrow();
        assert_eq!(seen[0].url, "http://api.test/api/health");
        assert_eq!(seen[0].header("content-type"), Some("application/json"));
    }

    #[tokio::test]
    async fn unsuccessful_envelope_is_rejected() {
        let transport = Canned::ok(200, json!({"success": false, "message": "Title taken"}));
        let api = ApiService::new("http://api.test/api", transport);
        let err = api.create_blog(&json!({"title": "x"})).await.unwrap_err();
        assert_eq!(err, ContentError::Rejected("Title taken".to_string()));
    }

    #[tokio::test]
    async fn null_blog_is_not_found() {
        let transport = Canned::ok(200, json!({"success": true, "data": null}));
        let api = ApiService::new("http://api.test/api", transport);
        let err = api.get_blog_by_id("missing").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn multipart_upload_skips_json_header() {
        let transport = Canned::ok(200, json!({"success": true, "data": {"url": "/uploads/a.png"}}));
        let api = ApiService::new("http://api.test/api", transport.clone());
        let url = api
            .upload_image(FilePart {
                field: "file".to_string(),
                file_name: "a.png".to_string(),
                content_type: "image/png".to_string(),
                bytes: vec![1, 2, 3],
            })
            .await
            .unwrap()
            .data;
        assert_eq!(url, "/uploads/a.png");
        let seen = transport.seen.borrow();
        assert_eq!(seen[0].header("Content-Type"), None);
        match &seen[0].body {
            RequestBody::Multipart(form) => assert_eq!(form.files[0].field, "image"),
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[tokio::test]
    async fn related_limit_saturates_at_max() {
        let transport = Canned::ok(200, json!({"success": true, "data": {"blogs": []}}));
        let api = ApiService::new("http://api.test/api", transport.clone());
        let related = api.get_related_blogs("Youth", "1", u32::MAX).await.unwrap();
        assert!(related.data.is_empty());
        let seen = transport.seen.borrow();
        assert!(seen[0].url.contains("limit=4294967295"));
    }
}
