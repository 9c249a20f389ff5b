//! In-process backend double for view-model tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::{cell::RefCell, collections::VecDeque, rc::Rc, time::Duration};

use async_trait::async_trait;
use serde_json::{json, Value};
use wtp_shared::{
    debounce::TokioSleeper,
    query::{MemoryUrl, QueryParams},
    transport::{ApiRequest, HttpTransport, Method, RawResponse, TransportError},
    ApiService, ContentViewModel, FallbackPolicy, SiteConfig,
};

pub const BASE: &str = "http://backend.test/api";

#[derive(Debug, Clone)]
pub enum Reply {
    Json {
        status: u16,
        body: Value,
        delay: Duration,
    },
    Unreachable,
}

impl Reply {
    pub fn ok(body: Value) -> Self {
        Self::Json {
            status: 200,
            body,
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: u16) -> Self {
        Self::Json {
            status,
            body: json!({ "success": false, "message": "error" }),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(self, by: Duration) -> Self {
        match self {
            Self::Json {
                status,
                body,
                ..
            } => Self::Json {
                status,
                body,
                delay: by,
            },
            Self::Unreachable => Self::Unreachable,
        }
    }
}

struct Route {
    method: Method,
    path: String,
    replies: VecDeque<Reply>,
}

/// Routes by method and path (query ignored). Queued replies are served in
/// order and the last one repeats. Unrouted paths answer 404.
#[derive(Default)]
pub struct FakeBackend {
    routes: RefCell<Vec<Route>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl FakeBackend {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn route(&self, method: Method, path: &str, reply: Reply) -> &Self {
        let mut routes = self.routes.borrow_mut();
        match routes
            .iter_mut()
            .find(|route| route.method == method && route.path == path)
        {
            Some(route) => route.replies.push_back(reply),
            None => routes.push(Route {
                method,
                path: path.to_string(),
                replies: VecDeque::from([reply]),
            }),
        }
        self
    }

    pub fn get(&self, path: &str, reply: Reply) -> &Self {
        self.route(Method::Get, path, reply)
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    /// Query strings of every request to `path`, in order.
    pub fn queries(&self, path: &str) -> Vec<QueryParams> {
        self.requests
            .borrow()
            .iter()
            .filter_map(|request| {
                let (request_path, query) = split(&request.url);
                (request_path == path).then(|| QueryParams::parse(query))
            })
            .collect()
    }

    pub fn count(&self, path: &str) -> usize {
        self.queries(path).len()
    }

    fn next_reply(&self, method: Method, path: &str) -> Option<Reply> {
        let mut routes = self.routes.borrow_mut();
        let route = routes
            .iter_mut()
            .find(|route| route.method == method && route.path == path)?;
        if route.replies.len() > 1 {
            route.replies.pop_front()
        } else {
            route.replies.front().cloned()
        }
    }
}

fn split(url: &str) -> (&str, &str) {
    let rest = url.strip_prefix(BASE).unwrap_or(url);
    rest.split_once('?').unwrap_or((rest, ""))
}

#[async_trait(?Send)]
impl HttpTransport for FakeBackend {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let (path, _) = split(&request.url);
        let reply = self.next_reply(request.method, path);
        self.requests.borrow_mut().push(request);
        match reply {
            Some(Reply::Json {
                status,
                body,
                delay,
            }) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                let status_text = match status {
                    200 => "OK",
                    404 => "Not Found",
                    500 => "Internal Server Error",
                    _ => "Error",
                };
                Ok(RawResponse {
                    status,
                    status_text: status_text.to_string(),
                    body: body.to_string(),
                })
            },
            Some(Reply::Unreachable) => Err(TransportError("connection refused".to_string())),
            None => Ok(RawResponse {
                status: 404,
                status_text: "Not Found".to_string(),
                body: String::new(),
            }),
        }
    }
}

pub fn blog(id: &str, category: &str, published_at: &str) -> Value {
    json!({
        "_id": id,
        "title": format!("Post {id}"),
        "excerpt": format!("Excerpt {id}"),
        "content": format!("<p>Body {id}</p>"),
        "category": category,
        "tags": ["reform"],
        "authorName": "Vishal Singh",
        "publishedAt": published_at,
        "readTime": "5 min read",
        "status": "published"
    })
}

pub fn blog_page(ids: &[&str], current: u32, pages: u32) -> Value {
    let blogs: Vec<Value> = ids
        .iter()
        .map(|id| blog(id, "Governance", "2025-01-15T00:00:00Z"))
        .collect();
    json!({
        "success": true,
        "data": { "blogs": blogs },
        "pagination": { "current": current, "pages": pages, "total": pages * 9, "limit": 9 }
    })
}

pub fn config(recent_fallback: FallbackPolicy) -> SiteConfig {
    SiteConfig {
        recent_fallback,
        stories_fallback: recent_fallback,
        ..SiteConfig::default().with_api_base(BASE)
    }
}

pub fn api(backend: &Rc<FakeBackend>, config: &SiteConfig) -> ApiService {
    ApiService::from_config(config, backend.clone())
}

pub fn view_model(
    backend: &Rc<FakeBackend>,
    url: &Rc<MemoryUrl>,
    fallback: FallbackPolicy,
) -> Rc<ContentViewModel> {
    let config = config(fallback);
    Rc::new(ContentViewModel::new(
        api(backend, &config),
        config,
        url.clone(),
        Rc::new(TokioSleeper),
    ))
}
