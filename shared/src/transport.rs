//! HTTP seam between [`crate::api::ApiService`] and the platform.
//!
//! The browser app plugs in a `gloo-net` transport, the CLI and the
//! integration tests use [`ReqwestTransport`], and unit tests use a
//! recording fake. Requests are plain data so every transport sees the
//! same thing.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// One uploaded file inside a multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Transport-agnostic `multipart/form-data` body. Field order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    pub fields: Vec<(String, String)>,
    pub files: Vec<FilePart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn file(mut self, part: FilePart) -> Self {
        self.files.push(part);
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Multipart(MultipartForm),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Whatever came back, before any status or envelope interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError>;
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::ReqwestTransport;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use async_trait::async_trait;
    use reqwest::multipart::{Form, Part};

    use super::{ApiRequest, HttpTransport, Method, RawResponse, RequestBody, TransportError};

    /// Native transport for the CLI and integration tests. No request
    /// timeout is configured.
    #[derive(Debug, Clone, Default)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_client(client: reqwest::Client) -> Self {
            Self {
                client,
            }
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for ReqwestTransport {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
            let method = match request.method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
                Method::Put => reqwest::Method::PUT,
                Method::Delete => reqwest::Method::DELETE,
            };
            let mut builder = self.client.request(method, &request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            builder = match request.body {
                RequestBody::Empty => builder,
                RequestBody::Json(value) => builder.body(value.to_string()),
                RequestBody::Multipart(multipart) => {
                    let mut form = Form::new();
                    for (name, value) in multipart.fields {
                        form = form.text(name, value);
                    }
                    for file in multipart.files {
                        let part = Part::bytes(file.bytes)
                            .file_name(file.file_name)
                            .mime_str(&file.content_type)
                            .map_err(|err| TransportError(format!("invalid content type: {err}")))?;
                        form = form.part(file.field, part);
                    }
                    builder.multipart(form)
                },
            };

            let response = builder
                .send()
                .await
                .map_err(|err| TransportError(err.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|err| TransportError(format!("failed to read body: {err}")))?;
            Ok(RawResponse {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            })
        }
    }
}
