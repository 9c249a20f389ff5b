use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::{Method as HttpMethod, RequestBuilder};
use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};
use wtp_shared::{
    transport::{
        ApiRequest, FilePart, HttpTransport, Method, MultipartForm, RawResponse, RequestBody,
        TransportError,
    },
    ApiService,
};

use crate::config;

/// `fetch`-backed transport. Errors from `fetch` itself (offline, CORS,
/// refused) become [`TransportError`]; any HTTP status is a response.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let method = match request.method {
            Method::Get => HttpMethod::GET,
            Method::Post => HttpMethod::POST,
            Method::Put => HttpMethod::PUT,
            Method::Delete => HttpMethod::DELETE,
        };
        let mut builder = RequestBuilder::new(&request.url).method(method);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let prepared = match request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(value) => builder.body(value.to_string()),
            RequestBody::Multipart(form) => builder.body(form_data(form).map_err(js_error)?),
        }
        .map_err(|e| TransportError(format!("Request error: {e:?}")))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| TransportError(format!("Network error: {e:?}")))?;
        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(format!("Read error: {e:?}")))?;
        Ok(RawResponse {
            status,
            status_text,
            body,
        })
    }
}

/// The browser sets the multipart boundary itself when the body is a
/// `FormData`.
fn form_data(form: MultipartForm) -> Result<FormData, JsValue> {
    let data = FormData::new()?;
    for (name, value) in &form.fields {
        data.append_with_str(name, value)?;
    }
    for file in form.files {
        let blob = file_blob(&file)?;
        data.append_with_blob_and_filename(&file.field, &blob, &file.file_name)?;
    }
    Ok(data)
}

fn file_blob(file: &FilePart) -> Result<Blob, JsValue> {
    let bytes = Uint8Array::from(file.bytes.as_slice());
    let parts = Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(&file.content_type);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
}

fn js_error(value: JsValue) -> TransportError {
    TransportError(format!("FormData error: {value:?}"))
}

/// A fresh service per page; nothing is shared globally.
pub fn api_service() -> ApiService {
    ApiService::from_config(&config::site_config(), Rc::new(GlooTransport))
}
