//! HTTP Client Adapter
//!
//! One request in, one response out. No retries, no pooling beyond what the
//! underlying client does. Bodies that are empty or not JSON come back as
//! `Value::Null` so callers fall through to their fallback messages.

mod mock;

pub use mock::{MockTransport, RecordedRequest};

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, header::CONTENT_TYPE};
use serde_json::Value;

use crate::error::Result;

/// An outbound API call
pub struct ApiRequest<'a> {
    pub method: Method,
    pub url: String,

    /// Bearer credential for `Authorization`, borrowed for the call only
    pub bearer: Option<&'a str>,

    pub body: Option<Value>,
}

impl<'a> ApiRequest<'a> {
    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            bearer: None,
            body: Some(body),
        }
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self {
            method: Method::DELETE,
            url: url.into(),
            bearer: None,
            body: None,
        }
    }

    pub fn bearer(mut self, token: &'a str) -> Self {
        self.bearer = Some(token);
        self
    }
}

impl fmt::Debug for ApiRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("bearer", &self.bearer.map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

/// Status and decoded body of a response
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Non-empty top-level `message` string, if the backend sent one
    pub fn message(&self) -> Option<String> {
        self.body
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    }
}

/// Transport seam between the flows and the network
///
/// Futures are not `Send` so the same implementation runs under
/// `wasm-bindgen-futures` in the browser.
#[async_trait(?Send)]
pub trait HttpTransport {
    /// Perform one request. `Err` means no HTTP response was obtained.
    async fn send(&self, request: ApiRequest<'_>) -> Result<ApiResponse>;
}

/// `reqwest`-backed transport
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    timeout: Duration,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
        }
    }
}

#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest<'_>) -> Result<ApiResponse> {
        let mut builder = self
            .client
            .request(request.method, request.url.as_str())
            .header(CONTENT_TYPE, "application/json");

        // The browser client has no per-request timer; the web layer
        // enforces the same deadline by aborting the attempt.
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(self.timeout);
        }

        if let Some(token) = request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(url = %request.url, "request failed: {}", e);
            e
        })?;

        let status = response.status().as_u16();
        let text = response.text().await?;
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);

        tracing::debug!(url = %request.url, status, "response received");

        Ok(ApiResponse { status, body })
    }
}
