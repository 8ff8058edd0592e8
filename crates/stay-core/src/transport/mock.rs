//! Mock Transport
//!
//! Replays scripted responses in order and records every request it sees.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use super::{ApiRequest, ApiResponse, HttpTransport};
use crate::error::{FlowError, Result};

/// A request as the mock saw it
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

/// Scripted transport
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<ApiResponse>>>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and JSON body
    pub fn respond(self, status: u16, body: Value) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    /// Queue a transport failure
    pub fn fail(self, reason: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(FlowError::Transport(reason.into())));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest<'_>) -> Result<ApiResponse> {
        self.requests.borrow_mut().push(RecordedRequest {
            method: request.method,
            url: request.url,
            authorization: request.bearer.map(|t| format!("Bearer {t}")),
            body: request.body,
        });

        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(FlowError::Transport("no scripted response".into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_replays_in_order() {
        let mock = MockTransport::new()
            .respond(200, json!({"ok": 1}))
            .fail("connection reset");

        let first = mock.send(ApiRequest::delete("http://a")).await.unwrap();
        assert_eq!(first.body, json!({"ok": 1}));

        let second = mock.send(ApiRequest::delete("http://b")).await;
        assert_eq!(second, Err(FlowError::Transport("connection reset".into())));

        let third = mock.send(ApiRequest::delete("http://c")).await;
        assert!(matches!(third, Err(FlowError::Transport(_))));

        assert_eq!(mock.call_count(), 3);
        assert_eq!(mock.requests()[1].url, "http://b");
    }
}
