//! Test doubles for the application ports.

use crate::ports::http_client::{ApiRequest, ApiResponse, HttpClientPort, TransportError};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Records every request and replays scripted responses in order.
/// Once the script runs out, every request gets `200` with an empty array.
#[derive(Default)]
pub struct MockHttpClient {
    responses: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, status: u16, body: Value) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn push_error(&self, error: TransportError) -> &Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }
}

#[async_trait]
impl HttpClientPort for MockHttpClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse::ok(json!([]))))
    }
}

/// Wire-format question as the backend returns it
pub fn question_json(order: u32, id: i64, text: &str, show: bool) -> Value {
    json!({
        "order": order,
        "questionId": id,
        "question": text,
        "show": show,
        "askedAt": "2024-03-01T12:00:00Z",
    })
}
