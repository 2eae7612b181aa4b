//! HTTP client port
//!
//! Defines the uniform request/response envelope exchanged with the backend.
//! Adapters (reqwest in the infrastructure layer) perform the actual call.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Status reported when no HTTP response was received at all
pub const NO_RESPONSE_STATUS: u16 = 0;

/// HTTP verbs used by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outbound request: relative path (query string included), verb,
/// optional JSON body and headers
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub path: String,
    pub method: HttpMethod,
    pub data: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            data: None,
            headers: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Set a header, replacing any existing value (names compare case-insensitively)
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Normalized response: numeric status plus the decoded body
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn ok(body: Value) -> Self {
        Self::new(200, body)
    }

    /// Response standing in for a call that never reached the backend
    pub fn no_response() -> Self {
        Self::new(NO_RESPONSE_STATUS, Value::Null)
    }

    /// Only 200 counts as success; every other status is a failure
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Errors raised by an adapter before a status code is available
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// Transport for backend calls
///
/// Implementations live in the infrastructure layer.
#[async_trait]
pub trait HttpClientPort: Send + Sync {
    /// Perform the call. Any received HTTP status, 4xx/5xx included, is `Ok`.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}
