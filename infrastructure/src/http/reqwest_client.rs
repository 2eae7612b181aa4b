//! reqwest implementation of [`HttpClientPort`]
//!
//! Request paths are joined onto the configured base URL. Response bodies
//! are decoded as JSON when possible; anything else is kept as a JSON
//! string, and an empty body becomes `null`.

use async_trait::async_trait;
use echoq_application::ports::http_client::{
    ApiRequest, ApiResponse, HttpClientPort, HttpMethod, TransportError,
};
use reqwest::{Client, Method, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::trace;

pub struct ReqwestHttpClient {
    client: Client,
    base_url: String,
}

impl ReqwestHttpClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> Result<Url, TransportError> {
        let joined = if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        };
        Url::parse(&joined).map_err(|e| TransportError::InvalidUrl(format!("{}: {}", joined, e)))
    }
}

fn method_for(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn transport_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else if e.is_builder() {
        TransportError::InvalidUrl(e.to_string())
    } else {
        TransportError::Connection(e.to_string())
    }
}

/// Decode a response body into the JSON value handed to callers
fn decode_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

#[async_trait]
impl HttpClientPort for ReqwestHttpClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.url_for(&request.path)?;
        trace!("{} {}", request.method, url);

        let mut builder = self.client.request(method_for(request.method), url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(data) = &request.data {
            builder = builder.body(data.to_string());
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(ApiResponse::new(status, decode_body(&bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serve one canned response and hand back the raw request text
    async fn serve_once(status_line: &str, body: &str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                raw.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&raw);
                if let Some(end) = text.find("\r\n\r\n") {
                    let length = text[..end]
                        .lines()
                        .find_map(|l| {
                            l.to_ascii_lowercase()
                                .strip_prefix("content-length:")
                                .map(|v| v.trim().parse::<usize>().unwrap_or(0))
                        })
                        .unwrap_or(0);
                    if raw.len() >= end + 4 + length {
                        break;
                    }
                }
                if n == 0 {
                    break;
                }
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            let _ = tx.send(String::from_utf8_lossy(&raw).into_owned());
        });

        (format!("http://{}", addr), rx)
    }

    #[tokio::test]
    async fn test_get_decodes_json_array() {
        let (base, request_rx) = serve_once("200 OK", r#"[{"order":1}]"#).await;
        let client = ReqwestHttpClient::new(base, Duration::from_secs(5)).unwrap();

        let response = client
            .send(
                ApiRequest::get("/user/questions?filter=answered")
                    .with_header("XXX-SToken", "tok"),
            )
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, json!([{"order": 1}]));

        let raw = request_rx.await.unwrap();
        assert!(raw.starts_with("GET /user/questions?filter=answered HTTP/1.1"));
        assert!(raw.to_ascii_lowercase().contains("xxx-stoken: tok"));
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let (base, request_rx) = serve_once("200 OK", "").await;
        let client = ReqwestHttpClient::new(format!("{}/", base), Duration::from_secs(5)).unwrap();

        let response = client
            .send(
                ApiRequest::post("/user/respondQuestion")
                    .with_data(json!({"questionid": 1, "response": "hi", "visibility": true}))
                    .with_header("Content-Type", "application/json"),
            )
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, Value::Null);

        let raw = request_rx.await.unwrap();
        assert!(raw.starts_with("POST /user/respondQuestion HTTP/1.1"));
        assert!(raw.contains(r#""response":"hi""#));
    }

    #[tokio::test]
    async fn test_error_status_keeps_text_body() {
        let (base, _rx) = serve_once("401 Unauthorized", "bad token").await;
        let client = ReqwestHttpClient::new(base, Duration::from_secs(5)).unwrap();

        let response = client
            .send(ApiRequest::delete("/user/deleteQuestion?questionId=3"))
            .await
            .unwrap();

        assert_eq!(response.status, 401);
        assert_eq!(response.body, json!("bad token"));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            ReqwestHttpClient::new(format!("http://{}", addr), Duration::from_secs(5)).unwrap();
        let result = client.send(ApiRequest::get("/user/questions")).await;
        assert!(matches!(result, Err(TransportError::Connection(_))));
    }

    #[test]
    fn test_decode_body_variants() {
        assert_eq!(decode_body(b""), Value::Null);
        assert_eq!(decode_body(b"  \n"), Value::Null);
        assert_eq!(decode_body(b"{\"a\":1}"), json!({"a": 1}));
        assert_eq!(decode_body(b"OK"), json!("OK"));
    }
}
