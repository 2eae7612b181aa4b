//! HTTP Request Helper
//!
//! Every backend call goes through [`RequestHelper::make_request`]. It
//! attaches the session token and the JSON content type, then hands the
//! request to the [`HttpClientPort`]. Transport failures never escape:
//! they come back as a response with status `0`, which callers treat like
//! any other non-200 status.

use crate::config::ApiParams;
use crate::ports::http_client::{ApiRequest, ApiResponse, HttpClientPort};
use crate::ports::session_store::SessionStorePort;
use std::sync::Arc;
use tracing::{debug, warn};

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Clone)]
pub struct RequestHelper {
    client: Arc<dyn HttpClientPort>,
    session: Arc<dyn SessionStorePort>,
    params: ApiParams,
}

impl RequestHelper {
    pub fn new(
        client: Arc<dyn HttpClientPort>,
        session: Arc<dyn SessionStorePort>,
        params: ApiParams,
    ) -> Self {
        Self {
            client,
            session,
            params,
        }
    }

    pub fn params(&self) -> &ApiParams {
        &self.params
    }

    /// Send `request` with the session headers attached.
    ///
    /// A missing token is sent as an empty header value; the backend
    /// answers with a non-200 status in that case.
    pub async fn make_request(&self, request: ApiRequest) -> ApiResponse {
        let token = self
            .session
            .get()
            .map(|t| t.as_str().to_string())
            .unwrap_or_default();

        let request = request
            .with_header(self.params.token_header.clone(), token)
            .with_header(CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE);

        let method = request.method;
        let path = request.path.clone();
        debug!("{} {}", method, path);

        match self.client.send(request).await {
            Ok(response) => {
                debug!("{} {} -> {}", method, path, response.status);
                response
            }
            Err(e) => {
                warn!("{} {} failed: {}", method, path, e);
                ApiResponse::no_response()
            }
        }
    }
}
