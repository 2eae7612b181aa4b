//! API parameters: how requests to the backend are shaped.

use serde::{Deserialize, Serialize};

/// Default header carrying the session token
pub const DEFAULT_TOKEN_HEADER: &str = "XXX-SToken";

/// Default path of the question listing endpoint
pub const DEFAULT_LIST_PATH: &str = "/user/questions";

/// Default path of the question search endpoint
pub const DEFAULT_SEARCH_PATH: &str = "/user/searchQuestion";

/// Request shaping parameters shared by every use case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiParams {
    /// Header name the session token is sent under.
    pub token_header: String,
    /// Path of the listing endpoint (`?filter=` is appended).
    pub list_path: String,
    /// Path of the search endpoint (`?term=&filter=` is appended).
    pub search_path: String,
}

impl Default for ApiParams {
    fn default() -> Self {
        Self {
            token_header: DEFAULT_TOKEN_HEADER.to_string(),
            list_path: DEFAULT_LIST_PATH.to_string(),
            search_path: DEFAULT_SEARCH_PATH.to_string(),
        }
    }
}

impl ApiParams {
    // ==================== Builder Methods ====================

    pub fn with_token_header(mut self, header: impl Into<String>) -> Self {
        self.token_header = header.into();
        self
    }

    pub fn with_list_path(mut self, path: impl Into<String>) -> Self {
        self.list_path = path.into();
        self
    }

    pub fn with_search_path(mut self, path: impl Into<String>) -> Self {
        self.search_path = path.into();
        self
    }
}
