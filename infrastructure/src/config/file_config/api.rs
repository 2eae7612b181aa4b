//! Backend API configuration from TOML (`[api]` section)

use echoq_application::ApiParams;
use echoq_application::config::api_params::{
    DEFAULT_LIST_PATH, DEFAULT_SEARCH_PATH, DEFAULT_TOKEN_HEADER,
};
use echoq_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Raw API configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Root URL of the backend; request paths are joined onto it
    pub base_url: String,
    /// Header carrying the session token
    pub token_header: String,
    /// Request timeout in seconds (0 falls back to the default)
    pub timeout_secs: u64,
    pub list_path: String,
    pub search_path: String,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token_header: DEFAULT_TOKEN_HEADER.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            list_path: DEFAULT_LIST_PATH.to_string(),
            search_path: DEFAULT_SEARCH_PATH.to_string(),
        }
    }
}

impl FileApiConfig {
    pub fn timeout(&self) -> Duration {
        match self.timeout_secs {
            0 => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            secs => Duration::from_secs(secs),
        }
    }

    pub fn to_api_params(&self) -> ApiParams {
        let header = if self.token_header.trim().is_empty() {
            DEFAULT_TOKEN_HEADER
        } else {
            self.token_header.trim()
        };
        ApiParams::default()
            .with_token_header(header)
            .with_list_path(&self.list_path)
            .with_search_path(&self.search_path)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "api.base_url".to_string(),
                },
                "api.base_url is empty",
            ));
        } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidUrl {
                    field: "api.base_url".to_string(),
                    value: base_url.to_string(),
                },
                format!("api.base_url: '{}' is not an http(s) URL", base_url),
            ));
        }

        if self.token_header.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyValue {
                    field: "api.token_header".to_string(),
                },
                format!(
                    "api.token_header is empty, falling back to '{}'",
                    DEFAULT_TOKEN_HEADER
                ),
            ));
        }

        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroDuration {
                    field: "api.timeout_secs".to_string(),
                },
                format!(
                    "api.timeout_secs is 0, falling back to {}s",
                    DEFAULT_TIMEOUT_SECS
                ),
            ));
        }

        for (field, value) in [
            ("api.list_path", &self.list_path),
            ("api.search_path", &self.search_path),
        ] {
            if !value.starts_with('/') {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::RelativePath {
                        field: field.to_string(),
                        value: value.clone(),
                    },
                    format!("{}: '{}' should start with '/'", field, value),
                ));
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(FileApiConfig::default().validate().is_empty());
    }

    #[test]
    fn test_non_http_base_url_is_error() {
        let config = FileApiConfig {
            base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }

    #[test]
    fn test_zero_timeout_falls_back() {
        let config = FileApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let issues = config.validate();
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::ZeroDuration { .. }
        ));
        assert!(!issues[0].is_error());
    }

    #[test]
    fn test_relative_path_is_warning() {
        let config = FileApiConfig {
            search_path: "user/search".to_string(),
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }

    #[test]
    fn test_api_params_carry_paths() {
        let config = FileApiConfig {
            token_header: "X-Token".to_string(),
            list_path: "/v2/questions".to_string(),
            ..Default::default()
        };
        let params = config.to_api_params();
        assert_eq!(params.token_header, "X-Token");
        assert_eq!(params.list_path, "/v2/questions");
        assert_eq!(params.search_path, DEFAULT_SEARCH_PATH);
    }
}
