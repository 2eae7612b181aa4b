//! Filter value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Selects which subset of questions is requested and displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Questions that already have a response
    Answered,
    /// Questions still waiting for a response (the default feed)
    #[default]
    Unanswered,
}

impl Filter {
    /// Wire value used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::Answered => "answered",
            Filter::Unanswered => "unanswered",
        }
    }

    /// The other filter
    pub fn toggled(self) -> Self {
        match self {
            Filter::Answered => Filter::Unanswered,
            Filter::Unanswered => Filter::Answered,
        }
    }

    pub fn all() -> [Filter; 2] {
        [Filter::Unanswered, Filter::Answered]
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "answered" => Ok(Filter::Answered),
            "unanswered" => Ok(Filter::Unanswered),
            _ => Err(DomainError::InvalidFilter(s.to_string())),
        }
    }
}
