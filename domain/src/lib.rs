//! Domain layer for echoq
//!
//! This crate contains the entities and value objects of the moderation
//! client. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Question**: an anonymous question posted to the user's profile
//! - **Filter**: selects the answered or unanswered subset of questions
//! - **Notification**: the single transient status message shown after an action
//! - **Moderation**: the three card actions (edit, visibility toggle, delete)
//!   and the fixed feedback texts and refetch targets tied to each

pub mod config;
pub mod core;
pub mod moderation;
pub mod notification;
pub mod question;
pub mod session;

// Re-export commonly used types
pub use config::{
    OutputFormat,
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use core::{error::DomainError, text::truncate};
pub use moderation::{CardIntent, ModerationAction};
pub use notification::{Notification, NotificationStatus};
pub use question::{Filter, Question, QuestionId};
pub use session::SessionToken;
