//! Application layer for echoq
//!
//! This crate contains the feed/moderation workflow, port definitions and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod notification;
pub mod ports;
pub mod use_cases;
pub mod util;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use config::{ApiParams, FeedParams};
pub use notification::NotificationChannel;
pub use ports::{
    http_client::{ApiRequest, ApiResponse, HttpClientPort, HttpMethod, TransportError},
    session_store::{InMemorySessionStore, SessionStoreError, SessionStorePort, TOKEN_KEY},
    ui_event::UiEvent,
};
pub use use_cases::feed_controller::{FeedCompletion, FeedController, FeedWork};
pub use use_cases::moderate_question::{ModerateQuestionUseCase, ModerationOutcome};
pub use use_cases::question_collection::{
    ApplyOutcome, FetchCompletion, FetchError, FetchTicket, QuestionCollection, QuestionQuery,
};
pub use use_cases::request_helper::RequestHelper;
pub use util::debounce::Debouncer;
