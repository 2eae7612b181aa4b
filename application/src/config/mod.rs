//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`ApiParams`]: endpoint paths and the session header name
//! - [`FeedParams`]: debounce and notification timing of the feed

pub mod api_params;
pub mod feed_params;

pub use api_params::ApiParams;
pub use feed_params::FeedParams;
