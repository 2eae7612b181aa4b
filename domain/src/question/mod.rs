//! Question feed concepts
//!
//! - [`entities::Question`]: one question card as delivered by the backend
//! - [`entities::QuestionId`]: backend identifier of a question
//! - [`filter::Filter`]: answered/unanswered subset selector

pub mod asked_at;
pub mod entities;
pub mod filter;

pub use entities::{Question, QuestionId};
pub use filter::Filter;
