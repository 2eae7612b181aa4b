//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`text`]: display helpers for question text

pub mod error;
pub mod text;
