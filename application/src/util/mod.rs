//! Shared utilities for the application layer.

pub mod debounce;
