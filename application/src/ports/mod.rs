//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod http_client;
pub mod session_store;
pub mod ui_event;
