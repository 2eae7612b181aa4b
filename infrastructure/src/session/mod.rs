//! Persistent session storage.

mod file_store;

pub use file_store::FileSessionStore;
