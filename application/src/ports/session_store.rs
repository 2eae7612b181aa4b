//! Session store port
//!
//! Persistent key/value storage holding the session token. The feed only
//! reads it; the `token` CLI command writes and clears it.

use echoq_domain::SessionToken;
use std::sync::Mutex;
use thiserror::Error;

/// Storage key the session token lives under
pub const TOKEN_KEY: &str = "token";

/// Errors from session storage adapters
#[derive(Error, Debug)]
pub enum SessionStoreError {
    #[error("Session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session storage is corrupt: {0}")]
    Corrupt(String),
}

/// Persistent storage of the session token
pub trait SessionStorePort: Send + Sync {
    /// Current token, or `None` when absent
    fn get(&self) -> Option<SessionToken>;

    /// Store a token, replacing the previous one
    fn set(&self, token: &SessionToken) -> Result<(), SessionStoreError>;

    /// Remove the stored token
    fn clear(&self) -> Result<(), SessionStoreError>;
}

/// Process-local store, used when no persistent storage is wanted
#[derive(Default)]
pub struct InMemorySessionStore {
    token: Mutex<Option<SessionToken>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: SessionToken) -> Self {
        Self {
            token: Mutex::new(Some(token)),
        }
    }
}

impl SessionStorePort for InMemorySessionStore {
    fn get(&self) -> Option<SessionToken> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    fn set(&self, token: &SessionToken) -> Result<(), SessionStoreError> {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.clone());
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
        Ok(())
    }
}
