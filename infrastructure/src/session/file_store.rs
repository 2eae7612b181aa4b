//! File-backed [`SessionStorePort`]
//!
//! The storage file is a flat JSON object of string keys to string values,
//! so other keys written next to the token survive a `set` or `clear`.

use echoq_application::ports::session_store::{SessionStoreError, SessionStorePort, TOKEN_KEY};
use echoq_domain::SessionToken;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

type Entries = BTreeMap<String, String>;

pub struct FileSessionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries, SessionStoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(Entries::new());
        }
        serde_json::from_str(&content).map_err(|e| SessionStoreError::Corrupt(e.to_string()))
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| SessionStoreError::Corrupt(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    fn update(&self, f: impl FnOnce(&mut Entries)) -> Result<(), SessionStoreError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(SessionStoreError::Corrupt(reason)) => {
                warn!(
                    "Replacing unreadable session file {}: {}",
                    self.path.display(),
                    reason
                );
                Entries::new()
            }
            Err(e) => return Err(e),
        };
        f(&mut entries);
        self.write_entries(&entries)
    }
}

impl SessionStorePort for FileSessionStore {
    fn get(&self) -> Option<SessionToken> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        match self.read_entries() {
            Ok(mut entries) => entries
                .remove(TOKEN_KEY)
                .and_then(|raw| SessionToken::new(raw).ok()),
            Err(e) => {
                warn!("Could not read session file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn set(&self, token: &SessionToken) -> Result<(), SessionStoreError> {
        debug!("Storing session token in {}", self.path.display());
        self.update(|entries| {
            entries.insert(TOKEN_KEY.to_string(), token.as_str().to_string());
        })
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        debug!("Clearing session token in {}", self.path.display());
        self.update(|entries| {
            entries.remove(TOKEN_KEY);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileSessionStore {
        FileSessionStore::new(dir.path().join("nested").join("storage.json"))
    }

    #[test]
    fn test_missing_file_has_no_token() {
        let dir = TempDir::new().unwrap();
        assert!(store_in(&dir).get().is_none());
    }

    #[test]
    fn test_set_then_get() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.set(&SessionToken::new("abc123").unwrap()).unwrap();

        let reopened = store_in(&dir);
        assert_eq!(reopened.get().unwrap().as_str(), "abc123");

        let raw = std::fs::read_to_string(reopened.path()).unwrap();
        assert!(raw.contains("\"token\""));
    }

    #[test]
    fn test_clear_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), r#"{"token":"t","theme":"dark"}"#).unwrap();

        store.clear().unwrap();

        assert!(store.get().is_none());
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"theme\""));
    }

    #[test]
    fn test_corrupt_file_reads_as_empty_and_is_replaced() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "not json").unwrap();

        assert!(store.get().is_none());
        store.set(&SessionToken::new("fresh").unwrap()).unwrap();
        assert_eq!(store.get().unwrap().as_str(), "fresh");
    }

    #[test]
    fn test_blank_stored_value_is_not_a_token() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), r#"{"token":"   "}"#).unwrap();

        assert!(store.get().is_none());
    }
}
