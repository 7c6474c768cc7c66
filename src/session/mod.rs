//! Session ownership for the console.
//!
//! Exactly zero or one active session at a time: an opaque bearer token
//! plus the cached profile returned by login. The request layer reads it
//! synchronously before every authenticated call; only login and logout
//! write it. Storage is injectable so tests never touch the real data dir.

use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::UserProfile;

/// An authenticated session: the bearer token and the profile it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

/// Failure writing or clearing persisted session state.
///
/// Reads never fail: a missing or corrupt session document reads as
/// "logged out" (`current()` returns `None`).
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("session encoding: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("session store lock poisoned")]
    LockPoisoned,
}

/// Durable per-installation session storage.
pub trait SessionStore: Send + Sync {
    /// Persist a session, overwriting any prior one.
    fn save(&self, session: &Session) -> Result<(), SessionError>;

    /// The stored session, if any. Never errors.
    fn current(&self) -> Option<Session>;

    /// Remove any stored session. Clearing an empty store is a no-op.
    fn clear(&self) -> Result<(), SessionError>;
}

// ═══════════════════════════════════════════════════════════
// MemoryStore — process-local, for tests and embedding
// ═══════════════════════════════════════════════════════════

/// In-memory store. One writer context at a time in practice; the mutex
/// makes the store safe to share behind an `Arc` regardless.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Option<Session>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn save(&self, session: &Session) -> Result<(), SessionError> {
        let mut guard = self.inner.lock().map_err(|_| SessionError::LockPoisoned)?;
        *guard = Some(session.clone());
        Ok(())
    }

    fn current(&self) -> Option<Session> {
        self.inner.lock().ok().and_then(|guard| guard.clone())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut guard = self.inner.lock().map_err(|_| SessionError::LockPoisoned)?;
        *guard = None;
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════
// FileStore — JSON document at a fixed path
// ═══════════════════════════════════════════════════════════

/// File-backed store: one JSON document at a fixed path, the desktop
/// analogue of the browser's tab-local storage keys.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store at the default location under the application data dir.
    pub fn new() -> Self {
        Self::at(crate::config::session_file())
    }

    /// Store at an explicit path (tests point this at a temp dir).
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for FileStore {
    fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let doc = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, doc)?;
        Ok(())
    }

    fn current(&self) -> Option<Session> {
        let doc = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&doc) {
            Ok(session) => Some(session),
            Err(err) => {
                // Corrupt session document reads as logged-out.
                tracing::debug!(error = %err, path = %self.path.display(), "unreadable session document");
                None
            }
        }
    }

    fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
