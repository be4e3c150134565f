//! Session persistence.
//!
//! The only durable client-side state is the token pair and the decoded user.
//! [`SessionStore`] abstracts where it lives; [`FileSessionStore`] plays the
//! role browser storage plays for the web console.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConsoleError, ConsoleResult};
use crate::models::User;

/// The persisted session: access token, refresh token, and user claims.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    /// Bearer token attached to every request.
    pub access_token: String,
    /// Refresh token, if the service issued one.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Claims decoded from the access token.
    pub user: User,
}

impl std::fmt::Debug for StoredSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredSession")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
            .field("user", &self.user)
            .finish()
    }
}

/// Storage backend for the session.
pub trait SessionStore: Send + Sync {
    /// Loads the stored session, if any.
    fn load(&self) -> ConsoleResult<Option<StoredSession>>;

    /// Replaces the stored session.
    fn save(&self, session: &StoredSession) -> ConsoleResult<()>;

    /// Removes the stored session. Clearing an empty store is not an error.
    fn clear(&self) -> ConsoleResult<()>;
}

/// Process-local store; the session ends with the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<StoredSession>>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `session`.
    pub fn with_session(session: StoredSession) -> Self {
        Self {
            slot: Mutex::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> ConsoleResult<Option<StoredSession>> {
        Ok(self.slot.lock().clone())
    }

    fn save(&self, session: &StoredSession) -> ConsoleResult<()> {
        *self.slot.lock() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> ConsoleResult<()> {
        self.slot.lock().take();
        Ok(())
    }
}

/// JSON file store.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, action: &str, error: std::io::Error) -> ConsoleError {
        ConsoleError::Session {
            message: format!("failed to {} {}: {}", action, self.path.display(), error),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> ConsoleResult<Option<StoredSession>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error("read", e))?;
        let session = serde_json::from_str(&content).map_err(|e| ConsoleError::Session {
            message: format!("corrupt session file {}: {}", self.path.display(), e),
        })?;
        Ok(Some(session))
    }

    fn save(&self, session: &StoredSession) -> ConsoleResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error("create directory for", e))?;
        }
        let content = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, content).map_err(|e| self.io_error("write", e))?;
        debug!(path = %self.path.display(), "Session persisted");
        Ok(())
    }

    fn clear(&self) -> ConsoleResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error("remove", e)),
        }
    }
}
