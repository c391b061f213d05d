//! Session persistence between invocations
//!
//! The CLI keeps the explicit [`Session`] in a small JSON file so a role
//! picked or a user signed in by one command is visible to the next.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use core_kernel::{CoreError, Session};

/// JSON file holding the session
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored session, or an empty one when no file exists yet
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Session` if the file cannot be read or parsed
    pub async fn load(&self) -> Result<Session, CoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No stored session");
                return Ok(Session::new());
            }
            Err(e) => return Err(self.error("read", e)),
        };

        serde_json::from_slice(&bytes).map_err(|e| self.error("parse", e))
    }

    /// Writes the session, replacing any stored one
    pub async fn save(&self, session: &Session) -> Result<(), CoreError> {
        let json = serde_json::to_vec_pretty(session).map_err(|e| self.error("encode", e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.error("create directory for", e))?;
        }

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| self.error("write", e))?;

        debug!(path = %self.path.display(), role = ?session.role, "Session saved");
        Ok(())
    }

    /// Removes the stored session (logout); a missing file is not an error
    pub async fn clear(&self) -> Result<(), CoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.error("remove", e)),
        }
    }

    fn error(&self, action: &str, error: impl std::fmt::Display) -> CoreError {
        CoreError::session(format!(
            "Cannot {} session file {}: {}",
            action,
            self.path.display(),
            error
        ))
    }
}
