//! Session persistence

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, warn};

use super::SessionContext;
use crate::error::{AppError, AppResult};

/// Persists the session between launches
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Previously saved session, if any
    async fn load(&self) -> AppResult<Option<SessionContext>>;

    async fn save(&self, session: &SessionContext) -> AppResult<()>;

    async fn clear(&self) -> AppResult<()>;
}

/// JSON file store
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> AppResult<Option<SessionContext>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AppError::Session(e.to_string())),
        };

        match serde_json::from_slice(&bytes) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                // A corrupt file means signed out, not a hard failure
                warn!(path = %self.path.display(), error = %e, "Discarding unreadable session file");
                Ok(None)
            }
        }
    }

    async fn save(&self, session: &SessionContext) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::Session(e.to_string()))?;
        }

        let bytes = serde_json::to_vec(session)?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| AppError::Session(e.to_string()))?;

        debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Session(e.to_string())),
        }
    }
}

/// In-process store, for tests and ephemeral clients
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<SessionContext>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> AppResult<Option<SessionContext>> {
        Ok(self.session.lock().clone())
    }

    async fn save(&self, session: &SessionContext) -> AppResult<()> {
        *self.session.lock() = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        *self.session.lock() = None;
        Ok(())
    }
}
