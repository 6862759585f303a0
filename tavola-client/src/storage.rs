//! Session token storage
//!
//! The token is the only thing persisted on the client. It is read when an
//! [`HttpClient`](crate::HttpClient) is built; writing it does not affect
//! clients that already exist.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use crate::error::ClientResult;

/// File name of the token inside the token directory
pub const TOKEN_FILE: &str = "session.json";

/// Persistent storage for the session token.
pub trait TokenStore: Debug + Send + Sync {
    /// Current token. Missing or empty tokens read as `None`.
    fn load(&self) -> Option<String>;

    /// Replace the stored token.
    fn save(&self, token: &str) -> ClientResult<()>;

    /// Remove the stored token.
    fn clear(&self) -> ClientResult<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredToken {
    token: String,
}

/// Token kept in a JSON file
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store the token at `{dir}/session.json`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(TOKEN_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }
        let stored = fs::read_to_string(&self.path)
            .map_err(|e| e.to_string())
            .and_then(|json| {
                serde_json::from_str::<StoredToken>(&json).map_err(|e| e.to_string())
            });
        match stored {
            Ok(stored) if !stored.token.is_empty() => Some(stored.token),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Unreadable token file");
                None
            }
        }
    }

    fn save(&self, token: &str) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&StoredToken {
            token: token.to_string(),
        })?;
        fs::write(&self.path, json)?;
        // owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// Token kept in memory, for tests and embedded use
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .filter(|t| !t.is_empty())
    }

    fn save(&self, token: &str) -> ClientResult<()> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
