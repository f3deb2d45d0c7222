//! # Credential storage
//!
//! [`TokenStore`] is the single place the app keeps its bearer credential.
//! Exactly one token exists per installation; saving replaces any prior
//! value, and clearing an absent token is not an error.
//!
//! Implementations:
//!
//! | Store | Backing | Used for |
//! |-------|---------|----------|
//! | [`FileTokenStore`] | single file under a base directory | desktop and mobile persistence across restarts |
//! | [`MemoryTokenStore`] | `Arc<Mutex<Option<String>>>` | tests and ephemeral sessions |
//!
//! ## Platform data directories
//!
//! [`FileTokenStore::default_base_dir`] builds on [`dirs::data_dir()`]:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS / iOS | `~/Library/Application Support/atlas/` |
//! | Linux | `~/.local/share/atlas/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\atlas\` |
//! | Android | App-internal storage (via `dirs`) |

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Name of the file holding the credential inside the base directory.
const TOKEN_FILE: &str = "auth_token";

/// The persistence medium failed. "Token not present" is never an error;
/// it is the `Ok(None)` case of [`TokenStore::get_token`].
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to {op} credential: {source}")]
    Io {
        op: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    fn io(op: &'static str, source: std::io::Error) -> Self {
        Self::Io { op, source }
    }
}

/// Async interface for storing and retrieving the bearer credential.
pub trait TokenStore {
    /// Persist the credential, replacing any prior value.
    fn save_token(
        &self,
        token: &str,
    ) -> impl std::future::Future<Output = Result<(), StorageError>>;
    /// The persisted credential, or `None` if none exists.
    fn get_token(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<String>, StorageError>>;
    /// Remove the stored credential. Idempotent.
    fn clear_token(&self) -> impl std::future::Future<Output = Result<(), StorageError>>;
}

/// Filesystem-backed TokenStore for desktop and mobile persistence.
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    base: PathBuf,
}

impl FileTokenStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Platform-appropriate base directory (`<data_dir>/atlas/`), or `None`
    /// when the platform exposes no data directory.
    pub fn default_base_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("atlas"))
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(TOKEN_FILE)
    }
}

impl TokenStore for FileTokenStore {
    async fn save_token(&self, token: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.base).map_err(|e| StorageError::io("save", e))?;
        std::fs::write(self.token_path(), token).map_err(|e| StorageError::io("save", e))
    }

    async fn get_token(&self) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.token_path()) {
            Ok(token) => Ok(Some(token)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io("read", e)),
        }
    }

    async fn clear_token(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(self.token_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io("clear", e)),
        }
    }
}

/// In-memory TokenStore for testing and sessions that should not persist.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    async fn save_token(&self, token: &str) -> Result<(), StorageError> {
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    async fn get_token(&self) -> Result<Option<String>, StorageError> {
        Ok(self.token.lock().unwrap().clone())
    }

    async fn clear_token(&self) -> Result<(), StorageError> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}
