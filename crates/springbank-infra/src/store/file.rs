//! File-backed session store - the durable analog of the browser's
//! local storage.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use springbank_core::ports::{SessionStore, StoreError};
use springbank_shared::dto::AuthResponse;

const TOKEN_FILE: &str = "token";
const USER_FILE: &str = "user.json";

/// Persists the session under a directory: the token as a raw string
/// and the user profile as JSON, matching the two storage keys the
/// browser front-end used.
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Platform data directory, e.g. `~/.local/share/springbank`.
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("springbank")
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }

    fn user_path(&self) -> PathBuf {
        self.dir.join(USER_FILE)
    }

    async fn read_optional(path: &Path) -> Result<Option<String>, StoreError> {
        match tokio::fs::read_to_string(path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e.to_string())),
        }
    }

    async fn write(&self, path: &Path, contents: &str) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;
        tokio::fs::write(path, contents)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))
    }

    async fn remove(path: &Path) -> Result<(), StoreError> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e.to_string())),
        }
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load_token(&self) -> Result<Option<String>, StoreError> {
        Ok(Self::read_optional(&self.token_path())
            .await?
            .map(|t| t.trim_end().to_string())
            .filter(|t| !t.is_empty()))
    }

    async fn store_token(&self, token: &str) -> Result<(), StoreError> {
        self.write(&self.token_path(), token).await
    }

    async fn load_user(&self) -> Result<Option<AuthResponse>, StoreError> {
        match Self::read_optional(&self.user_path()).await? {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| StoreError::Corrupt(e.to_string())),
            None => Ok(None),
        }
    }

    async fn store_user(&self, user: &AuthResponse) -> Result<(), StoreError> {
        let json = serde_json::to_string(user).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        self.write(&self.user_path(), &json).await
    }

    async fn clear(&self) -> Result<(), StoreError> {
        Self::remove(&self.token_path()).await?;
        Self::remove(&self.user_path()).await
    }
}
