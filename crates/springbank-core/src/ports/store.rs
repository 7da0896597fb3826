//! Durable session storage port.

use async_trait::async_trait;
use springbank_shared::dto::AuthResponse;

/// Session storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("session storage I/O failed: {0}")]
    Io(String),

    #[error("stored session is corrupt: {0}")]
    Corrupt(String),
}

/// Durable storage for the session, keyed the way the original browser
/// storage was: `token` as a raw string, `user` as a serialized profile.
///
/// Implementations must treat missing entries as `None`, and `clear`
/// must be idempotent.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load_token(&self) -> Result<Option<String>, StoreError>;

    async fn store_token(&self, token: &str) -> Result<(), StoreError>;

    async fn load_user(&self) -> Result<Option<AuthResponse>, StoreError>;

    async fn store_user(&self, user: &AuthResponse) -> Result<(), StoreError>;

    /// Remove both the token and the user profile.
    async fn clear(&self) -> Result<(), StoreError>;
}
