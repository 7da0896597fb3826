//! In-memory session store - used in tests and for ephemeral sessions.

use async_trait::async_trait;
use tokio::sync::RwLock;

use springbank_core::ports::{SessionStore, StoreError};
use springbank_shared::dto::AuthResponse;

#[derive(Default)]
struct Slots {
    token: Option<String>,
    user: Option<AuthResponse>,
}

/// Session storage backed by process memory. Note: the session is lost
/// on process exit; use [`FileSessionStore`] for durable sessions.
///
/// [`FileSessionStore`]: super::FileSessionStore
#[derive(Default)]
pub struct InMemorySessionStore {
    slots: RwLock<Slots>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load_token(&self) -> Result<Option<String>, StoreError> {
        Ok(self.slots.read().await.token.clone())
    }

    async fn store_token(&self, token: &str) -> Result<(), StoreError> {
        self.slots.write().await.token = Some(token.to_string());
        Ok(())
    }

    async fn load_user(&self) -> Result<Option<AuthResponse>, StoreError> {
        Ok(self.slots.read().await.user.clone())
    }

    async fn store_user(&self, user: &AuthResponse) -> Result<(), StoreError> {
        self.slots.write().await.user = Some(user.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let mut slots = self.slots.write().await;
        slots.token = None;
        slots.user = None;
        Ok(())
    }
}
