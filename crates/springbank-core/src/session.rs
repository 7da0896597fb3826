//! Session state machine - the single source of truth for "who is
//! logged in".
//!
//! Explicitly owned and injectable (constructed from its ports) rather
//! than a module-level singleton, so it can be tested in isolation and
//! torn down with the owning scope.

use std::sync::Arc;

use tokio::sync::RwLock;

use springbank_shared::dto::{AuthResponse, LoginRequest, RegisterRequest, Role};

use crate::domain::{Session, SessionSnapshot};
use crate::error::SessionError;
use crate::ports::{AuthGateway, SessionStore};

struct SessionState {
    user: Option<Session>,
    loading: bool,
}

/// Owns the live session and the durable storage behind it.
///
/// All mutation goes through `login`/`register`/`logout`; consumers get
/// read-only [`SessionSnapshot`] projections. Callers should treat the
/// three mutators as mutually exclusive in intent - two concurrent
/// logins have last-writer-wins behavior.
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    gateway: Arc<dyn AuthGateway>,
    state: RwLock<SessionState>,
}

impl SessionManager {
    /// A new manager starts in the `loading` state; call [`init`] to
    /// rehydrate from storage before consulting any guard.
    ///
    /// [`init`]: SessionManager::init
    pub fn new(store: Arc<dyn SessionStore>, gateway: Arc<dyn AuthGateway>) -> Self {
        Self {
            store,
            gateway,
            state: RwLock::new(SessionState {
                user: None,
                loading: true,
            }),
        }
    }

    /// Rehydrate the session from durable storage.
    ///
    /// The state is populated only when both a stored profile and a
    /// non-empty token are present. `loading` flips to false exactly
    /// once; repeated calls are no-ops.
    pub async fn init(&self) -> Result<(), SessionError> {
        {
            let state = self.state.read().await;
            if !state.loading {
                return Ok(());
            }
        }

        let stored_user = self.store.load_user().await?;
        let stored_token = self.store.load_token().await?;

        let mut state = self.state.write().await;
        if state.loading {
            if let (Some(profile), Some(token)) = (stored_user, stored_token) {
                if !token.is_empty() {
                    tracing::debug!(username = %profile.username, "session rehydrated");
                    state.user = Some(Session::rehydrate(profile, token));
                }
            }
            state.loading = false;
        }
        Ok(())
    }

    /// Authenticate against the remote API and persist the session.
    ///
    /// On failure the prior state and storage are left untouched - there
    /// are no partial updates.
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, SessionError> {
        let auth = self.gateway.login(request).await?;
        self.install(auth).await
    }

    /// Register a new customer and persist the resulting session.
    ///
    /// The password-confirmation check happens before any network call
    /// so a mismatch never costs a round trip.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Session, SessionError> {
        if request.password != request.confirm_password {
            return Err(SessionError::PasswordMismatch);
        }
        let auth = self.gateway.register(request).await?;
        self.install(auth).await
    }

    /// Clear the in-process state and durable storage. Idempotent.
    pub async fn logout(&self) -> Result<(), SessionError> {
        {
            let mut state = self.state.write().await;
            state.user = None;
        }
        self.store.clear().await?;
        tracing::debug!("session cleared");
        Ok(())
    }

    /// Read-only projection of the current state.
    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.read().await;
        SessionSnapshot {
            user: state.user.clone(),
            loading: state.loading,
        }
    }

    /// Token presence is the sole authentication predicate.
    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.user.is_some()
    }

    pub async fn role(&self) -> Option<Role> {
        self.state.read().await.user.as_ref().map(|u| u.role)
    }

    pub async fn current_user(&self) -> Option<Session> {
        self.state.read().await.user.clone()
    }

    /// Persist the auth response, then swap it into the live state.
    async fn install(&self, auth: AuthResponse) -> Result<Session, SessionError> {
        self.store.store_token(&auth.token).await?;
        self.store.store_user(&auth).await?;

        let session = Session::from_auth(auth);
        let mut state = self.state.write().await;
        state.user = Some(session.clone());
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::ports::{ApiError, StoreError};

    /// In-test stand-in for durable storage.
    #[derive(Default)]
    struct FakeStore {
        inner: RwLock<(Option<String>, Option<AuthResponse>)>,
    }

    #[async_trait]
    impl SessionStore for FakeStore {
        async fn load_token(&self) -> Result<Option<String>, StoreError> {
            Ok(self.inner.read().await.0.clone())
        }

        async fn store_token(&self, token: &str) -> Result<(), StoreError> {
            self.inner.write().await.0 = Some(token.to_string());
            Ok(())
        }

        async fn load_user(&self) -> Result<Option<AuthResponse>, StoreError> {
            Ok(self.inner.read().await.1.clone())
        }

        async fn store_user(&self, user: &AuthResponse) -> Result<(), StoreError> {
            self.inner.write().await.1 = Some(user.clone());
            Ok(())
        }

        async fn clear(&self) -> Result<(), StoreError> {
            *self.inner.write().await = (None, None);
            Ok(())
        }
    }

    /// Gateway stub that counts calls and answers with a canned result.
    struct FakeGateway {
        response: Result<AuthResponse, u16>,
        calls: AtomicUsize,
    }

    impl FakeGateway {
        fn ok(auth: AuthResponse) -> Self {
            Self {
                response: Ok(auth),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                response: Err(status),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn answer(&self) -> Result<AuthResponse, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.response {
                Ok(auth) => Ok(auth.clone()),
                Err(status) => Err(ApiError::Status {
                    status: *status,
                    message: "Invalid username or password".to_string(),
                }),
            }
        }
    }

    #[async_trait]
    impl AuthGateway for FakeGateway {
        async fn login(&self, _request: &LoginRequest) -> Result<AuthResponse, ApiError> {
            self.answer()
        }

        async fn register(&self, _request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
            self.answer()
        }
    }

    fn alice() -> AuthResponse {
        AuthResponse {
            token: "t1".into(),
            token_type: "Bearer".into(),
            id: 1,
            username: "alice".into(),
            email: "a@x.com".into(),
            role: Role::Customer,
        }
    }

    fn login_request() -> LoginRequest {
        LoginRequest {
            username: "alice".into(),
            password: "secret".into(),
        }
    }

    fn register_request(confirm: &str) -> RegisterRequest {
        RegisterRequest {
            username: "alice".into(),
            email: "a@x.com".into(),
            password: "abc123".into(),
            confirm_password: confirm.into(),
            first_name: "Alice".into(),
            last_name: "Moss".into(),
            phone_number: None,
            address: "1 Main St".into(),
        }
    }

    #[tokio::test]
    async fn login_populates_state_and_storage() {
        let store = Arc::new(FakeStore::default());
        let manager = SessionManager::new(store.clone(), Arc::new(FakeGateway::ok(alice())));
        manager.init().await.unwrap();

        let session = manager.login(&login_request()).await.unwrap();

        assert_eq!(session.username, "alice");
        assert_eq!(session.role, Role::Customer);
        assert!(manager.is_authenticated().await);
        assert_eq!(manager.role().await, Some(Role::Customer));

        assert_eq!(store.load_token().await.unwrap().as_deref(), Some("t1"));
        assert_eq!(store.load_user().await.unwrap(), Some(alice()));
    }

    #[tokio::test]
    async fn reload_rehydrates_identical_session() {
        let store = Arc::new(FakeStore::default());
        let manager = SessionManager::new(store.clone(), Arc::new(FakeGateway::ok(alice())));
        manager.init().await.unwrap();
        let original = manager.login(&login_request()).await.unwrap();

        // A fresh manager over the same store simulates a reload.
        let reloaded = SessionManager::new(store, Arc::new(FakeGateway::failing(500)));
        reloaded.init().await.unwrap();

        assert_eq!(reloaded.current_user().await, Some(original));
        assert!(!reloaded.snapshot().await.loading);
    }

    #[tokio::test]
    async fn failed_login_leaves_prior_state_unchanged() {
        let store = Arc::new(FakeStore::default());

        // Establish a logged-in state first.
        let manager = SessionManager::new(store.clone(), Arc::new(FakeGateway::ok(alice())));
        manager.init().await.unwrap();
        manager.login(&login_request()).await.unwrap();

        // Swap in a failing gateway over the same store and state shape.
        let manager = SessionManager::new(store.clone(), Arc::new(FakeGateway::failing(401)));
        manager.init().await.unwrap();
        let before = manager.snapshot().await;

        let err = manager.login(&login_request()).await.unwrap_err();
        match err {
            SessionError::Api(ApiError::Status { status, .. }) => assert_eq!(status, 401),
            other => panic!("unexpected error: {other:?}"),
        }

        assert_eq!(manager.snapshot().await, before);
        assert_eq!(store.load_token().await.unwrap().as_deref(), Some("t1"));
    }

    #[tokio::test]
    async fn logout_then_reload_yields_null_session() {
        let store = Arc::new(FakeStore::default());
        let manager = SessionManager::new(store.clone(), Arc::new(FakeGateway::ok(alice())));
        manager.init().await.unwrap();
        manager.login(&login_request()).await.unwrap();

        manager.logout().await.unwrap();
        assert!(!manager.is_authenticated().await);
        // Safe to call when already logged out.
        manager.logout().await.unwrap();

        assert_eq!(store.load_token().await.unwrap(), None);
        assert_eq!(store.load_user().await.unwrap(), None);

        let reloaded = SessionManager::new(store, Arc::new(FakeGateway::failing(500)));
        reloaded.init().await.unwrap();
        assert_eq!(reloaded.current_user().await, None);
    }

    #[tokio::test]
    async fn register_mismatch_never_reaches_the_gateway() {
        let gateway = Arc::new(FakeGateway::ok(alice()));
        let manager = SessionManager::new(Arc::new(FakeStore::default()), gateway.clone());
        manager.init().await.unwrap();

        let err = manager.register(&register_request("abc124")).await.unwrap_err();

        assert!(matches!(err, SessionError::PasswordMismatch));
        assert_eq!(err.to_string(), "passwords do not match");
        assert_eq!(gateway.calls(), 0);
        assert!(!manager.is_authenticated().await);
    }

    #[tokio::test]
    async fn register_with_matching_passwords_logs_in() {
        let gateway = Arc::new(FakeGateway::ok(alice()));
        let manager = SessionManager::new(Arc::new(FakeStore::default()), gateway.clone());
        manager.init().await.unwrap();

        let session = manager.register(&register_request("abc123")).await.unwrap();

        assert_eq!(gateway.calls(), 1);
        assert_eq!(session.user_id, 1);
        assert!(manager.is_authenticated().await);
    }

    #[tokio::test]
    async fn loading_flips_false_exactly_once() {
        let store = Arc::new(FakeStore::default());
        let manager = SessionManager::new(store.clone(), Arc::new(FakeGateway::failing(500)));

        assert!(manager.snapshot().await.loading);
        manager.init().await.unwrap();
        assert!(!manager.snapshot().await.loading);

        // A token written after init must not be picked up by a second
        // init call - rehydration happens once per manager.
        store.store_token("late").await.unwrap();
        store.store_user(&alice()).await.unwrap();
        manager.init().await.unwrap();
        assert_eq!(manager.current_user().await, None);
    }

    #[tokio::test]
    async fn rehydration_requires_both_profile_and_token() {
        let store = Arc::new(FakeStore::default());
        store.store_user(&alice()).await.unwrap();
        // No token stored.

        let manager = SessionManager::new(store, Arc::new(FakeGateway::failing(500)));
        manager.init().await.unwrap();

        assert!(!manager.is_authenticated().await);
        assert!(!manager.snapshot().await.loading);
    }
}
