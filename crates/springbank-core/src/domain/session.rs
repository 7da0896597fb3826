use serde::{Deserialize, Serialize};
use springbank_shared::dto::{AuthResponse, Role};

/// The authenticated identity held client-side: profile fields plus the
/// opaque bearer token proving them to the remote API.
///
/// At most one session is live per process; the token's presence is the
/// sole authentication predicate. The trust boundary is the remote API -
/// the role here is whatever the API said at login and is never
/// re-verified locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub token: String,
}

impl Session {
    /// Build a session from a fresh auth endpoint response.
    pub fn from_auth(auth: AuthResponse) -> Self {
        Self {
            user_id: auth.id,
            username: auth.username,
            email: auth.email,
            role: auth.role,
            token: auth.token,
        }
    }

    /// Rebuild a session from a persisted profile and the separately
    /// persisted token. The stored token wins over whatever token string
    /// the profile was serialized with.
    pub fn rehydrate(profile: AuthResponse, token: String) -> Self {
        Self {
            user_id: profile.id,
            username: profile.username,
            email: profile.email,
            role: profile.role,
            token,
        }
    }
}

/// Read-only projection of the session state handed to consumers.
///
/// `loading` is true only during the initial rehydration check; guards
/// must hold (not redirect) while it is set.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub user: Option<Session>,
    pub loading: bool,
}

impl SessionSnapshot {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}
