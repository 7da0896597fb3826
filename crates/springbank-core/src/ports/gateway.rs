//! Authentication gateway port and the API error taxonomy.

use async_trait::async_trait;
use springbank_shared::dto::{AuthResponse, LoginRequest, RegisterRequest};

/// Errors from the remote API boundary.
///
/// Unlike the plain message-string failures of a naive fetch wrapper,
/// the HTTP status is carried structurally so callers can branch on it
/// (401 vs 500) when they need to.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (connect failure, DNS, broken pipe).
    #[error("request failed: {0}")]
    Transport(String),

    /// Non-success HTTP status. `message` is the raw response body text,
    /// which is what the remote API uses for human-readable errors.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The body could not be decoded into the expected DTO shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The HTTP status, when the request got far enough to have one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Port for the two unauthenticated auth endpoints.
///
/// Login and register are the only calls issued without a bearer token;
/// everything else goes through the resource bindings directly.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// `POST /auth/login`
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError>;

    /// `POST /auth/register`
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError>;
}
