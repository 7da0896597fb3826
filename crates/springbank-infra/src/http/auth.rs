//! Authentication endpoints - the only calls issued without a token.

use std::sync::Arc;

use async_trait::async_trait;

use springbank_core::ports::{ApiError, AuthGateway};
use springbank_shared::dto::{AuthResponse, LoginRequest, RegisterRequest};

use super::ApiClient;

pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for AuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.client.post("/auth/login", request, false).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.client.post("/auth/register", request, false).await
    }
}
