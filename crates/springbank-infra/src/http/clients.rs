//! Client (customer record) endpoints.

use std::sync::Arc;

use springbank_core::ports::ApiError;
use springbank_shared::dto::ClientResponse;

use super::ApiClient;

pub struct ClientsApi {
    client: Arc<ApiClient>,
}

impl ClientsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Back office: every client on the books.
    pub async fn all(&self) -> Result<Vec<ClientResponse>, ApiError> {
        self.client.get("/clients").await
    }

    /// Back office: one client by id.
    pub async fn by_id(&self, id: i64) -> Result<ClientResponse, ApiError> {
        self.client.get(&format!("/clients/{id}")).await
    }

    /// The authenticated customer's own profile.
    pub async fn me(&self) -> Result<ClientResponse, ApiError> {
        self.client.get("/clients/me").await
    }

    /// Back office: soft-disable a client. The API answers with a
    /// plain-text confirmation, which is ignored.
    pub async fn disable(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/clients/{id}")).await
    }

    /// Back office: re-enable a previously disabled client.
    pub async fn enable(&self, id: i64) -> Result<ClientResponse, ApiError> {
        self.client.post_empty(&format!("/clients/{id}/enable")).await
    }
}
