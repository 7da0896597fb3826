//! Card endpoints.

use std::sync::Arc;

use springbank_core::ports::ApiError;
use springbank_shared::dto::{CardCreateRequest, CardResponse};

use super::ApiClient;

pub struct CardsApi {
    client: Arc<ApiClient>,
}

impl CardsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Back office: every card in the bank.
    pub async fn all(&self) -> Result<Vec<CardResponse>, ApiError> {
        self.client.get("/cards").await
    }

    /// Back office: one card by id.
    pub async fn by_id(&self, id: i64) -> Result<CardResponse, ApiError> {
        self.client.get(&format!("/cards/{id}")).await
    }

    /// The authenticated customer's cards.
    pub async fn my(&self) -> Result<Vec<CardResponse>, ApiError> {
        self.client.get("/cards/my").await
    }

    pub async fn my_by_id(&self, id: i64) -> Result<CardResponse, ApiError> {
        self.client.get(&format!("/cards/my/{id}")).await
    }

    pub async fn create(&self, request: &CardCreateRequest) -> Result<CardResponse, ApiError> {
        self.client.post("/cards/create", request, true).await
    }

    /// Back office: retire a card. Success bodies are ignored.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/cards/{id}")).await
    }
}
