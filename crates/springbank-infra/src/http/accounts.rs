//! Account endpoints.

use std::sync::Arc;

use springbank_core::ports::ApiError;
use springbank_shared::dto::{AccountCreateRequest, AccountResponse};

use super::ApiClient;

pub struct AccountsApi {
    client: Arc<ApiClient>,
}

impl AccountsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Back office: every account in the bank.
    pub async fn all(&self) -> Result<Vec<AccountResponse>, ApiError> {
        self.client.get("/accounts").await
    }

    /// Back office: one account by id.
    pub async fn by_id(&self, id: i64) -> Result<AccountResponse, ApiError> {
        self.client.get(&format!("/accounts/{id}")).await
    }

    pub async fn by_account_number(&self, account_number: &str) -> Result<AccountResponse, ApiError> {
        self.client
            .get(&format!("/accounts/number/{account_number}"))
            .await
    }

    /// The authenticated customer's accounts.
    pub async fn my(&self) -> Result<Vec<AccountResponse>, ApiError> {
        self.client.get("/accounts/my").await
    }

    pub async fn my_by_id(&self, id: i64) -> Result<AccountResponse, ApiError> {
        self.client.get(&format!("/accounts/my/{id}")).await
    }

    pub async fn create(&self, request: &AccountCreateRequest) -> Result<AccountResponse, ApiError> {
        self.client.post("/accounts/create", request, true).await
    }
}
