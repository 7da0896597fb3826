//! Transaction endpoints.
//!
//! Deposit and withdraw take query parameters rather than a JSON body;
//! transfer posts a JSON body. All three answer with the posted
//! transaction record.

use std::sync::Arc;

use springbank_core::ports::ApiError;
use springbank_shared::dto::{TransactionResponse, TransferRequest};

use super::ApiClient;

pub struct TransactionsApi {
    client: Arc<ApiClient>,
}

impl TransactionsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Back office: the full transaction ledger.
    pub async fn all(&self) -> Result<Vec<TransactionResponse>, ApiError> {
        self.client.get("/transactions").await
    }

    /// The authenticated customer's transaction history.
    pub async fn my(&self) -> Result<Vec<TransactionResponse>, ApiError> {
        self.client.get("/transactions/my").await
    }

    pub async fn by_account(&self, account_number: &str) -> Result<Vec<TransactionResponse>, ApiError> {
        self.client
            .get(&format!("/transactions/account/{account_number}"))
            .await
    }

    pub async fn deposit(
        &self,
        account_number: &str,
        amount: f64,
        description: Option<&str>,
    ) -> Result<TransactionResponse, ApiError> {
        self.client
            .post_query("/transactions/deposit", &Self::params(account_number, amount, description))
            .await
    }

    pub async fn withdraw(
        &self,
        account_number: &str,
        amount: f64,
        description: Option<&str>,
    ) -> Result<TransactionResponse, ApiError> {
        self.client
            .post_query("/transactions/withdraw", &Self::params(account_number, amount, description))
            .await
    }

    pub async fn transfer(&self, request: &TransferRequest) -> Result<TransactionResponse, ApiError> {
        self.client.post("/transactions/transfer", request, true).await
    }

    fn params(
        account_number: &str,
        amount: f64,
        description: Option<&str>,
    ) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("accountNumber", account_number.to_string()),
            ("amount", amount.to_string()),
        ];
        if let Some(description) = description {
            params.push(("description", description.to_string()));
        }
        params
    }
}
