//! Data Transfer Objects - request/response types for the remote banking API.
//!
//! Field names are camelCase on the wire. Timestamps stay as the opaque
//! strings the API sends; all semantic invariants (balance arithmetic,
//! status transitions) are enforced server-side, not here.

use serde::{Deserialize, Serialize};

/// Role attached to an authenticated identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,
    Operator,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Customer => f.write_str("CUSTOMER"),
            Role::Operator => f.write_str("OPERATOR"),
        }
    }
}

/// Account product types accepted by `POST /accounts/create`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Checking,
    Savings,
    Business,
}

/// Card products accepted by `POST /cards/create`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    Debit,
    Credit,
}

// ==================== Request types ====================

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request to register a new customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub address: String,
}

/// Request to open an account for a client (back-office operation).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountCreateRequest {
    pub client_id: i64,
    pub account_type: AccountType,
}

/// Request to issue a card against an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardCreateRequest {
    pub account_number: String,
    pub card_type: CardType,
}

/// Request to transfer funds between two accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub source_account_number: String,
    pub destination_account_number: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ==================== Response types ====================

/// Response from the login and register endpoints.
///
/// `token_type` is the scheme label the API sends (always "Bearer").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
}

/// A client (customer) record as the back office sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub address: String,
    pub role: Role,
    pub enabled: bool,
    pub created_at: String,
}

/// A bank account record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: i64,
    pub account_number: String,
    pub account_type: String,
    pub balance: f64,
    pub currency: String,
    pub status: String,
    pub created_at: String,
    pub client_username: String,
}

/// A payment card record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardResponse {
    pub id: i64,
    pub card_number: String,
    pub card_type: String,
    pub status: String,
    pub account_number: String,
    pub created_at: String,
}

/// A posted transaction record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: i64,
    pub amount: f64,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub source_account_number: Option<String>,
    pub destination_account_number: Option<String>,
    pub description: Option<String>,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_round_trips_wire_names() {
        let json = r#"{
            "token": "t1",
            "type": "Bearer",
            "id": 1,
            "username": "alice",
            "email": "a@x.com",
            "role": "CUSTOMER"
        }"#;

        let parsed: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.token, "t1");
        assert_eq!(parsed.token_type, "Bearer");
        assert_eq!(parsed.role, Role::Customer);

        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back["type"], "Bearer");
        assert_eq!(back["role"], "CUSTOMER");
    }

    #[test]
    fn register_request_serializes_camel_case() {
        let req = RegisterRequest {
            username: "bob".into(),
            email: "b@x.com".into(),
            password: "abc123".into(),
            confirm_password: "abc123".into(),
            first_name: "Bob".into(),
            last_name: "Stone".into(),
            phone_number: None,
            address: "1 Main St".into(),
        };

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["confirmPassword"], "abc123");
        assert_eq!(value["firstName"], "Bob");
        // Optional phone number is omitted, not null.
        assert!(value.get("phoneNumber").is_none());
    }

    #[test]
    fn transfer_request_keeps_optional_description() {
        let req = TransferRequest {
            source_account_number: "ACC-1".into(),
            destination_account_number: "ACC-2".into(),
            amount: 25.50,
            description: Some("rent".into()),
        };

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["sourceAccountNumber"], "ACC-1");
        assert_eq!(value["description"], "rent");
    }
}
