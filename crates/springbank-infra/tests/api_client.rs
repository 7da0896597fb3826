//! Black-box tests for the API access layer against an in-process stub
//! of the remote banking API, bound to an ephemeral port.

use std::collections::HashMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use serde_json::{Value, json};

use springbank_core::ports::{ApiError, AuthGateway, SessionStore};
use springbank_infra::{ApiClient, AuthApi, InMemorySessionStore};
use springbank_shared::dto::LoginRequest;

const TOKEN: &str = "t-123";

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let app = axum::Router::new()
            .route("/api/auth/login", post(login))
            .route("/api/accounts/my", get(my_accounts))
            .route("/api/cards/my", get(my_cards_malformed))
            .route("/api/cards/7", delete(|| async { StatusCode::NO_CONTENT }))
            .route("/api/cards/99", delete(delete_missing_card))
            .route("/api/clients/3", delete(delete_client))
            .route("/api/transactions/deposit", post(deposit));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{addr}/api");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn client(&self, store: Arc<dyn SessionStore>) -> Arc<ApiClient> {
        Arc::new(ApiClient::new(self.base_url.clone(), store))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn login(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    // The login call must go out anonymously.
    if headers.contains_key("authorization") {
        return (StatusCode::BAD_REQUEST, "unexpected Authorization header").into_response();
    }
    if body["username"] != "alice" || body["password"] != "secret" {
        return (StatusCode::UNAUTHORIZED, "Invalid username or password").into_response();
    }
    Json(json!({
        "token": TOKEN,
        "type": "Bearer",
        "id": 1,
        "username": "alice",
        "email": "a@x.com",
        "role": "CUSTOMER"
    }))
    .into_response()
}

async fn my_accounts(headers: HeaderMap) -> Response {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {TOKEN}"))
        .unwrap_or(false);

    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            "Full authentication is required to access this resource",
        )
            .into_response();
    }

    Json(json!([{
        "id": 11,
        "accountNumber": "ACC-1",
        "accountType": "CHECKING",
        "balance": 120.5,
        "currency": "USD",
        "status": "ACTIVE",
        "createdAt": "2026-01-05T10:00:00",
        "clientUsername": "alice"
    }]))
    .into_response()
}

async fn my_cards_malformed() -> Response {
    // Shape the client does not expect.
    Json(json!([{ "unexpected": true }])).into_response()
}

async fn delete_missing_card() -> Response {
    (StatusCode::NOT_FOUND, "Card not found").into_response()
}

async fn delete_client() -> Response {
    // Plain text success body - must not be parsed as JSON.
    (StatusCode::OK, "Client deleted successfully").into_response()
}

async fn deposit(Query(params): Query<HashMap<String, String>>) -> Response {
    let amount: f64 = match params.get("amount").and_then(|a| a.parse().ok()) {
        Some(amount) => amount,
        None => return (StatusCode::BAD_REQUEST, "amount is required").into_response(),
    };
    let account = match params.get("accountNumber") {
        Some(account) => account.clone(),
        None => return (StatusCode::BAD_REQUEST, "accountNumber is required").into_response(),
    };

    Json(json!({
        "id": 42,
        "amount": amount,
        "type": "DEPOSIT",
        "sourceAccountNumber": null,
        "destinationAccountNumber": account,
        "description": params.get("description"),
        "createdAt": "2026-01-05T10:00:00"
    }))
    .into_response()
}

async fn store_with_token() -> Arc<InMemorySessionStore> {
    let store = Arc::new(InMemorySessionStore::new());
    store.store_token(TOKEN).await.unwrap();
    store
}

#[tokio::test]
async fn get_attaches_bearer_token_and_decodes_payload() {
    let server = TestServer::spawn().await;
    let client = server.client(store_with_token().await);
    let accounts = springbank_infra::AccountsApi::new(client);

    let mine = accounts.my().await.unwrap();

    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].account_number, "ACC-1");
    assert_eq!(mine[0].balance, 120.5);
}

#[tokio::test]
async fn missing_token_surfaces_status_and_body_text() {
    let server = TestServer::spawn().await;
    let client = server.client(Arc::new(InMemorySessionStore::new()));
    let accounts = springbank_infra::AccountsApi::new(client);

    let err = accounts.my().await.unwrap_err();

    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(
                message,
                "Full authentication is required to access this resource"
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn login_goes_out_without_auth_header() {
    let server = TestServer::spawn().await;
    // Token already present in storage must NOT leak into the login call.
    let auth = AuthApi::new(server.client(store_with_token().await));

    let response = auth
        .login(&LoginRequest {
            username: "alice".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();

    assert_eq!(response.token, TOKEN);
    assert_eq!(response.username, "alice");
}

#[tokio::test]
async fn delete_resolves_on_empty_body() {
    let server = TestServer::spawn().await;
    let cards = springbank_infra::CardsApi::new(server.client(store_with_token().await));

    cards.delete(7).await.unwrap();
}

#[tokio::test]
async fn delete_resolves_on_plain_text_body() {
    let server = TestServer::spawn().await;
    let clients = springbank_infra::ClientsApi::new(server.client(store_with_token().await));

    clients.disable(3).await.unwrap();
}

#[tokio::test]
async fn delete_failure_carries_backend_message() {
    let server = TestServer::spawn().await;
    let cards = springbank_infra::CardsApi::new(server.client(store_with_token().await));

    let err = cards.delete(99).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "Card not found");
}

#[tokio::test]
async fn deposit_sends_query_parameters() {
    let server = TestServer::spawn().await;
    let transactions =
        springbank_infra::TransactionsApi::new(server.client(store_with_token().await));

    let posted = transactions
        .deposit("ACC-1", 75.25, Some("payday"))
        .await
        .unwrap();

    assert_eq!(posted.amount, 75.25);
    assert_eq!(posted.destination_account_number.as_deref(), Some("ACC-1"));
    assert_eq!(posted.description.as_deref(), Some("payday"));

    // Description is optional.
    let posted = transactions.deposit("ACC-1", 10.0, None).await.unwrap();
    assert_eq!(posted.description, None);
}

#[tokio::test]
async fn malformed_payload_fails_fast_with_decode_error() {
    let server = TestServer::spawn().await;
    let cards = springbank_infra::CardsApi::new(server.client(store_with_token().await));

    let err = cards.my().await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    // Nothing listens on this port.
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let client = ApiClient::new("http://127.0.0.1:1/api", store);

    let err = client.get::<Value>("/accounts").await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.status(), None);
}
