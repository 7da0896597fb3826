//! The shared HTTP client: uniform request/response handling for all
//! remote calls.

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use springbank_core::ports::{ApiError, SessionStore};

/// Default origin of the remote banking API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Thin wrapper over `reqwest::Client` that attaches the bearer token
/// and normalizes success/failure handling.
///
/// The token is read from the session store at call time, so a login or
/// logout between two calls is always observed. Each call is otherwise
/// independent and stateless: no retries, no timeouts, no caching.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, store: Arc<dyn SessionStore>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            store,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}{path}`, decoding the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.request(Method::GET, path, true).await;
        let response = self.execute(request, path).await?;
        Self::decode(response).await
    }

    /// `POST {base}{path}` with a JSON body, decoding the JSON response.
    pub async fn post<T, B>(&self, path: &str, body: &B, include_auth: bool) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::POST, path, include_auth).await;
        let response = self.execute(request.json(body), path).await?;
        Self::decode(response).await
    }

    /// `POST {base}{path}?{params}` with no body, decoding the JSON
    /// response. Used by the query-parameter transaction endpoints.
    pub async fn post_query<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let request = self.request(Method::POST, path, true).await;
        let response = self.execute(request.query(params), path).await?;
        Self::decode(response).await
    }

    /// `POST {base}{path}` with no body, decoding the JSON response.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.request(Method::POST, path, true).await;
        let response = self.execute(request, path).await?;
        Self::decode(response).await
    }

    /// `DELETE {base}{path}`, resolving to `()` on any success status.
    ///
    /// The response body is deliberately ignored: the remote API answers
    /// DELETE with either no content or a plain-text confirmation like
    /// "Client deleted successfully", and parsing that as JSON fails.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.request(Method::DELETE, path, true).await;
        self.execute(request, path).await?;
        Ok(())
    }

    async fn request(&self, method: Method, path: &str, include_auth: bool) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");

        if include_auth {
            // Token read at call time, exactly like the storage-backed
            // original; absence simply means an anonymous request.
            if let Ok(Some(token)) = self.store.load_token().await {
                request = request.bearer_auth(token);
            }
        }
        request
    }

    /// Send the request and map any non-success status to an error
    /// carrying the raw response body text as its message.
    async fn execute(&self, request: RequestBuilder, path: &str) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::debug!(path, error = %e, "transport failure");
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        tracing::debug!(path, status = status.as_u16(), "api call failed");
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
