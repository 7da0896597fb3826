//! # SpringBank Infrastructure
//!
//! Concrete implementations of the ports defined in `springbank-core`:
//! the reqwest-backed API client with its per-resource bindings, and
//! the session store adapters.

pub mod http;
pub mod store;

pub use http::{AccountsApi, ApiClient, AuthApi, CardsApi, ClientsApi, TransactionsApi};
pub use store::{FileSessionStore, InMemorySessionStore};
