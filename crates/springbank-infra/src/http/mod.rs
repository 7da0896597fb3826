//! HTTP access layer: the shared client plus one binding per API
//! resource, mirroring the remote API's surface.

mod accounts;
mod auth;
mod cards;
mod client;
mod clients;
mod transactions;

pub use accounts::AccountsApi;
pub use auth::AuthApi;
pub use cards::CardsApi;
pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use clients::ClientsApi;
pub use transactions::TransactionsApi;
