//! Application context - the wired-up SDK shared by every command.

use std::sync::Arc;

use anyhow::bail;

use springbank_core::SessionManager;
use springbank_core::ports::SessionStore;
use springbank_core::routes::{self, GuardDecision, Route};
use springbank_infra::{
    AccountsApi, ApiClient, AuthApi, CardsApi, ClientsApi, FileSessionStore, TransactionsApi,
};

use crate::config::AppConfig;

/// Owns the session manager and the per-resource API bindings.
pub struct AppContext {
    pub session: Arc<SessionManager>,
    pub accounts: AccountsApi,
    pub cards: CardsApi,
    pub clients: ClientsApi,
    pub transactions: TransactionsApi,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        let store: Arc<dyn SessionStore> =
            Arc::new(FileSessionStore::new(config.data_dir.clone()));
        let client = Arc::new(ApiClient::new(config.api_url.clone(), store.clone()));
        let gateway = Arc::new(AuthApi::new(client.clone()));
        let session = Arc::new(SessionManager::new(store, gateway));

        tracing::debug!(api_url = %config.api_url, "application context built");

        Self {
            session,
            accounts: AccountsApi::new(client.clone()),
            cards: CardsApi::new(client.clone()),
            clients: ClientsApi::new(client.clone()),
            transactions: TransactionsApi::new(client),
        }
    }

    /// Navigation-time guard: every command runs behind the route it
    /// stands in for. Denial prints the redirect target, like the
    /// browser front-end navigating to a login screen.
    pub async fn ensure(&self, route: Route) -> anyhow::Result<()> {
        match routes::evaluate(route, &self.session.snapshot().await) {
            GuardDecision::Allow => Ok(()),
            GuardDecision::Loading => bail!("session is still loading, try again"),
            GuardDecision::Redirect(target) => {
                bail!("access to {route} denied, redirecting to {target}")
            }
        }
    }
}
