//! Route surface and navigation-time access policy.
//!
//! The two portals (customer and back office) are strictly separated:
//! an operator session is redirected away from customer screens and
//! vice versa. Policy lives here, independent of any routing framework,
//! so it can be tested on its own.

use springbank_shared::dto::Role;

use crate::domain::SessionSnapshot;

/// Every navigable screen of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    // Public
    Login,
    Register,
    OperatorLogin,
    // Customer portal
    Home,
    Accounts,
    Cards,
    Transfer,
    Transactions,
    // Operator portal
    Operator,
    OperatorAccounts,
    OperatorClients,
    OperatorCards,
    OperatorTransactions,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::OperatorLogin => "/operator/login",
            Route::Home => "/",
            Route::Accounts => "/accounts",
            Route::Cards => "/cards",
            Route::Transfer => "/transfer",
            Route::Transactions => "/transactions",
            Route::Operator => "/operator",
            Route::OperatorAccounts => "/operator/accounts",
            Route::OperatorClients => "/operator/clients",
            Route::OperatorCards => "/operator/cards",
            Route::OperatorTransactions => "/operator/transactions",
        }
    }

    /// The role required to visit this route, or `None` when public.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::Login | Route::Register | Route::OperatorLogin => None,
            Route::Home
            | Route::Accounts
            | Route::Cards
            | Route::Transfer
            | Route::Transactions => Some(Role::Customer),
            Route::Operator
            | Route::OperatorAccounts
            | Route::OperatorClients
            | Route::OperatorCards
            | Route::OperatorTransactions => Some(Role::Operator),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Centralized role policy: each portal admits exactly its own role.
pub fn can_access(role: Role, required: Role) -> bool {
    role == required
}

/// Outcome of a guard check for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Session still rehydrating - render a neutral loading state,
    /// never a redirect, or an already-authenticated user gets evicted
    /// by a flash redirect to login.
    Loading,
    Redirect(Route),
}

/// Evaluate the guard for a route against the current session snapshot.
pub fn evaluate(route: Route, snapshot: &SessionSnapshot) -> GuardDecision {
    let Some(required) = route.required_role() else {
        return GuardDecision::Allow;
    };

    if snapshot.loading {
        return GuardDecision::Loading;
    }

    match snapshot.role() {
        Some(role) if can_access(role, required) => GuardDecision::Allow,
        // A session exists but belongs to the other portal.
        Some(_) => match required {
            Role::Customer => GuardDecision::Redirect(Route::OperatorLogin),
            Role::Operator => GuardDecision::Redirect(Route::Home),
        },
        // No session at all: each portal has its own login screen.
        None => match required {
            Role::Customer => GuardDecision::Redirect(Route::Login),
            Role::Operator => GuardDecision::Redirect(Route::OperatorLogin),
        },
    }
}
