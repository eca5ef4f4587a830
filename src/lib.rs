use std::sync::Arc;

// --- Module Structure ---

// Core application services and components.
pub mod auth;
pub mod config;
pub mod endpoints;
pub mod i18n;
pub mod models;
pub mod profile;
pub mod session;

// Navigation: the route table, the pre-navigation guard, and the system
// driving them.
pub mod guard;
pub mod navigator;
pub mod router;

// --- Public Re-exports ---

// Makes the core types easily accessible to the application entry point and
// to the host embedding this crate.
pub use auth::AuthTokens;
pub use config::{AppConfig, Env};
pub use endpoints::Endpoints;
pub use guard::{FORBIDDEN_ROUTE, GuardOutcome, LOGIN_ROUTE};
pub use i18n::Locale;
pub use navigator::{NavigationError, NavigationOutcome, Navigator};
pub use profile::{HttpProfileClient, MockProfileService, ProfileService, ProfileServiceHandle};
pub use router::{RouteTable, RouterError, route_table};
pub use session::{PersistedState, Session};

/// create_navigator
///
/// Assembles the full navigation stack from configuration and persisted state:
/// the endpoint table, the HTTP profile client carrying the persisted access
/// token, the validated route table, and the navigator that ties them
/// together. The only failure mode is a route declaration that does not
/// survive validation, which is a startup-time defect.
pub fn create_navigator(
    config: &AppConfig,
    state: &PersistedState,
) -> Result<Navigator, RouterError> {
    let endpoints = Endpoints::new(&config.api_base_url);
    let profiles =
        Arc::new(HttpProfileClient::new(&endpoints, state.tokens.clone())) as ProfileServiceHandle;
    let table = router::route_table()?;
    Ok(Navigator::new(table, profiles))
}
