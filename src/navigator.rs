use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::guard::{self, GuardOutcome};
use crate::models::Profile;
use crate::profile::ProfileServiceHandle;
use crate::router::{Params, RouteTable};
use crate::session::Session;

/// A redirect chain longer than this means the table redirects into itself.
const MAX_REDIRECTS: usize = 8;

/// NavigationRequest
///
/// One transition attempt. The id correlates every log line the attempt
/// produces, including any redirect hops it turns into.
#[derive(Debug, Clone)]
pub struct NavigationRequest {
    pub id: Uuid,
    pub path: String,
}

/// NavigationOutcome
///
/// A committed transition: which route matched, which view renders, and the
/// parameters captured from the path. `redirected_from` carries the originally
/// requested path when the guard substituted this destination.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationOutcome {
    pub route_name: Option<&'static str>,
    pub path: String,
    pub view: &'static str,
    pub params: Params,
    pub redirected_from: Option<String>,
}

/// NavigationError
///
/// The only ways a navigation can fail outright. Unmatched paths are not among
/// them; those commit the catch-all view.
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("redirect chain exceeded {MAX_REDIRECTS} hops starting from `{0}`")]
    RedirectLoop(String),

    /// The guard named a redirect target the table does not contain. Only
    /// reachable with a hand-built table missing the login or forbidden route.
    #[error("redirect target `{0}` is not a registered route")]
    UnknownRedirectTarget(&'static str),
}

/// Navigator
///
/// The navigation system: owns the route table, the profile accessor, and the
/// session context. Transitions are serialized: the session lock is held from
/// guard evaluation through commit, so two rapid navigations cannot both see
/// an unresolved session and trigger duplicate profile fetches.
pub struct Navigator {
    table: RouteTable,
    profiles: ProfileServiceHandle,
    session: Mutex<Session>,
    current: RwLock<Option<NavigationOutcome>>,
}

impl Navigator {
    pub fn new(table: RouteTable, profiles: ProfileServiceHandle) -> Self {
        Self::with_session(table, profiles, Session::new())
    }

    /// Starts from an existing session context instead of a cold one.
    pub fn with_session(table: RouteTable, profiles: ProfileServiceHandle, session: Session) -> Self {
        Self {
            table,
            profiles,
            session: Mutex::new(session),
            current: RwLock::new(None),
        }
    }

    /// navigate
    ///
    /// Runs one navigation to `path`: resolve against the table, evaluate the
    /// guard, and either commit the match or follow the guard's redirect. A
    /// redirect target goes through resolution and the guard again, so a
    /// protected redirect destination could chain further; the hop count
    /// bounds that.
    pub async fn navigate(&self, path: &str) -> Result<NavigationOutcome, NavigationError> {
        // Serialization point: one transition at a time, per the host
        // navigation pipeline's one-at-a-time semantics.
        let mut session = self.session.lock().await;

        let request = NavigationRequest {
            id: Uuid::new_v4(),
            path: path.to_string(),
        };
        tracing::debug!(req_id = %request.id, path = %request.path, "navigation requested");

        let mut target = request.path.clone();
        let mut redirected_from = None;

        for _ in 0..MAX_REDIRECTS {
            let matched = self.table.resolve(&target);
            match guard::before_navigation(matched.route, &mut session, self.profiles.as_ref())
                .await
            {
                GuardOutcome::Allow => {
                    let outcome = NavigationOutcome {
                        route_name: matched.route.name,
                        path: target.clone(),
                        view: matched.route.view.resolve(),
                        params: matched.params,
                        redirected_from: redirected_from.clone(),
                    };
                    tracing::info!(
                        req_id = %request.id,
                        route = outcome.route_name.unwrap_or("?"),
                        view = outcome.view,
                        "navigation committed"
                    );
                    *self.current.write().await = Some(outcome.clone());
                    return Ok(outcome);
                }
                GuardOutcome::Redirect { name } => {
                    let destination = self
                        .table
                        .by_name(name)
                        .ok_or(NavigationError::UnknownRedirectTarget(name))?;
                    tracing::info!(
                        req_id = %request.id,
                        from = %target,
                        to = %destination.full_path,
                        "navigation redirected"
                    );
                    // Keep the first requested path; intermediate hops are noise.
                    redirected_from.get_or_insert_with(|| target.clone());
                    target = destination.full_path.clone();
                }
            }
        }

        tracing::error!(req_id = %request.id, path = %request.path, "redirect chain did not settle");
        Err(NavigationError::RedirectLoop(request.path))
    }

    /// The last committed navigation, if any transition has settled yet.
    pub async fn current(&self) -> Option<NavigationOutcome> {
        self.current.read().await.clone()
    }

    /// Installs the identity produced by the login flow into the session.
    pub async fn apply_profile(&self, profile: Profile) {
        self.session.lock().await.set_profile(profile);
    }

    /// Logout: drops the session identity without re-arming the fetch latch.
    pub async fn clear_session(&self) {
        self.session.lock().await.clear();
    }

    /// Whether the session currently holds a profile.
    pub async fn is_authenticated(&self) -> bool {
        self.session.lock().await.is_authenticated()
    }

    /// The route table this navigator resolves against.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }
}
