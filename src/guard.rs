use crate::profile::ProfileService;
use crate::router::ResolvedRoute;
use crate::session::Session;

/// Route name the guard redirects to when authentication is required.
pub const LOGIN_ROUTE: &str = "login";
/// Route name the guard redirects to when the admin role is missing.
pub const FORBIDDEN_ROUTE: &str = "forbidden";

/// GuardOutcome
///
/// The guard's decision for one navigation attempt. An explicit tagged result:
/// either the transition proceeds unmodified, or it is replaced by a
/// navigation to the named route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Redirect { name: &'static str },
}

/// before_navigation
///
/// The pre-navigation hook, run for every transition before it commits.
/// Sequential and short-circuiting:
///
/// 1. Resolve the session if this is the first navigation of the session;
///    this is the one suspension point. Fetch failure degrades to "no profile" inside
///    [`Session::ensure_fetched`] and is not retried here.
/// 2. Protected route and no profile: redirect to login.
/// 3. Admin route and the profile lacks the role: redirect to forbidden.
/// 4. Otherwise allow.
///
/// Step 2 runs strictly before step 3, so an unauthenticated user hitting an
/// admin route lands on the login page, not the forbidden page.
pub async fn before_navigation(
    route: &ResolvedRoute,
    session: &mut Session,
    profiles: &dyn ProfileService,
) -> GuardOutcome {
    session.ensure_fetched(profiles).await;

    if route.policy.requires_auth() && !session.is_authenticated() {
        tracing::debug!(path = %route.full_path, "unauthenticated; redirecting to login");
        return GuardOutcome::Redirect { name: LOGIN_ROUTE };
    }

    if route.policy.requires_admin() && !session.is_admin() {
        tracing::debug!(path = %route.full_path, "not an admin; redirecting to forbidden");
        return GuardOutcome::Redirect {
            name: FORBIDDEN_ROUTE,
        };
    }

    GuardOutcome::Allow
}
