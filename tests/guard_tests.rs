use std::sync::Arc;
use std::time::Duration;

use auction_portal::{
    MockProfileService, Navigator, ProfileServiceHandle, guard, models::Profile, route_table,
    session::Session,
};

// --- Helper Functions ---

fn buyer() -> Profile {
    Profile {
        id: 7,
        name: Some("Akira".to_string()),
        email: "akira@example.com".to_string(),
        avatar_url: None,
        roles: vec!["buyer".to_string()],
        oauth_type: "none".to_string(),
        verified: true,
    }
}

fn admin() -> Profile {
    Profile {
        roles: vec!["buyer".to_string(), "admin".to_string()],
        ..buyer()
    }
}

fn navigator_with(mock: Arc<MockProfileService>) -> Navigator {
    let table = route_table().expect("shipped route table must build");
    Navigator::new(table, mock as ProfileServiceHandle)
}

// --- Guard Redirect Policies ---

#[tokio::test]
async fn unauthenticated_protected_route_redirects_to_login() {
    let navigator = navigator_with(Arc::new(MockProfileService::returning(None)));

    let outcome = navigator.navigate("/profile").await.unwrap();

    assert_eq!(outcome.route_name, Some("login"));
    assert_eq!(outcome.view, "LoginPage");
    assert_eq!(outcome.redirected_from.as_deref(), Some("/profile"));
}

#[tokio::test]
async fn unauthenticated_admin_route_redirects_to_login_not_forbidden() {
    // Order-of-checks property: the authentication check fires before the
    // admin check, so the anonymous visitor never sees the forbidden page.
    let navigator = navigator_with(Arc::new(MockProfileService::returning(None)));

    let outcome = navigator.navigate("/admin/users").await.unwrap();

    assert_eq!(outcome.route_name, Some("login"));
    assert_eq!(outcome.path, "/login");
}

#[tokio::test]
async fn authenticated_non_admin_is_forbidden_from_admin_routes() {
    let navigator = navigator_with(Arc::new(MockProfileService::returning(Some(buyer()))));

    let outcome = navigator.navigate("/admin/users").await.unwrap();

    assert_eq!(outcome.route_name, Some("forbidden"));
    assert_eq!(outcome.path, "/403");
    assert_eq!(outcome.redirected_from.as_deref(), Some("/admin/users"));
}

#[tokio::test]
async fn admin_reaches_admin_section_unmodified() {
    let navigator = navigator_with(Arc::new(MockProfileService::returning(Some(admin()))));

    let outcome = navigator.navigate("/admin/categories").await.unwrap();

    assert_eq!(outcome.route_name, Some("admin-categories"));
    assert_eq!(outcome.view, "AdminCategoriesPage");
    assert_eq!(outcome.redirected_from, None);
}

#[tokio::test]
async fn authenticated_user_passes_protected_routes() {
    let navigator = navigator_with(Arc::new(MockProfileService::returning(Some(buyer()))));

    let outcome = navigator.navigate("/chat/12").await.unwrap();

    assert_eq!(outcome.route_name, Some("chat-session"));
    assert_eq!(outcome.params.get("id").map(String::as_str), Some("12"));
}

#[tokio::test]
async fn public_routes_commit_even_when_the_fetch_fails() {
    let navigator = navigator_with(Arc::new(MockProfileService::new_failing()));

    let outcome = navigator.navigate("/").await.unwrap();

    assert_eq!(outcome.route_name, Some("home"));
    assert_eq!(outcome.view, "HomePage");
}

// --- Fetch-Once Semantics ---

#[tokio::test]
async fn profile_is_fetched_exactly_once_across_navigations() {
    let mock = Arc::new(MockProfileService::returning(Some(buyer())));
    let navigator = navigator_with(mock.clone());

    navigator.navigate("/profile").await.unwrap();
    navigator.navigate("/favorites").await.unwrap();
    navigator.navigate("/products").await.unwrap();

    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn failed_fetch_is_not_retried_on_later_navigations() {
    // If a failed fetch re-armed the latch, every navigation would hit the
    // backend again, which is the infinite-retry risk the session latch exists for.
    let mock = Arc::new(MockProfileService::new_failing());
    let navigator = navigator_with(mock.clone());

    let first = navigator.navigate("/profile").await.unwrap();
    assert_eq!(first.route_name, Some("login"));

    let second = navigator.navigate("/profile").await.unwrap();
    assert_eq!(second.route_name, Some("login"));

    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn concurrent_navigations_trigger_a_single_fetch() {
    // Two navigations racing before the first fetch settles: the navigator
    // serializes transitions, so the second must observe the settled session
    // rather than firing a duplicate fetch.
    let mock =
        Arc::new(MockProfileService::returning(Some(buyer())).with_delay(Duration::from_millis(50)));
    let navigator = Arc::new(navigator_with(mock.clone()));

    let a = {
        let navigator = navigator.clone();
        tokio::spawn(async move { navigator.navigate("/profile").await })
    };
    let b = {
        let navigator = navigator.clone();
        tokio::spawn(async move { navigator.navigate("/favorites").await })
    };

    a.await.unwrap().unwrap();
    b.await.unwrap().unwrap();

    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn login_flow_identity_skips_the_fetch() {
    let mock = Arc::new(MockProfileService::returning(None));
    let navigator = navigator_with(mock.clone());

    navigator.apply_profile(admin()).await;
    let outcome = navigator.navigate("/admin/users").await.unwrap();

    assert_eq!(outcome.route_name, Some("admin-users"));
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn logout_denies_without_refetching() {
    let mock = Arc::new(MockProfileService::returning(Some(buyer())));
    let navigator = navigator_with(mock.clone());

    navigator.navigate("/profile").await.unwrap();
    navigator.clear_session().await;

    let outcome = navigator.navigate("/profile").await.unwrap();
    assert_eq!(outcome.route_name, Some("login"));
    assert_eq!(mock.calls(), 1);
}

// --- Guard Unit Behavior ---

#[tokio::test]
async fn guard_allows_public_routes_for_anonymous_sessions() {
    let table = route_table().unwrap();
    let mock = MockProfileService::returning(None);
    let mut session = Session::new();

    let matched = table.resolve("/products");
    let outcome = guard::before_navigation(matched.route, &mut session, &mock).await;

    assert_eq!(outcome, guard::GuardOutcome::Allow);
    assert!(session.has_fetched());
}

#[tokio::test]
async fn guard_marks_the_session_fetched_even_on_failure() {
    let table = route_table().unwrap();
    let mock = MockProfileService::new_failing();
    let mut session = Session::new();

    let matched = table.resolve("/profile");
    let outcome = guard::before_navigation(matched.route, &mut session, &mock).await;

    assert_eq!(
        outcome,
        guard::GuardOutcome::Redirect {
            name: guard::LOGIN_ROUTE
        }
    );
    assert!(session.has_fetched());
    assert!(!session.is_authenticated());
    assert_eq!(session.fetch_count(), 1);
}

#[tokio::test]
async fn current_tracks_the_last_committed_navigation() {
    let navigator = navigator_with(Arc::new(MockProfileService::returning(None)));
    assert_eq!(navigator.current().await, None);

    navigator.navigate("/products/3").await.unwrap();
    let current = navigator.current().await.unwrap();
    assert_eq!(current.route_name, Some("product-details"));

    // A redirected navigation commits its destination, not its request.
    navigator.navigate("/settings").await.unwrap();
    let current = navigator.current().await.unwrap();
    assert_eq!(current.route_name, Some("login"));
}
