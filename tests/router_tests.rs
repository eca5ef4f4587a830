use auction_portal::router::{
    AccessPolicy, PathPattern, RouteDef, RouteTable, RouterError, View, public, route_table,
};

fn view() -> View {
    View::Eager("TestPage")
}

// --- Shipped Table Invariants ---

#[test]
fn shipped_route_table_builds() {
    // Unique names, unique paths, catch-all last: all enforced at build time.
    route_table().expect("shipped route table must validate");
}

#[test]
fn every_admin_path_resolves_to_the_admin_policy() {
    let table = route_table().unwrap();
    for route in table.routes() {
        if route.full_path.starts_with("/admin") {
            assert_eq!(
                route.policy,
                AccessPolicy::RequiresAdmin,
                "admin-prefixed route `{}` must require the admin role",
                route.full_path
            );
        }
    }
}

#[test]
fn unmatched_path_lands_on_the_not_found_view() {
    let table = route_table().unwrap();

    let matched = table.resolve("/does-not-exist");

    assert_eq!(matched.route.name, Some("not-found"));
    assert_eq!(matched.route.view.resolve(), "NotFoundPage");
    assert_eq!(
        matched.params.get("path").map(String::as_str),
        Some("does-not-exist")
    );
}

#[test]
fn literal_routes_shadow_the_catch_all() {
    let table = route_table().unwrap();
    assert_eq!(table.resolve("/login").route.name, Some("login"));
    assert_eq!(table.resolve("/403").route.name, Some("forbidden"));
}

#[test]
fn params_are_extracted_from_parameterized_routes() {
    let table = route_table().unwrap();

    let matched = table.resolve("/products/42");

    assert_eq!(matched.route.name, Some("product-details"));
    assert_eq!(matched.params.get("id").map(String::as_str), Some("42"));
}

#[test]
fn nested_admin_paths_resolve_to_their_leaf_routes() {
    let table = route_table().unwrap();
    assert_eq!(table.resolve("/admin").route.name, Some("admin-dashboard"));
    assert_eq!(table.resolve("/admin/users").route.name, Some("admin-users"));
    assert_eq!(
        table.resolve("/admin/users/approvals").route.name,
        Some("admin-user-approvals")
    );
}

#[test]
fn trailing_slashes_are_insignificant() {
    let table = route_table().unwrap();
    assert_eq!(table.resolve("/profile/").route.name, Some("profile"));
    assert_eq!(table.resolve("/admin/users/").route.name, Some("admin-users"));
}

// --- Policy Flattening ---

#[test]
fn untagged_child_of_a_protected_section_inherits_the_policy() {
    // The latent defect the flattening pass exists for: a future admin child
    // whose declaration forgets the flags must not ship unprotected.
    let defs = vec![
        RouteDef::new("/admin", view())
            .named("admin-root")
            .requires_auth()
            .requires_admin()
            .child(RouteDef::new("reports", view()).named("admin-reports")),
        public::fallback_route(),
    ];

    let table = RouteTable::build(defs).unwrap();

    let reports = table.by_name("admin-reports").unwrap();
    assert_eq!(reports.policy, AccessPolicy::RequiresAdmin);
    assert_eq!(reports.full_path, "/admin/reports");
}

#[test]
fn auth_only_ancestors_flatten_to_the_auth_policy() {
    let defs = vec![
        RouteDef::new("/account", view())
            .named("account")
            .requires_auth()
            .child(RouteDef::new("invoices", view()).named("invoices")),
        public::fallback_route(),
    ];

    let table = RouteTable::build(defs).unwrap();

    assert_eq!(
        table.by_name("invoices").unwrap().policy,
        AccessPolicy::RequiresAuth
    );
}

// --- Build Validation ---

#[test]
fn duplicate_route_names_are_rejected() {
    let defs = vec![
        RouteDef::new("/a", view()).named("twin"),
        RouteDef::new("/b", view()).named("twin"),
        public::fallback_route(),
    ];
    assert_eq!(
        RouteTable::build(defs).unwrap_err(),
        RouterError::DuplicateName("twin".to_string())
    );
}

#[test]
fn duplicate_route_paths_are_rejected() {
    let defs = vec![
        RouteDef::new("/a", view()).named("first"),
        RouteDef::new("/a", view()).named("second"),
        public::fallback_route(),
    ];
    assert_eq!(
        RouteTable::build(defs).unwrap_err(),
        RouterError::DuplicatePath("/a".to_string())
    );
}

#[test]
fn a_table_without_a_catch_all_is_rejected() {
    let defs = vec![RouteDef::new("/a", view()).named("only")];
    assert_eq!(
        RouteTable::build(defs).unwrap_err(),
        RouterError::MissingCatchAll
    );
}

#[test]
fn a_catch_all_that_is_not_last_is_rejected() {
    let defs = vec![
        public::fallback_route(),
        RouteDef::new("/unreachable", view()).named("unreachable"),
    ];
    assert_eq!(
        RouteTable::build(defs).unwrap_err(),
        RouterError::CatchAllNotLast("/{*path}".to_string())
    );
}

// --- Pattern Parsing ---

#[test]
fn wildcards_must_be_terminal() {
    assert!(matches!(
        PathPattern::parse("/{*rest}/tail"),
        Err(RouterError::InvalidPattern { .. })
    ));
}

#[test]
fn patterns_must_be_rooted() {
    assert!(matches!(
        PathPattern::parse("products"),
        Err(RouterError::InvalidPattern { .. })
    ));
}

#[test]
fn unnamed_captures_are_rejected() {
    assert!(matches!(
        PathPattern::parse("/products/{}"),
        Err(RouterError::InvalidPattern { .. })
    ));
    assert!(matches!(
        PathPattern::parse("/{*}"),
        Err(RouterError::InvalidPattern { .. })
    ));
}

#[test]
fn wildcard_captures_the_full_remainder() {
    let pattern = PathPattern::parse("/{*path}").unwrap();
    let params = pattern.matches("/a/b/c").unwrap();
    assert_eq!(params.get("path").map(String::as_str), Some("a/b/c"));
}

#[test]
fn partial_prefix_matches_are_not_matches() {
    let pattern = PathPattern::parse("/admin/users").unwrap();
    assert!(pattern.matches("/admin/users/approvals").is_none());
    assert!(pattern.matches("/admin").is_none());
}
