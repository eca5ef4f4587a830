use super::route::{RouteDef, View};

/// Public Route Declarations
///
/// Routes reachable by any visitor, anonymous or logged in: the storefront,
/// the identity gateway pages, and the two terminal views the guard redirects
/// to (login and forbidden). The fallback lives in [`fallback_route`] so the
/// assembly can pin it to the end of the table.
pub fn public_routes() -> Vec<RouteDef> {
    vec![
        // The storefront. Bundled eagerly; it is the first thing rendered.
        RouteDef::new("/", View::Eager("HomePage")).named("home"),
        // Identity gateway pages, all code-split.
        RouteDef::new("/login", View::Lazy(login_view)).named("login"),
        RouteDef::new("/register", View::Lazy(register_view)).named("register"),
        RouteDef::new("/forgot-password", View::Lazy(forgot_password_view)).named("forgot-password"),
        // OTP-based account verification after registration.
        RouteDef::new("/verify", View::Lazy(verify_view)).named("verify"),
        // Listing browse and detail. Anyone may look; bidding happens elsewhere.
        RouteDef::new("/products", View::Lazy(products_view)).named("products"),
        RouteDef::new("/products/{id}", View::Lazy(product_details_view)).named("product-details"),
        // Where the guard sends authenticated users that lack the admin role.
        // Must stay public, or the redirect itself would be guarded.
        RouteDef::new("/403", View::Lazy(forbidden_view)).named("forbidden"),
    ]
}

/// The catch-all wildcard route. Registered last by the table assembly; any
/// otherwise-unmatched path renders the not-found view instead of erroring.
pub fn fallback_route() -> RouteDef {
    RouteDef::new("/{*path}", View::Lazy(not_found_view)).named("not-found")
}

fn login_view() -> &'static str {
    "LoginPage"
}

fn register_view() -> &'static str {
    "RegisterPage"
}

fn forgot_password_view() -> &'static str {
    "ForgotPasswordPage"
}

fn verify_view() -> &'static str {
    "VerifyPage"
}

fn products_view() -> &'static str {
    "ProductBrowsePage"
}

fn product_details_view() -> &'static str {
    "ProductDetailsPage"
}

fn forbidden_view() -> &'static str {
    "ForbiddenPage"
}

fn not_found_view() -> &'static str {
    "NotFoundPage"
}
