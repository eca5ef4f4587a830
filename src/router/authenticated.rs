use super::route::{RouteDef, View};

/// Authenticated Route Declarations
///
/// Routes that require a resolved session. Every entry carries `requires_auth`
/// explicitly; an unauthenticated navigation to any of these is redirected to
/// the login route by the guard before the view is ever resolved.
pub fn authenticated_routes() -> Vec<RouteDef> {
    vec![
        // The user's own profile, plus their selling and bidding activity.
        RouteDef::new("/profile", View::Lazy(profile_view))
            .named("profile")
            .requires_auth(),
        RouteDef::new("/profile/products", View::Lazy(my_products_view))
            .named("my-products")
            .requires_auth(),
        RouteDef::new("/profile/bids", View::Lazy(my_bids_view))
            .named("my-bids")
            .requires_auth(),
        // Watchlist of favorited listings.
        RouteDef::new("/favorites", View::Lazy(favorites_view))
            .named("favorites")
            .requires_auth(),
        // Buyer/seller chat: the session list and a single conversation.
        RouteDef::new("/chat", View::Lazy(chat_view))
            .named("chat")
            .requires_auth(),
        RouteDef::new("/chat/{id}", View::Lazy(chat_session_view))
            .named("chat-session")
            .requires_auth(),
        // Account settings (password, avatar, locale).
        RouteDef::new("/settings", View::Lazy(settings_view))
            .named("settings")
            .requires_auth(),
    ]
}

fn profile_view() -> &'static str {
    "ProfilePage"
}

fn my_products_view() -> &'static str {
    "MyProductsPage"
}

fn my_bids_view() -> &'static str {
    "MyBidsPage"
}

fn favorites_view() -> &'static str {
    "FavoritesPage"
}

fn chat_view() -> &'static str {
    "ChatListPage"
}

fn chat_session_view() -> &'static str {
    "ChatSessionPage"
}

fn settings_view() -> &'static str {
    "SettingsPage"
}
