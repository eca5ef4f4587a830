use super::route::{RouteDef, View};

/// Admin Route Declarations
///
/// The moderation section, nested under `/admin`: user management and seller
/// approvals, the category tree, and question oversight.
///
/// Access Control:
/// The section root and every child are tagged `requires_auth` and
/// `requires_admin` individually, since children do not inherit metadata at the
/// declaration level. The table build additionally flattens the ancestor
/// chain, so a future child that omits the tags still resolves to the admin
/// policy instead of silently shipping unprotected.
pub fn admin_routes() -> RouteDef {
    RouteDef::new("/admin", View::Lazy(dashboard_view))
        .named("admin-dashboard")
        .requires_auth()
        .requires_admin()
        // User moderation: list all accounts, approve pending sellers.
        .child(
            RouteDef::new("users", View::Lazy(users_view))
                .named("admin-users")
                .requires_auth()
                .requires_admin(),
        )
        .child(
            RouteDef::new("users/approvals", View::Lazy(user_approvals_view))
                .named("admin-user-approvals")
                .requires_auth()
                .requires_admin(),
        )
        // Category tree maintenance (create, rename, soft-delete).
        .child(
            RouteDef::new("categories", View::Lazy(categories_view))
                .named("admin-categories")
                .requires_auth()
                .requires_admin(),
        )
        // Oversight of pre-sale Q&A threads.
        .child(
            RouteDef::new("questions", View::Lazy(questions_view))
                .named("admin-questions")
                .requires_auth()
                .requires_admin(),
        )
}

fn dashboard_view() -> &'static str {
    "AdminDashboardPage"
}

fn users_view() -> &'static str {
    "AdminUsersPage"
}

fn user_approvals_view() -> &'static str {
    "AdminUserApprovalsPage"
}

fn categories_view() -> &'static str {
    "AdminCategoriesPage"
}

fn questions_view() -> &'static str {
    "AdminQuestionsPage"
}
