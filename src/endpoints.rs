//! REST endpoint table for the auction backend.
//!
//! Paths and verbs are the backend's contract and are not renegotiable here;
//! the table only prefixes them with the configured API base. Parameterized
//! entries are methods, fixed entries are precomputed strings.

/// Endpoints
///
/// The full endpoint table, grouped the way the backend groups its routers.
/// Built once at bootstrap from [`AppConfig::api_base_url`](crate::AppConfig)
/// and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub auth: AuthEndpoints,
    pub products: ProductEndpoints,
    pub categories: CategoryEndpoints,
    pub chat: ChatEndpoints,
    pub users: UserEndpoints,
    pub questions: QuestionEndpoints,
}

impl Endpoints {
    pub fn new(api_base: &str) -> Self {
        let base = format!("{}/v1", api_base.trim_end_matches('/'));
        Self {
            auth: AuthEndpoints::new(&base),
            products: ProductEndpoints::new(&base),
            categories: CategoryEndpoints::new(&base),
            chat: ChatEndpoints::new(&base),
            users: UserEndpoints::new(&base),
            questions: QuestionEndpoints::new(&base),
        }
    }
}

/// Authentication and account verification flows.
#[derive(Debug, Clone)]
pub struct AuthEndpoints {
    pub login: String,
    pub register: String,
    pub forgot: String,
    pub refresh: String,
    pub logout: String,
    pub verify: String,
    pub verify_check: String,
}

impl AuthEndpoints {
    fn new(base: &str) -> Self {
        Self {
            login: format!("{base}/auth/login"),
            register: format!("{base}/auth/register"),
            forgot: format!("{base}/auth/forgot"),
            refresh: format!("{base}/auth/refresh"),
            logout: format!("{base}/auth/logout"),
            verify: format!("{base}/auth/verify"),
            verify_check: format!("{base}/auth/verify/check"),
        }
    }
}

/// Listing browse, bidding, and seller moderation of individual products.
#[derive(Debug, Clone)]
pub struct ProductEndpoints {
    base: String,
    pub get: String,
    pub favorite: String,
    pub top: String,
}

impl ProductEndpoints {
    fn new(base: &str) -> Self {
        Self {
            base: format!("{base}/products"),
            get: format!("{base}/products"),
            favorite: format!("{base}/products/favorite"),
            top: format!("{base}/products/top"),
        }
    }

    pub fn details(&self, id: i64) -> String {
        format!("{}/{id}", self.base)
    }

    pub fn bids(&self, id: i64) -> String {
        format!("{}/{id}/bids", self.base)
    }

    pub fn description(&self, id: i64) -> String {
        format!("{}/{id}/description", self.base)
    }

    /// Sellers can deny specific bidders on their own listings.
    pub fn denials(&self, id: i64) -> String {
        format!("{}/{id}/denials", self.base)
    }
}

/// Category tree reads plus the admin-only mutations.
#[derive(Debug, Clone)]
pub struct CategoryEndpoints {
    base: String,
    pub get: String,
    pub post: String,
}

impl CategoryEndpoints {
    fn new(base: &str) -> Self {
        Self {
            base: format!("{base}/categories"),
            get: format!("{base}/categories"),
            post: format!("{base}/categories"),
        }
    }

    pub fn edit(&self, id: i64) -> String {
        format!("{}/{id}", self.base)
    }

    pub fn delete(&self, id: i64) -> String {
        format!("{}/{id}", self.base)
    }
}

/// Buyer/seller chat sessions; `stream` is the server-sent-events feed.
#[derive(Debug, Clone)]
pub struct ChatEndpoints {
    base: String,
    pub stream: String,
    pub index: String,
}

impl ChatEndpoints {
    fn new(base: &str) -> Self {
        Self {
            base: format!("{base}/chat"),
            stream: format!("{base}/chat/stream"),
            index: format!("{base}/chat"),
        }
    }

    pub fn id(&self, id: i64) -> String {
        format!("{}/{id}", self.base)
    }
}

/// Account management. `me` covers the authenticated user's own resources;
/// `all`, `request`, and `approve` are the admin moderation surface.
#[derive(Debug, Clone)]
pub struct UserEndpoints {
    pub all: String,
    pub request: String,
    pub approve: String,
    pub avatar: String,
    pub me: MeEndpoints,
}

impl UserEndpoints {
    fn new(base: &str) -> Self {
        Self {
            all: format!("{base}/users"),
            request: format!("{base}/users/request"),
            approve: format!("{base}/users/approve"),
            avatar: format!("{base}/users/avatar"),
            me: MeEndpoints::new(base),
        }
    }
}

/// The authenticated user's own profile and activity.
#[derive(Debug, Clone)]
pub struct MeEndpoints {
    pub index: String,
    pub products: String,
    pub bids: String,
    pub password: String,
    pub ratings: String,
    pub rated: String,
}

impl MeEndpoints {
    fn new(base: &str) -> Self {
        Self {
            index: format!("{base}/users/me"),
            products: format!("{base}/users/me/products"),
            bids: format!("{base}/users/me/bids"),
            password: format!("{base}/users/me/password"),
            ratings: format!("{base}/users/me/ratings"),
            rated: format!("{base}/users/me/rated"),
        }
    }
}

/// Pre-sale Q&A between prospective buyers and the seller.
#[derive(Debug, Clone)]
pub struct QuestionEndpoints {
    base: String,
    pub index: String,
}

impl QuestionEndpoints {
    fn new(base: &str) -> Self {
        Self {
            base: format!("{base}/questions"),
            index: format!("{base}/questions"),
        }
    }

    pub fn id(&self, id: i64) -> String {
        format!("{}/{id}", self.base)
    }
}
