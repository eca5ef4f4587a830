use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// --- Core Application Schemas (Shared with the Backend API) ---

/// Profile
///
/// The current session's authenticated identity as returned by `GET /v1/users/me`.
/// Absence of a profile means "no session"; the guard treats a failed fetch and
/// an anonymous visitor identically.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct Profile {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
    pub avatar_url: Option<String>,
    // The RBAC field: a user is an administrator when "admin" is present.
    pub roles: Vec<String>,
    // "google" or "none", depending on how the account was created.
    pub oauth_type: String,
    pub verified: bool,
}

impl Profile {
    /// Whether this profile carries the administrator role.
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|role| role == "admin")
    }
}

/// Category
///
/// A product category node. Categories form a tree; `subcategories` is populated
/// by the backend when listing, `parent_id` when editing.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub parent_id: Option<i64>,
    pub subcategories: Vec<Category>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
    // Soft-deleted categories stay referenced by historical listings.
    #[ts(type = "string | null")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Seller
///
/// The listing-embedded view of a seller. Only the public display fields; the
/// full account lives behind the users endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct Seller {
    pub name: String,
    pub email: String,
}

/// StepBidType
///
/// How the minimum increment between consecutive bids is computed: as a
/// percentage of the current price, or as a fixed amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum StepBidType {
    Percentage,
    #[default]
    Fixed,
}

/// ProductListing
///
/// A single auction listing as rendered on the browse and detail pages.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct ProductListing {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub thumbnail_url: String,
    // Buy-it-now price; bidding ends immediately when it is met.
    pub bin_price: f64,
    pub starting_bid: f64,
    pub allows_unrated_buyers: bool,
    // When true, late bids push the expiry out (anti-sniping).
    pub auto_extends_time: bool,
    pub step_bid_type: StepBidType,
    pub step_bid_value: f64,
    pub seller: Seller,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub expired_at: DateTime<Utc>,
}
