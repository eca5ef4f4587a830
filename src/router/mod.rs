/// Router Module Index
///
/// Organizes the route declarations into access-segregated modules, so the
/// required session level of every section is visible at the module boundary
/// rather than buried per-entry.
///
/// The three declaration modules map directly to the defined access levels;
/// the remaining modules are the table machinery they feed.
// Routes accessible to all visitors (storefront, identity gateway, fallback).
pub mod public;

// Routes requiring a resolved session.
pub mod authenticated;

// Routes restricted to users carrying the 'admin' role.
pub mod admin;

mod error;
mod pattern;
mod route;
mod table;

pub use error::RouterError;
pub use pattern::{Params, PathPattern};
pub use route::{AccessPolicy, ResolvedRoute, RouteDef, RouteMeta, View};
pub use table::{RouteMatch, RouteTable};

/// route_table
///
/// Assembles the application's entire route table: public entries, the
/// authenticated section, the admin section nested under `/admin`, and the
/// catch-all fallback pinned to the end. Building validates the table
/// invariants, so a malformed declaration fails here at startup rather than
/// during some later navigation.
pub fn route_table() -> Result<RouteTable, RouterError> {
    let mut defs = public::public_routes();
    defs.extend(authenticated::authenticated_routes());
    defs.push(admin::admin_routes());
    defs.push(public::fallback_route());
    RouteTable::build(defs)
}
