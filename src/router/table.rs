use std::collections::HashSet;

use super::error::RouterError;
use super::pattern::{Params, PathPattern};
use super::route::{AccessPolicy, ResolvedRoute, RouteDef, RouteMeta};

/// RouteTable
///
/// The built, validated route table: an ordered list of resolved leaf routes.
/// Resolution walks the list in registration order and returns the first
/// pattern that matches, so literal routes shadow parameterized ones declared
/// later and the trailing catch-all picks up everything else.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<ResolvedRoute>,
}

/// RouteMatch
///
/// The outcome of resolving a concrete path: the matched route plus any
/// captured parameters.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub route: &'a ResolvedRoute,
    pub params: Params,
}

impl RouteTable {
    /// build
    ///
    /// Flattens the declaration tree into resolved leaf routes and validates
    /// the table invariants: unique names, unique paths, and a catch-all
    /// wildcard registered last.
    ///
    /// The flattening walks each route's full ancestor chain and merges the
    /// access metadata, so a child under a protected section is protected even
    /// if its own declaration forgot the flag.
    pub fn build(defs: Vec<RouteDef>) -> Result<Self, RouterError> {
        let mut routes = Vec::new();
        for def in &defs {
            Self::flatten(def, "", RouteMeta::default(), &mut routes)?;
        }

        let mut names = HashSet::new();
        let mut paths = HashSet::new();
        for route in &routes {
            if let Some(name) = route.name {
                if !names.insert(name) {
                    return Err(RouterError::DuplicateName(name.to_string()));
                }
            }
            if !paths.insert(route.full_path.clone()) {
                return Err(RouterError::DuplicatePath(route.full_path.clone()));
            }
        }

        match routes.iter().position(|route| route.pattern.is_catch_all()) {
            None => return Err(RouterError::MissingCatchAll),
            Some(index) if index + 1 != routes.len() => {
                return Err(RouterError::CatchAllNotLast(
                    routes[index].full_path.clone(),
                ));
            }
            Some(_) => {}
        }

        Ok(Self { routes })
    }

    fn flatten(
        def: &RouteDef,
        parent_path: &str,
        inherited: RouteMeta,
        out: &mut Vec<ResolvedRoute>,
    ) -> Result<(), RouterError> {
        let full_path = join_paths(parent_path, def.path);
        let effective = RouteMeta {
            requires_auth: inherited.requires_auth || def.meta.requires_auth,
            requires_admin: inherited.requires_admin || def.meta.requires_admin,
        };
        let policy = if effective.requires_admin {
            AccessPolicy::RequiresAdmin
        } else if effective.requires_auth {
            AccessPolicy::RequiresAuth
        } else {
            AccessPolicy::Public
        };

        out.push(ResolvedRoute {
            name: def.name,
            full_path: full_path.clone(),
            pattern: PathPattern::parse(&full_path)?,
            view: def.view,
            policy,
        });

        for child in &def.children {
            Self::flatten(child, &full_path, effective, out)?;
        }
        Ok(())
    }

    /// resolve
    ///
    /// Resolution is total: the enforced catch-all means every path lands on
    /// some route, so "not found" is a view, never an error.
    pub fn resolve(&self, path: &str) -> RouteMatch<'_> {
        for route in &self.routes {
            if let Some(params) = route.pattern.matches(path) {
                return RouteMatch { route, params };
            }
        }
        // Unreachable once build() has run: the final route matches any path.
        let route = self
            .routes
            .last()
            .expect("validated route table cannot be empty");
        RouteMatch {
            route,
            params: Params::new(),
        }
    }

    /// Looks a route up by its registered name (redirect targets, links).
    pub fn by_name(&self, name: &str) -> Option<&ResolvedRoute> {
        self.routes.iter().find(|route| route.name == Some(name))
    }

    /// The resolved routes in registration order.
    pub fn routes(&self) -> &[ResolvedRoute] {
        &self.routes
    }
}

/// Joins a relative child path onto its parent. An absolute child path stands
/// alone, matching the nested-route convention of the host framework.
fn join_paths(parent: &str, child: &str) -> String {
    if parent.is_empty() || child.starts_with('/') {
        return child.to_string();
    }
    if child.is_empty() {
        return parent.to_string();
    }
    format!("{}/{}", parent.trim_end_matches('/'), child)
}
