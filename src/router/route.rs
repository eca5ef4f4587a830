use super::pattern::PathPattern;

/// View
///
/// A reference to the view a route renders. `Eager` views are bundled with the
/// application shell; `Lazy` views resolve their identifier on first render,
/// mirroring code-split pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Eager(&'static str),
    Lazy(fn() -> &'static str),
}

impl View {
    /// The identifier of the view, resolving a lazy reference if needed.
    pub fn resolve(&self) -> &'static str {
        match self {
            View::Eager(name) => name,
            View::Lazy(load) => load(),
        }
    }
}

/// RouteMeta
///
/// Access requirements declared on a single route entry. Children do NOT
/// inherit these implicitly at the declaration level; the table build flattens
/// the ancestor chain so the effective policy can never be silently weaker
/// than a parent's.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_admin: bool,
}

/// AccessPolicy
///
/// The effective access requirement of a leaf route after the registration
/// pass merged its whole ancestor chain. The variants are strictly ordered:
/// admin implies authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    Public,
    RequiresAuth,
    RequiresAdmin,
}

impl AccessPolicy {
    pub fn requires_auth(self) -> bool {
        !matches!(self, AccessPolicy::Public)
    }

    pub fn requires_admin(self) -> bool {
        matches!(self, AccessPolicy::RequiresAdmin)
    }
}

/// RouteDef
///
/// One declared route. Constructed once at startup by the declaration modules
/// and consumed by [`RouteTable::build`](super::RouteTable::build); immutable
/// afterwards. Child paths are relative to their parent.
#[derive(Debug, Clone)]
pub struct RouteDef {
    pub name: Option<&'static str>,
    pub path: &'static str,
    pub view: View,
    pub meta: RouteMeta,
    pub children: Vec<RouteDef>,
}

impl RouteDef {
    pub fn new(path: &'static str, view: View) -> Self {
        Self {
            name: None,
            path,
            view,
            meta: RouteMeta::default(),
            children: Vec::new(),
        }
    }

    /// Names the route so redirects and reverse lookups can target it.
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn requires_auth(mut self) -> Self {
        self.meta.requires_auth = true;
        self
    }

    pub fn requires_admin(mut self) -> Self {
        self.meta.requires_admin = true;
        self
    }

    pub fn child(mut self, child: RouteDef) -> Self {
        self.children.push(child);
        self
    }
}

/// ResolvedRoute
///
/// A leaf entry of the built table: absolute path, parsed pattern, and the
/// effective access policy flattened from the declaration's ancestor chain.
#[derive(Debug, Clone)]
pub struct ResolvedRoute {
    pub name: Option<&'static str>,
    pub full_path: String,
    pub pattern: PathPattern,
    pub view: View,
    pub policy: AccessPolicy,
}
