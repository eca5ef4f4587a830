use thiserror::Error;

/// RouterError
///
/// Route table construction failures. All of these are programmer errors in the
/// route declarations, surfaced once at startup. A table that builds cleanly
/// can never fail to resolve a path at runtime.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("duplicate route name `{0}`")]
    DuplicateName(String),

    #[error("duplicate route path `{0}`")]
    DuplicatePath(String),

    #[error("invalid path pattern `{path}`: {reason}")]
    InvalidPattern { path: String, reason: String },

    /// Anything registered after the wildcard fallback would be unreachable.
    #[error("catch-all route `{0}` must be registered last")]
    CatchAllNotLast(String),

    /// Without a final wildcard route, an unmatched path would have nowhere to
    /// land; resolution is only total because this is enforced.
    #[error("route table is missing a catch-all fallback route")]
    MissingCatchAll,
}
