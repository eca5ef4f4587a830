use std::collections::HashMap;
use std::fmt;

use super::error::RouterError;

/// Parameters captured from a matched path, keyed by the name in the pattern.
pub type Params = HashMap<String, String>;

/// One element of a parsed pattern. `{id}` captures a single segment,
/// `{*path}` captures every remaining segment.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
    Wildcard(String),
}

/// PathPattern
///
/// A parsed URL pattern. Matching is purely structural: literals compare
/// exactly, params capture one segment, a wildcard swallows the rest. There is
/// no precedence logic here; the route table resolves in registration order,
/// which is what puts literal routes ahead of the fallback.
#[derive(Debug, Clone)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// parse
    ///
    /// Parses a pattern such as `/products/{id}` or `/{*path}`. Patterns are
    /// rooted, and a wildcard may only appear as the final segment.
    pub fn parse(path: &str) -> Result<Self, RouterError> {
        let invalid = |reason: &str| RouterError::InvalidPattern {
            path: path.to_string(),
            reason: reason.to_string(),
        };

        if !path.starts_with('/') {
            return Err(invalid("pattern must start with '/'"));
        }

        let parts: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();
        let mut segments = Vec::with_capacity(parts.len());

        for (index, part) in parts.iter().enumerate() {
            if let Some(name) = part.strip_prefix("{*").and_then(|p| p.strip_suffix('}')) {
                if name.is_empty() {
                    return Err(invalid("wildcard segment must be named"));
                }
                if index + 1 != parts.len() {
                    return Err(invalid("wildcard segment must be last"));
                }
                segments.push(Segment::Wildcard(name.to_string()));
            } else if let Some(name) = part.strip_prefix('{').and_then(|p| p.strip_suffix('}')) {
                if name.is_empty() {
                    return Err(invalid("parameter segment must be named"));
                }
                segments.push(Segment::Param(name.to_string()));
            } else if part.contains(['{', '}']) {
                return Err(invalid("unbalanced braces in segment"));
            } else {
                segments.push(Segment::Literal((*part).to_string()));
            }
        }

        Ok(Self {
            raw: path.to_string(),
            segments,
        })
    }

    /// The pattern string as declared.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// True for the bare-wildcard pattern that matches every path.
    pub fn is_catch_all(&self) -> bool {
        matches!(self.segments.as_slice(), [Segment::Wildcard(_)])
    }

    /// matches
    ///
    /// Tests a concrete path against this pattern, returning the captured
    /// parameters on success. Trailing slashes are insignificant.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let parts: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();
        let mut params = Params::new();
        let mut remaining = parts.as_slice();

        for segment in &self.segments {
            match segment {
                Segment::Wildcard(name) => {
                    params.insert(name.clone(), remaining.join("/"));
                    return Some(params);
                }
                Segment::Literal(literal) => {
                    let (head, tail) = remaining.split_first()?;
                    if head != literal {
                        return None;
                    }
                    remaining = tail;
                }
                Segment::Param(name) => {
                    let (head, tail) = remaining.split_first()?;
                    params.insert(name.clone(), (*head).to_string());
                    remaining = tail;
                }
            }
        }

        remaining.is_empty().then_some(params)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
