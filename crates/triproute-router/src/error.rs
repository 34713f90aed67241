//! Error types for route registration and navigation

use thiserror::Error;

/// Errors raised while building a route table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern {
        pattern: String,
        reason: &'static str,
    },

    #[error("route pattern `{pattern}` matches the same paths as `{existing}`")]
    DuplicatePattern { pattern: String, existing: String },

    #[error("route name `{0}` is already registered")]
    DuplicateName(String),
}

/// Errors raised while navigating
///
/// A guard redirect is not an error; it is reported on the resulting
/// [`Navigation`](crate::Navigation).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("no route matches `{path}`")]
    NotFound { path: String },

    #[error("navigation to `{path}` exceeded {limit} redirects")]
    RedirectLoop { path: String, limit: usize },

    #[error("history has no entry {delta} step(s) from the current one")]
    OutOfHistory { delta: isize },
}
