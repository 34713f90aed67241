/// Path utilities for validation and normalization
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

pub mod location;
pub use location::Location;

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use triproute_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/my-trips"));
/// assert!(is_valid_path("/detail/42"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("my-trips")); // Missing leading /
/// assert!(!is_valid_path("/my-trips/")); // Trailing /
/// assert!(!is_valid_path("/detail//42")); // Double //
/// assert!(!is_valid_path("/detail\\42")); // Backslash
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when input is already valid, `Cow::Owned` otherwise.
///
/// Handles:
/// - Trailing slashes: `/path/` → `/path`
/// - Double slashes: `/path//to` → `/path/to`
/// - Backslashes: `\path\to` → `/path/to`
/// - Missing leading slash: `path` → `/path`
///
/// # Examples
///
/// ```
/// use triproute_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// let path = normalize_path("/my-trips");
/// assert!(matches!(path, Cow::Borrowed("/my-trips")));
///
/// assert_eq!(normalize_path("/my-trips/"), "/my-trips");
/// assert_eq!(normalize_path("\\detail\\42"), "/detail/42");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

/// Splits a path into its non-empty segments
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
