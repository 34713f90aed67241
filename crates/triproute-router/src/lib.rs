//! # triproute router
//!
//! Client-side route table and navigation guard for the trip planner:
//! - Static routes (`/my-trips`)
//! - Named parameters (`/detail/:id`, also written `/detail/{id}`)
//! - Per-route access control (`requires_auth`)
//! - A navigator with guards, redirects and history
//!
//! ## Matching
//!
//! A route table returns the unique route matching a path. Literal segments
//! must be equal; a parameter segment matches any non-empty segment and binds
//! its percent-decoded value. Routes are ordered by specificity (a literal
//! beats a parameter at the same position), never by insertion order.
//!
//! Paths are normalized before matching:
//! - Trailing slashes: `/path/` → `/path`
//! - Double slashes: `/path//to` → `/path/to`
//! - Backslashes: `\path\to` → `/path/to`
//!
//! ## Example
//!
//! ```
//! use triproute_router::{AuthContext, AuthGuard, Navigator, Route, Router};
//!
//! let router = Router::new()
//!     .with_route(Route::new("/", "Homepage").unwrap())
//!     .unwrap()
//!     .with_route(Route::new("/detail/:id", "Detailpage").unwrap().with_props())
//!     .unwrap()
//!     .with_route(Route::new("/create-trip", "Createtrippage").unwrap().with_auth_required())
//!     .unwrap();
//!
//! let route_match = router.match_route("/detail/42").unwrap();
//! assert_eq!(route_match.params.get("id"), Some(&"42".to_string()));
//!
//! let navigator = Navigator::new(router).with_guard(AuthGuard::new());
//! let nav = navigator.resolve("/create-trip", &AuthContext::anonymous()).unwrap();
//! assert_eq!(nav.location.path, "/");
//! ```

use std::collections::HashMap;

use tracing::trace;

// ============================================================================
// Module Declarations
// ============================================================================

mod auth;
mod error;
mod guard;
mod navigation;
pub mod path;
pub mod route;
pub mod trips;

pub use auth::{AuthContext, MemoryTokenStore, TokenStore};
pub use error::{NavigationError, RouteError};
pub use guard::{AuthGuard, GuardOutcome, NavigationGuard};
pub use navigation::{Navigation, Navigator, DEFAULT_MAX_REDIRECTS};
pub use path::{is_valid_path, normalize_path, Location};
pub use route::{classify_segment, parse_pattern, PatternSegmentType, SegmentRank};

use path::location::decode_component;

// ============================================================================
// Core Types
// ============================================================================

/// A path pattern bound to a page and its access-control flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Canonical URL pattern like "/edit-trip/:id"
    pub pattern: String,
    /// Identifier of the page mounted for this route
    pub component: String,
    /// Optional name used for URL generation
    pub name: Option<String>,
    /// Parameter names in path order
    pub params: Vec<String>,
    /// Whether matched parameters are handed to the page as inputs
    pub forward_params: bool,
    /// Whether navigation requires a token to be present
    pub requires_auth: bool,
    /// Arbitrary metadata (titles, analytics tags, etc.)
    pub metadata: HashMap<String, String>,
    segments: Vec<PatternSegmentType>,
    specificity: Vec<SegmentRank>,
    shape: String,
}

/// Result of matching a route against a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// The matched route
    pub route: Route,
    /// Extracted, percent-decoded parameters
    pub params: HashMap<String, String>,
}

// ============================================================================
// Route Implementation
// ============================================================================

impl Route {
    /// Creates a route from a pattern and a page identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use triproute_router::Route;
    ///
    /// let route = Route::new("/edit-trip/{id}", "Edittrippage").unwrap();
    /// assert_eq!(route.pattern, "/edit-trip/:id");
    /// assert_eq!(route.params, vec!["id"]);
    /// assert!(!route.requires_auth);
    ///
    /// assert!(Route::new("edit-trip", "Edittrippage").is_err());
    /// ```
    pub fn new(pattern: &str, component: impl Into<String>) -> Result<Self, RouteError> {
        let parsed = route::parse_pattern(pattern)?;
        let specificity = parsed.specificity();
        let shape = parsed.shape();

        Ok(Route {
            pattern: parsed.pattern,
            component: component.into(),
            name: None,
            params: parsed.params,
            forward_params: false,
            requires_auth: false,
            metadata: HashMap::new(),
            segments: parsed.segments,
            specificity,
            shape,
        })
    }

    /// Per-segment specificity used to order routes
    pub fn specificity(&self) -> &[SegmentRank] {
        &self.specificity
    }

    /// Pattern with parameter names erased (`/edit-trip/:`)
    pub fn shape(&self) -> &str {
        &self.shape
    }

    /// Matches this route against a path (case-sensitive)
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        self.matches_with_options(path, false)
    }

    /// Matches this route against a path with options
    ///
    /// Walks pattern and path segments in lockstep; the first literal
    /// mismatch short-circuits. Path segments are percent-decoded before
    /// both literal comparison and parameter binding.
    pub fn matches_with_options(
        &self,
        path: &str,
        case_insensitive: bool,
    ) -> Option<HashMap<String, String>> {
        let normalized = normalize_path(path);
        let path_segments: Vec<&str> = crate::path::segments(&normalized).collect();

        if path_segments.len() != self.segments.len() {
            return None;
        }

        self.segments
            .iter()
            .zip(path_segments)
            .try_fold(HashMap::new(), |mut params, (segment, raw)| {
                let value = decode_component(raw);
                match segment {
                    PatternSegmentType::Static(text) => {
                        let equal = if case_insensitive {
                            text.eq_ignore_ascii_case(&value)
                        } else {
                            *text == value
                        };
                        equal.then_some(params)
                    }
                    PatternSegmentType::Param(name) => {
                        params.insert(name.clone(), value);
                        Some(params)
                    }
                }
            })
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Sets a name for this route
    ///
    /// ```
    /// use triproute_router::Route;
    ///
    /// let route = Route::new("/detail/:id", "Detailpage").unwrap().with_name("Detail");
    /// assert_eq!(route.name, Some("Detail".to_string()));
    /// ```
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Forwards matched parameters to the page
    pub fn with_props(mut self) -> Self {
        self.forward_params = true;
        self
    }

    /// Marks the route as requiring a token
    pub fn with_auth_required(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// Sets a metadata key-value pair
    ///
    /// ```
    /// use triproute_router::Route;
    ///
    /// let route = Route::new("/my-trips", "Mytripspage")
    ///     .unwrap()
    ///     .with_meta("title", "My trips");
    ///
    /// assert_eq!(route.get_meta("title"), Some(&"My trips".to_string()));
    /// assert!(!route.has_meta("missing"));
    /// ```
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn get_meta(&self, key: &str) -> Option<&String> {
        self.metadata.get(key)
    }

    pub fn has_meta(&self, key: &str) -> bool {
        self.metadata.contains_key(key)
    }

    /// Generates a URL for this route by substituting parameters
    ///
    /// Values are percent-encoded. Returns `None` when a parameter is missing.
    ///
    /// ```
    /// use triproute_router::Route;
    /// use std::collections::HashMap;
    ///
    /// let route = Route::new("/edit-trip/:id", "Edittrippage").unwrap();
    ///
    /// let mut params = HashMap::new();
    /// params.insert("id".to_string(), "7".to_string());
    /// assert_eq!(route.generate_url(&params).unwrap(), "/edit-trip/7");
    ///
    /// assert_eq!(route.generate_url(&HashMap::new()), None);
    /// ```
    pub fn generate_url(&self, params: &HashMap<String, String>) -> Option<String> {
        if self.segments.is_empty() {
            return Some("/".to_string());
        }

        self.segments
            .iter()
            .map(|segment| match segment {
                PatternSegmentType::Static(text) => Some(format!("/{}", text)),
                PatternSegmentType::Param(name) => params
                    .get(name)
                    .filter(|value| !value.is_empty())
                    .map(|value| format!("/{}", urlencoding::encode(value))),
            })
            .collect()
    }
}

// ============================================================================
// Router Implementation
// ============================================================================

/// Route table that performs matching and URL generation
///
/// Routes are kept sorted by specificity. Named routes are indexed for
/// O(1) lookup.
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<Route>,
    named_routes: HashMap<String, Route>,
    case_insensitive: bool,
}

impl Router {
    /// Creates a new router with default settings (case-sensitive)
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a router with the given case sensitivity
    ///
    /// Parameter values always keep their original case.
    ///
    /// ```
    /// use triproute_router::{Route, Router};
    ///
    /// let router = Router::with_case_insensitive(true)
    ///     .with_route(Route::new("/my-trips", "Mytripspage").unwrap())
    ///     .unwrap();
    /// assert!(router.match_route("/My-Trips").is_some());
    /// ```
    pub fn with_case_insensitive(case_insensitive: bool) -> Self {
        Self {
            case_insensitive,
            ..Self::default()
        }
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Adds a route
    ///
    /// Fails if a route with the same shape or the same name is already
    /// registered.
    ///
    /// ```
    /// use triproute_router::{Route, RouteError, Router};
    ///
    /// let router = Router::new()
    ///     .with_route(Route::new("/detail/:id", "Detailpage").unwrap())
    ///     .unwrap();
    ///
    /// let err = router
    ///     .with_route(Route::new("/detail/:slug", "Otherpage").unwrap())
    ///     .unwrap_err();
    /// assert!(matches!(err, RouteError::DuplicatePattern { .. }));
    /// ```
    pub fn with_route(mut self, route: Route) -> Result<Self, RouteError> {
        self.add_route(route)?;
        Ok(self)
    }

    /// Adds multiple routes at once
    pub fn with_routes<I>(mut self, routes: I) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = Route>,
    {
        for route in routes {
            self.add_route(route)?;
        }
        Ok(self)
    }

    fn add_route(&mut self, route: Route) -> Result<(), RouteError> {
        let case_insensitive = self.case_insensitive;
        let same_shape = |existing: &Route| {
            if case_insensitive {
                existing.shape.eq_ignore_ascii_case(&route.shape)
            } else {
                existing.shape == route.shape
            }
        };

        if let Some(existing) = self.routes.iter().find(|&r| same_shape(r)) {
            return Err(RouteError::DuplicatePattern {
                pattern: route.pattern.clone(),
                existing: existing.pattern.clone(),
            });
        }

        if let Some(name) = &route.name {
            if self.named_routes.contains_key(name) {
                return Err(RouteError::DuplicateName(name.clone()));
            }
            self.named_routes.insert(name.clone(), route.clone());
        }

        self.routes.push(route);
        self.routes.sort_by(|a, b| a.specificity.cmp(&b.specificity));
        Ok(())
    }

    // ========================================================================
    // Route Matching and Lookup Methods
    // ========================================================================

    /// Matches a path against all routes and returns the most specific match
    ///
    /// Returns `None` when nothing matches; what to show then is up to the
    /// caller.
    ///
    /// ```
    /// use triproute_router::{Route, Router};
    ///
    /// let router = Router::new()
    ///     .with_route(Route::new("/detail/:id", "Detailpage").unwrap())
    ///     .unwrap();
    ///
    /// let route_match = router.match_route("/detail/42").unwrap();
    /// assert_eq!(route_match.params.get("id"), Some(&"42".to_string()));
    /// assert!(router.match_route("/detail").is_none());
    /// ```
    pub fn match_route(&self, path: &str) -> Option<RouteMatch> {
        let found = self.routes.iter().find_map(|route| {
            route
                .matches_with_options(path, self.case_insensitive)
                .map(|params| RouteMatch {
                    route: route.clone(),
                    params,
                })
        });

        trace!(
            path,
            matched = ?found.as_ref().map(|m| m.route.pattern.as_str()),
            "route lookup"
        );
        found
    }

    /// Returns all registered routes, most specific first
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Gets a route by its name
    pub fn get_route_by_name(&self, name: &str) -> Option<&Route> {
        self.named_routes.get(name)
    }

    /// Generates a URL from a named route and parameters
    ///
    /// ```
    /// use triproute_router::{Route, Router};
    /// use std::collections::HashMap;
    ///
    /// let router = Router::new()
    ///     .with_route(Route::new("/detail/:id", "Detailpage").unwrap().with_name("Detail"))
    ///     .unwrap();
    ///
    /// let mut params = HashMap::new();
    /// params.insert("id".to_string(), "42".to_string());
    /// assert_eq!(router.url_for("Detail", &params).unwrap(), "/detail/42");
    /// assert_eq!(router.url_for("Missing", &params), None);
    /// ```
    pub fn url_for(&self, name: &str, params: &HashMap<String, String>) -> Option<String> {
        self.named_routes
            .get(name)
            .and_then(|route| route.generate_url(params))
    }

    /// Convenience form of [`url_for`](Self::url_for) taking tuples
    ///
    /// ```
    /// use triproute_router::{Route, Router};
    ///
    /// let router = Router::new()
    ///     .with_route(Route::new("/edit-trip/:id", "Edittrippage").unwrap().with_name("EditTrip"))
    ///     .unwrap();
    ///
    /// let url = router.url_for_params("EditTrip", &[("id", "7")]).unwrap();
    /// assert_eq!(url, "/edit-trip/7");
    /// ```
    pub fn url_for_params(&self, name: &str, params: &[(&str, &str)]) -> Option<String> {
        let param_map: HashMap<String, String> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        self.url_for(name, &param_map)
    }
}
