//! Navigation guards
//!
//! A guard runs synchronously before each navigation and either lets it
//! through or rewrites the destination.

use tracing::debug;

use crate::{AuthContext, Location, RouteMatch};

/// Result of running a guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Navigation proceeds unmodified
    Allowed,
    /// Navigation is abandoned in favor of `to`
    Redirected { to: String },
}

impl GuardOutcome {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardOutcome::Allowed)
    }
}

/// Hook evaluated before every navigation
///
/// Closures with the matching signature are guards too:
///
/// ```
/// use triproute_router::{AuthContext, GuardOutcome, Location, Navigator, Route, RouteMatch, Router};
///
/// let router = Router::new()
///     .with_route(Route::new("/", "Homepage").unwrap())
///     .unwrap();
/// let navigator = Navigator::new(router).with_guard(
///     |_to: &RouteMatch, _from: Option<&Location>, _auth: &AuthContext| GuardOutcome::Allowed,
/// );
/// ```
pub trait NavigationGuard: Send + Sync {
    fn before_each(
        &self,
        to: &RouteMatch,
        from: Option<&Location>,
        auth: &AuthContext,
    ) -> GuardOutcome;
}

impl<F> NavigationGuard for F
where
    F: Fn(&RouteMatch, Option<&Location>, &AuthContext) -> GuardOutcome + Send + Sync,
{
    fn before_each(
        &self,
        to: &RouteMatch,
        from: Option<&Location>,
        auth: &AuthContext,
    ) -> GuardOutcome {
        self(to, from, auth)
    }
}

/// Redirects protected routes when no token is present
///
/// # Examples
///
/// ```
/// use triproute_router::{AuthContext, AuthGuard, GuardOutcome, NavigationGuard, Route, RouteMatch};
/// use std::collections::HashMap;
///
/// let route = Route::new("/my-trips", "Mytripspage").unwrap().with_auth_required();
/// let to = RouteMatch { route, params: HashMap::new() };
///
/// let guard = AuthGuard::new();
/// assert_eq!(
///     guard.before_each(&to, None, &AuthContext::anonymous()),
///     GuardOutcome::Redirected { to: "/".to_string() }
/// );
/// assert!(guard.before_each(&to, None, &AuthContext::authenticated()).is_allowed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthGuard {
    redirect_to: String,
}

impl AuthGuard {
    /// Guard that redirects to the root route
    pub fn new() -> Self {
        Self::with_redirect("/")
    }

    pub fn with_redirect(redirect_to: impl Into<String>) -> Self {
        Self {
            redirect_to: redirect_to.into(),
        }
    }

    pub fn redirect_to(&self) -> &str {
        &self.redirect_to
    }
}

impl Default for AuthGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationGuard for AuthGuard {
    fn before_each(
        &self,
        to: &RouteMatch,
        _from: Option<&Location>,
        auth: &AuthContext,
    ) -> GuardOutcome {
        if to.route.requires_auth && !auth.is_authenticated() {
            debug!(
                pattern = %to.route.pattern,
                redirect_to = %self.redirect_to,
                "protected route requested without token"
            );
            return GuardOutcome::Redirected {
                to: self.redirect_to.clone(),
            };
        }

        GuardOutcome::Allowed
    }
}
