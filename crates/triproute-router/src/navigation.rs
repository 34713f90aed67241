//! Navigator: guarded navigation over a route table with history

use std::collections::HashMap;

use tracing::debug;

use crate::{
    AuthContext, GuardOutcome, Location, NavigationError, NavigationGuard, RouteMatch, Router,
};

/// Redirect hops allowed before a navigation is declared a loop
pub const DEFAULT_MAX_REDIRECTS: usize = 8;

/// A completed navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Target as requested by the caller
    pub requested: Location,
    /// Final location after guard redirects
    pub location: Location,
    /// Route matched at the final location
    pub route_match: RouteMatch,
    /// Whether any guard rewrote the target
    pub redirected: bool,
}

impl Navigation {
    /// Page identifier mounted at the final location
    pub fn component(&self) -> &str {
        &self.route_match.route.component
    }

    /// Inputs handed to the page
    ///
    /// Empty unless the route forwards its parameters.
    pub fn props(&self) -> HashMap<String, String> {
        if self.route_match.route.forward_params {
            self.route_match.params.clone()
        } else {
            HashMap::new()
        }
    }
}

/// Runs guards before each navigation and keeps a history stack
///
/// # Examples
///
/// ```
/// use triproute_router::{AuthContext, AuthGuard, Navigator, Route, Router};
///
/// let router = Router::new()
///     .with_route(Route::new("/", "Homepage").unwrap())
///     .unwrap()
///     .with_route(Route::new("/my-trips", "Mytripspage").unwrap().with_auth_required())
///     .unwrap();
/// let mut navigator = Navigator::new(router).with_guard(AuthGuard::new());
///
/// let nav = navigator.push("/my-trips", &AuthContext::authenticated()).unwrap();
/// assert_eq!(nav.location.path, "/my-trips");
/// assert_eq!(navigator.current().unwrap().path, "/my-trips");
/// ```
pub struct Navigator {
    router: Router,
    guards: Vec<Box<dyn NavigationGuard>>,
    history: Vec<Location>,
    cursor: usize,
    max_redirects: usize,
}

impl Navigator {
    pub fn new(router: Router) -> Self {
        Self {
            router,
            guards: Vec::new(),
            history: Vec::new(),
            cursor: 0,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }

    /// Registers a guard; guards run in registration order
    pub fn with_guard<G>(mut self, guard: G) -> Self
    where
        G: NavigationGuard + 'static,
    {
        self.guards.push(Box::new(guard));
        self
    }

    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Current history entry, `None` before the first navigation
    pub fn current(&self) -> Option<&Location> {
        self.history.get(self.cursor)
    }

    pub fn history(&self) -> &[Location] {
        &self.history
    }

    /// Resolves a target through the guards without touching history
    ///
    /// The first guard that redirects wins; the new target is matched and
    /// guarded again from scratch.
    pub fn resolve(&self, target: &str, auth: &AuthContext) -> Result<Navigation, NavigationError> {
        let requested = Location::parse(target);
        let from = self.current();
        let mut location = requested.clone();
        let mut redirected = false;

        for _ in 0..=self.max_redirects {
            let route_match = self.router.match_route(&location.path).ok_or_else(|| {
                NavigationError::NotFound {
                    path: location.path.clone(),
                }
            })?;

            match self.run_guards(&route_match, from, auth) {
                GuardOutcome::Allowed => {
                    return Ok(Navigation {
                        requested,
                        location,
                        route_match,
                        redirected,
                    });
                }
                GuardOutcome::Redirected { to } => {
                    debug!(from = %location, to = %to, "navigation redirected");
                    location = Location::parse(&to);
                    redirected = true;
                }
            }
        }

        Err(NavigationError::RedirectLoop {
            path: requested.full_path(),
            limit: self.max_redirects,
        })
    }

    /// Navigates to `target` and appends the final location to history
    ///
    /// Forward entries beyond the current one are discarded.
    pub fn push(&mut self, target: &str, auth: &AuthContext) -> Result<Navigation, NavigationError> {
        let navigation = self.resolve(target, auth)?;

        if !self.history.is_empty() {
            self.history.truncate(self.cursor + 1);
        }
        self.history.push(navigation.location.clone());
        self.cursor = self.history.len() - 1;

        Ok(navigation)
    }

    /// Navigates to `target` and overwrites the current history entry
    pub fn replace(
        &mut self,
        target: &str,
        auth: &AuthContext,
    ) -> Result<Navigation, NavigationError> {
        let navigation = self.resolve(target, auth)?;

        match self.history.get_mut(self.cursor) {
            Some(entry) => *entry = navigation.location.clone(),
            None => self.history.push(navigation.location.clone()),
        }

        Ok(navigation)
    }

    /// Moves `delta` entries through history, re-running guards on the entry
    ///
    /// If a guard redirects, the entry is replaced by the final location.
    pub fn go(&mut self, delta: isize, auth: &AuthContext) -> Result<Navigation, NavigationError> {
        let index = self
            .cursor
            .checked_add_signed(delta)
            .filter(|&index| index < self.history.len())
            .ok_or(NavigationError::OutOfHistory { delta })?;

        let target = self.history[index].full_path();
        let navigation = self.resolve(&target, auth)?;

        self.history[index] = navigation.location.clone();
        self.cursor = index;

        Ok(navigation)
    }

    pub fn back(&mut self, auth: &AuthContext) -> Result<Navigation, NavigationError> {
        self.go(-1, auth)
    }

    pub fn forward(&mut self, auth: &AuthContext) -> Result<Navigation, NavigationError> {
        self.go(1, auth)
    }

    fn run_guards(
        &self,
        to: &RouteMatch,
        from: Option<&Location>,
        auth: &AuthContext,
    ) -> GuardOutcome {
        self.guards
            .iter()
            .map(|guard| guard.before_each(to, from, auth))
            .find(|outcome| !outcome.is_allowed())
            .unwrap_or(GuardOutcome::Allowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AuthGuard, Route};

    fn navigator() -> Navigator {
        let router = Router::new()
            .with_routes([
                Route::new("/", "Homepage").unwrap(),
                Route::new("/detail/:id", "Detailpage").unwrap().with_props(),
                Route::new("/my-trips", "Mytripspage")
                    .unwrap()
                    .with_auth_required(),
            ])
            .unwrap();
        Navigator::new(router).with_guard(AuthGuard::new())
    }

    #[test]
    fn test_resolve_does_not_touch_history() {
        let nav = navigator();
        nav.resolve("/detail/1", &AuthContext::anonymous()).unwrap();
        assert!(nav.history().is_empty());
        assert_eq!(nav.current(), None);
    }

    #[test]
    fn test_props_only_when_forwarded() {
        let nav = navigator();
        let anon = AuthContext::anonymous();

        let detail = nav.resolve("/detail/9", &anon).unwrap();
        assert_eq!(detail.props().get("id"), Some(&"9".to_string()));

        let home = nav.resolve("/", &anon).unwrap();
        assert!(home.props().is_empty());
    }

    #[test]
    fn test_not_found() {
        let nav = navigator();
        let err = nav.resolve("/nowhere", &AuthContext::anonymous()).unwrap_err();
        assert_eq!(
            err,
            NavigationError::NotFound {
                path: "/nowhere".to_string()
            }
        );
    }

    #[test]
    fn test_redirect_target_without_route_is_not_found() {
        let router = Router::new()
            .with_route(
                Route::new("/my-trips", "Mytripspage")
                    .unwrap()
                    .with_auth_required(),
            )
            .unwrap();
        let nav = Navigator::new(router).with_guard(AuthGuard::new());

        let err = nav.resolve("/my-trips", &AuthContext::anonymous()).unwrap_err();
        assert_eq!(err, NavigationError::NotFound { path: "/".to_string() });
    }

    #[test]
    fn test_redirect_loop_detected() {
        let router = Router::new()
            .with_route(Route::new("/a", "A").unwrap().with_auth_required())
            .unwrap();
        let nav = Navigator::new(router)
            .with_guard(AuthGuard::with_redirect("/a"))
            .with_max_redirects(3);

        let err = nav.resolve("/a", &AuthContext::anonymous()).unwrap_err();
        assert_eq!(
            err,
            NavigationError::RedirectLoop {
                path: "/a".to_string(),
                limit: 3
            }
        );
    }

    #[test]
    fn test_first_redirecting_guard_wins() {
        let router = Router::new()
            .with_routes([
                Route::new("/", "Homepage").unwrap(),
                Route::new("/about", "Aboutpage").unwrap(),
                Route::new("/my-trips", "Mytripspage")
                    .unwrap()
                    .with_auth_required(),
            ])
            .unwrap();
        let nav = Navigator::new(router)
            .with_guard(AuthGuard::new())
            .with_guard(AuthGuard::with_redirect("/about"));

        let result = nav.resolve("/my-trips", &AuthContext::anonymous()).unwrap();
        assert_eq!(result.location.path, "/");
    }

    #[test]
    fn test_push_and_back_forward() {
        let mut nav = navigator();
        let anon = AuthContext::anonymous();

        nav.push("/", &anon).unwrap();
        nav.push("/detail/1", &anon).unwrap();
        nav.push("/detail/2", &anon).unwrap();

        let back = nav.back(&anon).unwrap();
        assert_eq!(back.location.path, "/detail/1");

        let forward = nav.forward(&anon).unwrap();
        assert_eq!(forward.location.path, "/detail/2");

        assert_eq!(
            nav.forward(&anon).unwrap_err(),
            NavigationError::OutOfHistory { delta: 1 }
        );
    }

    #[test]
    fn test_push_discards_forward_entries() {
        let mut nav = navigator();
        let anon = AuthContext::anonymous();

        nav.push("/", &anon).unwrap();
        nav.push("/detail/1", &anon).unwrap();
        nav.back(&anon).unwrap();
        nav.push("/detail/3", &anon).unwrap();

        let paths: Vec<&str> = nav.history().iter().map(|l| l.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/detail/3"]);
    }

    #[test]
    fn test_replace_overwrites_current() {
        let mut nav = navigator();
        let anon = AuthContext::anonymous();

        nav.replace("/detail/1", &anon).unwrap();
        nav.replace("/detail/2", &anon).unwrap();

        assert_eq!(nav.history().len(), 1);
        assert_eq!(nav.current().unwrap().path, "/detail/2");
    }

    #[test]
    fn test_back_reguards_entry_after_logout() {
        let mut nav = navigator();
        let token = AuthContext::authenticated();
        let anon = AuthContext::anonymous();

        nav.push("/my-trips", &token).unwrap();
        nav.push("/detail/5", &token).unwrap();

        let back = nav.back(&anon).unwrap();
        assert!(back.redirected);
        assert_eq!(back.location.path, "/");
        assert_eq!(nav.history()[0].path, "/");
    }

    #[test]
    fn test_go_before_start_is_out_of_history() {
        let mut nav = navigator();
        let anon = AuthContext::anonymous();

        assert!(matches!(
            nav.back(&anon),
            Err(NavigationError::OutOfHistory { delta: -1 })
        ));
        nav.push("/", &anon).unwrap();
        assert!(nav.back(&anon).is_err());
    }
}
