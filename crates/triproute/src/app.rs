// File: src/app.rs
// Purpose: Wires configuration into the trip route table and guard

use anyhow::{ensure, Result};
use tracing::debug;

use crate::config::Config;
use crate::storage::FileTokenStore;
use triproute_router::trips::trip_routes;
use triproute_router::{AuthContext, AuthGuard, Location, Navigator, Router, TokenStore};

/// Configured trip planner
pub struct App {
    config: Config,
    navigator: Navigator,
}

impl App {
    /// Builds the route table and guard from `config`
    ///
    /// Fails if the guard's redirect target is not itself a route. Query and
    /// hash on the target are ignored for that check.
    pub fn new(config: Config) -> Result<Self> {
        let router = Router::with_case_insensitive(config.routing.case_insensitive)
            .with_routes(trip_routes()?)?;

        ensure!(
            router
                .match_route(&Location::parse(&config.auth.redirect_to).path)
                .is_some(),
            "auth.redirect_to `{}` does not match any route",
            config.auth.redirect_to
        );

        let navigator = Navigator::new(router)
            .with_guard(AuthGuard::with_redirect(config.auth.redirect_to.as_str()))
            .with_max_redirects(config.routing.max_redirects);

        debug!(
            routes = navigator.router().routes().len(),
            redirect_to = %config.auth.redirect_to,
            "trip planner routes registered"
        );

        Ok(Self { config, navigator })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn router(&self) -> &Router {
        self.navigator.router()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    /// Reads the configured token key from `store`
    pub fn auth_from_store<S: TokenStore + ?Sized>(&self, store: &S) -> AuthContext {
        AuthContext::from_store(store, &self.config.auth.token_key)
    }

    /// Opens the configured file store, if any
    pub fn open_store(&self) -> Result<Option<FileTokenStore>> {
        self.config
            .auth
            .storage_path
            .as_ref()
            .map(FileTokenStore::open)
            .transpose()
    }

    /// Auth state from the configured file store; anonymous without one
    pub fn load_auth(&self) -> Result<AuthContext> {
        Ok(self
            .open_store()?
            .map(|store| self.auth_from_store(&store))
            .unwrap_or_else(AuthContext::anonymous))
    }
}
