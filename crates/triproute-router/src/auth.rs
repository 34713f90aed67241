//! Authentication signal consulted by navigation guards
//!
//! The only question asked is whether a token is present. Its contents,
//! expiry and signature are never inspected.

use std::collections::HashMap;

/// Key-value storage holding the authentication token
///
/// Mirrors the read side of browser local storage.
pub trait TokenStore {
    /// Returns the stored value for `key`, if any
    fn get_item(&self, key: &str) -> Option<String>;
}

impl<S: TokenStore + ?Sized> TokenStore for &S {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }
}

/// In-memory token store
///
/// # Examples
///
/// ```
/// use triproute_router::{AuthContext, MemoryTokenStore};
///
/// let store = MemoryTokenStore::new().with_item("authToken", "abc123");
/// assert!(AuthContext::from_store(&store, "authToken").is_authenticated());
/// assert!(!AuthContext::from_store(&store, "otherKey").is_authenticated());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTokenStore {
    items: HashMap<String, String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder variant of [`set_item`](Self::set_item)
    pub fn with_item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_item(key, value);
        self
    }

    pub fn set_item(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.items.insert(key.into(), value.into());
    }

    pub fn remove_item(&mut self, key: &str) -> Option<String> {
        self.items.remove(key)
    }
}

impl TokenStore for MemoryTokenStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }
}

/// Explicit authentication state passed into guards at call time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthContext {
    authenticated: bool,
}

impl AuthContext {
    /// No token present
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
        }
    }

    /// A token is present
    pub fn authenticated() -> Self {
        Self {
            authenticated: true,
        }
    }

    /// Builds a context from a raw token value
    ///
    /// An empty string counts as absent.
    pub fn from_token(token: Option<&str>) -> Self {
        Self {
            authenticated: token.is_some_and(|t| !t.is_empty()),
        }
    }

    /// Reads `key` from `store` once and records whether a token is present
    pub fn from_store<S: TokenStore + ?Sized>(store: &S, key: &str) -> Self {
        Self::from_token(store.get_item(key).as_deref())
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}
