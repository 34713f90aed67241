// File: src/config.rs
// Purpose: Configuration parsing from triproute.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::style::StyleConfig;
use triproute_router::trips::AUTH_TOKEN_KEY;
use triproute_router::DEFAULT_MAX_REDIRECTS;

/// Default config file name
pub const CONFIG_FILE: &str = "triproute.toml";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub routing: RoutingConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub style: StyleConfig,
}

/// Routing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Whether literal segments match case-insensitively (default: true)
    #[serde(default = "default_true")]
    pub case_insensitive: bool,

    /// Redirect hops before a navigation is treated as a loop
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

/// Navigation guard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Storage key whose presence marks the user as signed in
    #[serde(default = "default_token_key")]
    pub token_key: String,

    /// Where protected routes send anonymous users
    #[serde(default = "default_redirect_to")]
    pub redirect_to: String,

    /// JSON file standing in for client-local storage
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_max_redirects() -> usize {
    DEFAULT_MAX_REDIRECTS
}

fn default_token_key() -> String {
    AUTH_TOKEN_KEY.to_string()
}

fn default_redirect_to() -> String {
    "/".to_string()
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            max_redirects: default_max_redirects(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
            redirect_to: default_redirect_to(),
            storage_path: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./triproute.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::DarkMode;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.routing.case_insensitive);
        assert_eq!(config.routing.max_redirects, 8);
        assert_eq!(config.auth.token_key, "authToken");
        assert_eq!(config.auth.redirect_to, "/");
        assert_eq!(config.auth.storage_path, None);
        assert_eq!(config.style.dark_mode, DarkMode::Off);
    }

    #[test]
    fn test_empty_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();

        for (name, content) in [("empty.toml", ""), ("blank.toml", "  \n\t\n")] {
            let path = dir.path().join(name);
            fs::write(&path, content).unwrap();
            assert_eq!(Config::load(&path).unwrap(), Config::default());
        }
    }

    #[test]
    fn test_malformed_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[routing\ncase_insensitive = ").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_partial_sections() {
        let toml = r#"
            [routing]
            case_insensitive = false

            [auth]
            token_key = "session"
            storage_path = "state/local-storage.json"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(!config.routing.case_insensitive);
        assert_eq!(config.routing.max_redirects, 8);
        assert_eq!(config.auth.token_key, "session");
        assert_eq!(config.auth.redirect_to, "/");
        assert_eq!(
            config.auth.storage_path,
            Some(PathBuf::from("state/local-storage.json"))
        );
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load("definitely/not/here/triproute.toml").unwrap();
        assert_eq!(config, Config::default());
    }
}
