//! # triproute
//!
//! Trip planner routing built on [`triproute_router`]:
//! - [`Config`] loaded from `triproute.toml`
//! - [`FileTokenStore`], a JSON file standing in for client-local storage
//! - [`StyleConfig`] and [`ContentScanner`] for the utility-CSS build tool
//! - [`App`], which wires the three together

pub mod app;
pub mod config;
pub mod storage;
pub mod style;

pub use app::App;
pub use config::{AuthConfig, Config, RoutingConfig, CONFIG_FILE};
pub use storage::FileTokenStore;
pub use style::{ContentScanner, DarkMode, StyleConfig, StyleError};

pub use triproute_router as router;
