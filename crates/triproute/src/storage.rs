// File: src/storage.rs
// Purpose: File-backed stand-in for client-local storage

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use triproute_router::TokenStore;

/// Key-value store persisted as a flat JSON object
///
/// ```json
/// { "authToken": "abc123" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTokenStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileTokenStore {
    /// Opens the store at `path`; a missing or empty file is an empty store
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            return Ok(Self {
                path,
                items: BTreeMap::new(),
            });
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read token store: {:?}", path))?;

        let items = if content.trim().is_empty() {
            BTreeMap::new()
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse token store: {:?}", path))?
        };

        Ok(Self { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set_item(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.items.insert(key.into(), value.into());
    }

    pub fn remove_item(&mut self, key: &str) -> Option<String> {
        self.items.remove(key)
    }

    /// Writes the store back to disk, creating parent directories
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(&self.items)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write token store: {:?}", self.path))?;

        tracing::debug!(path = ?self.path, entries = self.items.len(), "token store saved");
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use triproute_router::AuthContext;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = FileTokenStore::open(dir.path().join("storage.json")).unwrap();
        assert_eq!(store.get_item("authToken"), None);
    }

    #[test]
    fn test_save_and_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/storage.json");

        let mut store = FileTokenStore::open(&path).unwrap();
        store.set_item("authToken", "abc123");
        store.save().unwrap();

        let reopened = FileTokenStore::open(&path).unwrap();
        assert_eq!(reopened.get_item("authToken"), Some("abc123".to_string()));
        assert!(AuthContext::from_store(&reopened, "authToken").is_authenticated());
    }

    #[test]
    fn test_remove_item() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, r#"{"authToken":"abc123","theme":"dark"}"#).unwrap();

        let mut store = FileTokenStore::open(&path).unwrap();
        assert_eq!(store.remove_item("authToken"), Some("abc123".to_string()));
        store.save().unwrap();

        let reopened = FileTokenStore::open(&path).unwrap();
        assert_eq!(reopened.get_item("authToken"), None);
        assert_eq!(reopened.get_item("theme"), Some("dark".to_string()));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        let err = FileTokenStore::open(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse token store"));
    }
}
