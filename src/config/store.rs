//! Shared configuration storage.
//!
//! Holds the config read from disk together with its path. Command-line
//! overrides are applied through [`ConfigStore::update`] before the merged
//! result is validated and handed out.

use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::types::Config;

/// Thread-safe config container with interior mutability.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    /// Create a new ConfigStore from initial config and path.
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Apply an in-place edit, e.g. command-line overrides.
    pub fn update<F: FnOnce(&mut Config)>(&self, edit: F) {
        let mut guard = self.inner.write();
        edit(&mut guard);
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
