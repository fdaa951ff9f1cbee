//! In-memory agent configuration table.
//!
//! Backed by a `DashMap`, so each get/set is atomic per key and readers on
//! other threads never observe a torn value.

use std::path::{Path, PathBuf};

use agentinfo_core::AgentConfigPort;
use dashmap::DashMap;
use tracing::debug;

use crate::properties::{ConfigFileError, load_properties_file};

/// Concurrent key/value configuration store with a fixed working directory.
#[derive(Debug)]
pub struct InMemoryConfigStore {
    parameters: DashMap<String, String>,
    work_directory: PathBuf,
}

impl InMemoryConfigStore {
    /// Create an empty store for the given working directory.
    pub fn new(work_directory: impl Into<PathBuf>) -> Self {
        Self {
            parameters: DashMap::new(),
            work_directory: work_directory.into(),
        }
    }

    /// Insert every pair, overwriting existing keys.
    pub fn extend<I, K, V>(&self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.parameters.insert(key.into(), value.into());
        }
    }

    /// Seed the store from a properties file. Returns the number of entries read.
    pub fn load_properties(&self, path: &Path) -> Result<usize, ConfigFileError> {
        let pairs = load_properties_file(path)?;
        let count = pairs.len();
        self.extend(pairs);
        Ok(count)
    }

    /// Sorted copy of all parameters.
    pub fn snapshot(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = self
            .parameters
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        entries.sort();
        entries
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl AgentConfigPort for InMemoryConfigStore {
    fn parameter(&self, key: &str) -> Option<String> {
        self.parameters.get(key).map(|v| v.value().clone())
    }

    fn set_parameter(&self, key: &str, value: String) {
        debug!(key, value = %value, "Setting configuration parameter");
        self.parameters.insert(key.to_string(), value);
    }

    fn work_directory(&self) -> PathBuf {
        self.work_directory.clone()
    }
}
