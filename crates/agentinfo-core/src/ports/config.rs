//! Agent configuration port.
//!
//! The configuration table is owned by the host and read concurrently by
//! other components. Implementations must make each `set_parameter` atomic
//! with respect to `parameter` on the same key.

use std::path::PathBuf;

/// Access to the agent's key/value configuration parameters.
pub trait AgentConfigPort: Send + Sync {
    /// Current value of a configuration parameter, if set.
    fn parameter(&self, key: &str) -> Option<String>;

    /// Add or overwrite a configuration parameter.
    fn set_parameter(&self, key: &str, value: String);

    /// Directory builds run in; free space is measured here.
    fn work_directory(&self) -> PathBuf;
}
