//! Reporter settings and validation.
//!
//! Pure domain types with no infrastructure dependencies. Hosts normally
//! use the defaults; the CLI and tests override individual fields.

use serde::{Deserialize, Serialize};

use crate::params::FREE_SPACE_REFRESH_KEY;
use crate::refresh::DEFAULT_REFRESH_INTERVAL_SECS;

/// Default name of the background sampling thread.
pub const DEFAULT_TIMER_THREAD_NAME: &str = "agent-info recent updates pool";

/// Settings controlling how the reporter schedules its work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Configuration parameter the refresh interval is read from.
    pub refresh_parameter: String,

    /// Interval used when the parameter is blank or invalid, in seconds.
    pub default_refresh_interval_secs: u64,

    /// Name given to the background sampling thread.
    pub timer_thread_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            refresh_parameter: FREE_SPACE_REFRESH_KEY.to_string(),
            default_refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            timer_thread_name: DEFAULT_TIMER_THREAD_NAME.to_string(),
        }
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Refresh parameter name cannot be empty")]
    EmptyRefreshParameter,

    #[error("Default refresh interval must be > 0 seconds")]
    ZeroDefaultInterval,

    #[error("Timer thread name cannot be empty")]
    EmptyThreadName,
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if settings.refresh_parameter.trim().is_empty() {
        return Err(SettingsError::EmptyRefreshParameter);
    }

    if settings.default_refresh_interval_secs == 0 {
        return Err(SettingsError::ZeroDefaultInterval);
    }

    if settings.timer_thread_name.trim().is_empty() {
        return Err(SettingsError::EmptyThreadName);
    }

    Ok(())
}
