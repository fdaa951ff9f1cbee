//! Free-space refresh interval policy.
//!
//! The interval comes from a free-form configuration string. Anything that
//! is not a positive whole number of seconds falls back to the configured
//! default; the caller never sees an error.

use std::time::Duration;

use thiserror::Error;
use tracing::warn;

use crate::settings::Settings;

/// Default delay between free-space samples (30 minutes).
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30 * 60;

/// Reasons a refresh interval string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefreshIntervalError {
    /// Missing, empty or whitespace-only value.
    #[error("Refresh interval is blank")]
    Blank,

    /// Value is not an integer.
    #[error("Refresh interval '{0}' is not a number")]
    NotANumber(String),

    /// Value parsed but is zero or negative.
    #[error("Refresh interval must be > 0, got {0}")]
    NotPositive(i64),
}

/// Parse a refresh interval in seconds.
///
/// Surrounding whitespace is ignored.
pub fn parse_refresh_secs(raw: &str) -> Result<u64, RefreshIntervalError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RefreshIntervalError::Blank);
    }

    let secs: i64 = trimmed
        .parse()
        .map_err(|_| RefreshIntervalError::NotANumber(trimmed.to_string()))?;

    u64::try_from(secs)
        .ok()
        .filter(|s| *s > 0)
        .ok_or(RefreshIntervalError::NotPositive(secs))
}

/// Resolve the effective refresh interval from a raw configuration value.
///
/// A blank or absent value silently yields the default. A malformed or
/// non-positive value logs one warning and yields the default.
pub fn refresh_interval_or_default(raw: Option<&str>, settings: &Settings) -> Duration {
    let default = Duration::from_secs(settings.default_refresh_interval_secs);

    match raw.map_or(Err(RefreshIntervalError::Blank), parse_refresh_secs) {
        Ok(secs) => Duration::from_secs(secs),
        Err(RefreshIntervalError::Blank) => default,
        Err(e) => {
            warn!(
                parameter = %settings.refresh_parameter,
                error = %e,
                default_secs = settings.default_refresh_interval_secs,
                "Failed to parse {} parameter value. Default value will be used.",
                settings.refresh_parameter
            );
            default
        }
    }
}
