#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod params;
pub mod ports;
pub mod refresh;
pub mod settings;

// Re-export commonly used types for convenience
pub use params::{
    BYTES_PER_MB, CPU_COUNT_KEY, FREE_SPACE_KEY, FREE_SPACE_REFRESH_KEY, MEMORY_SIZE_KEY, Metric,
    MetricUnit, bytes_to_mb,
};
pub use ports::{
    AgentConfigPort, AgentLifecycleListener, HostActivityPort, LifecycleEventsPort,
    NoopLifecycleListener, SystemProbeError, SystemProbePort, SystemProbeResult,
};
pub use refresh::{
    DEFAULT_REFRESH_INTERVAL_SECS, RefreshIntervalError, parse_refresh_secs, refresh_interval_or_default,
};
pub use settings::{Settings, SettingsError, validate_settings};

// Silence unused dev-dependency warnings for tests that don't use them
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tracing_subscriber as _;
