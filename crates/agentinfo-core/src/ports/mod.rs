//! Port definitions (trait abstractions) for the host process and the OS.
//!
//! Ports define the interfaces the reporter expects from its surroundings.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sysinfo` or filesystem types in any signature beyond `Path`
//! - Host-facing traits are object-safe and shared as `Arc<dyn ...>`
//! - Probes return raw readings; unit conversion and validation live in the reporter

pub mod config;
pub mod host_activity;
pub mod lifecycle;
pub mod system_probe;

pub use config::AgentConfigPort;
pub use host_activity::HostActivityPort;
pub use lifecycle::{AgentLifecycleListener, LifecycleEventsPort, NoopLifecycleListener};
pub use system_probe::{SystemProbeError, SystemProbePort, SystemProbeResult};
