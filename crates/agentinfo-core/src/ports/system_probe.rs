//! System probe port for hardware and disk queries.
//!
//! This port abstracts the OS facilities the reporter samples. Readings are
//! raw: implementations pass through whatever the platform reports, and the
//! reporter decides what counts as usable.
//!
//! # Design Notes
//!
//! - Core owns the trait and error type (pure)
//! - Runtime owns the implementation (`sysinfo`, `num_cpus`, `/proc`)
//! - Tests substitute a mock to drive edge cases (zero, negative, failure)

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur during system probing.
#[derive(Debug, Error)]
pub enum SystemProbeError {
    /// The platform offers no way to answer this query.
    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),

    /// Physical memory query failed.
    #[error("Memory query failed: {0}")]
    MemoryQueryFailed(String),

    /// Processor count query failed.
    #[error("CPU count query failed: {0}")]
    CpuQueryFailed(String),

    /// Free space could not be determined for a path.
    #[error("Free space query failed for {path}: {reason}")]
    FreeSpaceQueryFailed { path: PathBuf, reason: String },
}

/// Result type for system probe operations.
pub type SystemProbeResult<T> = Result<T, SystemProbeError>;

/// Port for sampling host hardware characteristics.
pub trait SystemProbePort: Send + Sync {
    /// Total physical memory in bytes.
    fn total_memory_bytes(&self) -> SystemProbeResult<i64>;

    /// Number of logical processors available to the process.
    fn logical_cpu_count(&self) -> SystemProbeResult<usize>;

    /// Bytes available to unprivileged users on the filesystem holding `path`.
    fn free_space_bytes(&self, path: &Path) -> SystemProbeResult<i64>;
}
