//! System probe implementation for agentinfo-runtime.
//!
//! This module provides the `DefaultSystemProbe` which implements
//! `SystemProbePort` from agentinfo-core. Memory comes from `sysinfo`, the
//! processor count from `num_cpus` and free space from a per-path `fs2`
//! query.

mod cpu;
mod disk;
mod memory;

use std::path::Path;

use agentinfo_core::{SystemProbePort, SystemProbeResult};

use cpu::logical_cpu_count;
use disk::free_space_bytes;
use memory::total_memory_bytes;

/// Default implementation of `SystemProbePort`.
///
/// Stateless: every call queries the OS afresh, so it is safe to share
/// between the event thread and the scheduler thread.
///
/// # Example
///
/// ```ignore
/// use agentinfo_runtime::system::DefaultSystemProbe;
/// use agentinfo_core::SystemProbePort;
///
/// let probe = DefaultSystemProbe::new();
/// let cpus = probe.logical_cpu_count()?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSystemProbe;

impl DefaultSystemProbe {
    /// Create a new default system probe.
    pub const fn new() -> Self {
        Self
    }
}

impl SystemProbePort for DefaultSystemProbe {
    fn total_memory_bytes(&self) -> SystemProbeResult<i64> {
        total_memory_bytes()
    }

    fn logical_cpu_count(&self) -> SystemProbeResult<usize> {
        logical_cpu_count()
    }

    fn free_space_bytes(&self, path: &Path) -> SystemProbeResult<i64> {
        free_space_bytes(path)
    }
}
