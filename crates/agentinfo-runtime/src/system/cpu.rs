//! Logical processor count.

use agentinfo_core::{SystemProbeError, SystemProbeResult};
use sysinfo::{CpuRefreshKind, RefreshKind, System};
use tracing::debug;

/// Number of logical processors.
///
/// Prefers `num_cpus`, which honours cgroup quotas and affinity masks, and
/// falls back to the CPU list `sysinfo` enumerates.
pub fn logical_cpu_count() -> SystemProbeResult<usize> {
    let count = num_cpus::get();
    if count > 0 {
        return Ok(count);
    }

    debug!("num_cpus reported no processors, asking sysinfo");
    let sys = System::new_with_specifics(RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing()));
    match sys.cpus().len() {
        0 => Err(SystemProbeError::CpuQueryFailed(
            "no processors reported by the OS".to_string(),
        )),
        n => Ok(n),
    }
}
