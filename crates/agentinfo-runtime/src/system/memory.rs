//! Physical memory size.
//!
//! The primary source is `sysinfo`. When it has nothing to say (unsupported
//! platform, or a zero reading inside some containers) Linux hosts get a
//! second chance through `/proc/meminfo`.

use agentinfo_core::{SystemProbeError, SystemProbeResult};
use sysinfo::{MemoryRefreshKind, RefreshKind, System};
use tracing::info;

/// Total physical memory in bytes.
pub fn total_memory_bytes() -> SystemProbeResult<i64> {
    match sysinfo_total_memory() {
        Ok(bytes) if bytes > 0 => Ok(bytes),
        primary => {
            info!(
                ?primary,
                "Typed memory query gave no usable value, using alternative way to get total memory"
            );
            fallback_total_memory()
        }
    }
}

fn sysinfo_total_memory() -> SystemProbeResult<i64> {
    if !sysinfo::IS_SUPPORTED_SYSTEM {
        return Err(SystemProbeError::Unsupported("Physical memory size"));
    }

    let sys = System::new_with_specifics(
        RefreshKind::nothing().with_memory(MemoryRefreshKind::nothing().with_ram()),
    );
    i64::try_from(sys.total_memory())
        .map_err(|e| SystemProbeError::MemoryQueryFailed(e.to_string()))
}

#[cfg(target_os = "linux")]
fn fallback_total_memory() -> SystemProbeResult<i64> {
    let contents = std::fs::read_to_string("/proc/meminfo")
        .map_err(|e| SystemProbeError::MemoryQueryFailed(format!("/proc/meminfo: {e}")))?;

    parse_meminfo_total(&contents)
        .and_then(|bytes| i64::try_from(bytes).ok())
        .ok_or_else(|| {
            SystemProbeError::MemoryQueryFailed("MemTotal missing from /proc/meminfo".to_string())
        })
}

#[cfg(not(target_os = "linux"))]
fn fallback_total_memory() -> SystemProbeResult<i64> {
    Err(SystemProbeError::Unsupported("Physical memory size"))
}

/// Extract `MemTotal` from `/proc/meminfo` contents, in bytes.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_meminfo_total(contents: &str) -> Option<u64> {
    contents.lines().find_map(|line| {
        let rest = line.strip_prefix("MemTotal:")?;
        let mut parts = rest.split_whitespace();
        let value: u64 = parts.next()?.parse().ok()?;
        match parts.next() {
            Some("kB") | None => value.checked_mul(1024),
            Some(_) => None,
        }
    })
}
