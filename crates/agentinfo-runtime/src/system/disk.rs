//! Free space on the filesystem holding a path.

use std::path::Path;

use agentinfo_core::{SystemProbeError, SystemProbeResult};

/// Bytes available to unprivileged users on the filesystem that holds `path`.
///
/// Asks the OS about the path itself (`statvfs` on Unix), so tmpfs,
/// network and bind mounts report their own space rather than a parent
/// disk's.
pub fn free_space_bytes(path: &Path) -> SystemProbeResult<i64> {
    let available =
        fs2::available_space(path).map_err(|e| SystemProbeError::FreeSpaceQueryFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    Ok(i64::try_from(available).unwrap_or(i64::MAX))
}
