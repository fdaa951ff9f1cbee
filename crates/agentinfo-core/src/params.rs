//! Published agent parameters.
//!
//! The reporter writes a fixed set of keys into the agent configuration
//! table. Values are decimal strings; sizes are whole megabytes.

/// Physical memory size, in megabytes.
pub const MEMORY_SIZE_KEY: &str = "teamcity.agent.hardware.memorySizeMb";

/// Number of logical processors.
pub const CPU_COUNT_KEY: &str = "teamcity.agent.hardware.cpuCount";

/// Free space on the agent working directory, in megabytes.
pub const FREE_SPACE_KEY: &str = "teamcity.agent.work.dir.freeSpaceMb";

/// Configuration parameter holding the free-space refresh interval in seconds.
pub const FREE_SPACE_REFRESH_KEY: &str = "teamcity.agent.recalculate.disk.free.space";

/// Bytes in one megabyte (binary).
pub const BYTES_PER_MB: i64 = 1024 * 1024;

/// Convert a raw byte reading to whole megabytes.
///
/// Returns `None` for negative readings, which some platforms use to signal
/// "unknown". Rounds down.
pub const fn bytes_to_mb(bytes: i64) -> Option<u64> {
    if bytes < 0 {
        None
    } else {
        Some((bytes / BYTES_PER_MB) as u64)
    }
}

/// Unit a metric is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricUnit {
    Megabytes,
    Count,
}

/// A single sampled value destined for the configuration table.
///
/// `value` is `None` when the platform could not provide a reading; such a
/// metric is never written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub key: &'static str,
    pub value: Option<u64>,
    pub unit: MetricUnit,
}

impl Metric {
    /// Physical memory metric. Zero megabytes counts as unavailable.
    pub fn memory_size_mb(value: Option<u64>) -> Self {
        Self {
            key: MEMORY_SIZE_KEY,
            value: value.filter(|mb| *mb > 0),
            unit: MetricUnit::Megabytes,
        }
    }

    /// Logical processor metric. Zero processors counts as unavailable.
    pub fn cpu_count(value: Option<u64>) -> Self {
        Self {
            key: CPU_COUNT_KEY,
            value: value.filter(|count| *count > 0),
            unit: MetricUnit::Count,
        }
    }

    /// Free space metric. Zero megabytes is a valid reading (full disk).
    pub const fn free_space_mb(value: Option<u64>) -> Self {
        Self {
            key: FREE_SPACE_KEY,
            value,
            unit: MetricUnit::Megabytes,
        }
    }

    /// The value rendered as stored in the configuration table.
    pub fn rendered(&self) -> Option<String> {
        self.value.map(|v| v.to_string())
    }
}
