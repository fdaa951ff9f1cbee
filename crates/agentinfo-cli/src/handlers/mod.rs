//! Command handlers.
//!
//! Handlers follow one pattern: take the composed `CliContext`, drive the
//! reporter through its public API, format the result for the terminal.
//! They never construct adapters themselves.

pub mod snapshot;
pub mod watch;

use agentinfo_core::{CPU_COUNT_KEY, FREE_SPACE_KEY, MEMORY_SIZE_KEY};

/// Keys the reporter publishes, in display order.
pub const PUBLISHED_KEYS: [&str; 3] = [MEMORY_SIZE_KEY, CPU_COUNT_KEY, FREE_SPACE_KEY];
