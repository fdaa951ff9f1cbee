//! Host activity port.

use std::sync::atomic::{AtomicBool, Ordering};

/// Reports whether the host is currently executing a unit of work.
///
/// Read without synchronisation by the periodic sampler; a stale answer
/// only delays a sample by one interval.
pub trait HostActivityPort: Send + Sync {
    fn is_busy(&self) -> bool;
}

impl HostActivityPort for AtomicBool {
    fn is_busy(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}
