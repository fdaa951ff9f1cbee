//! Agent lifecycle events.
//!
//! The host drives components through a small set of lifecycle callbacks.
//! Listeners register with a `LifecycleEventsPort` and override only the
//! callbacks they care about.

use std::sync::Arc;

/// Callbacks invoked by the host at defined points of its lifecycle.
///
/// All methods default to no-ops.
///
/// # Example
///
/// ```rust
/// use agentinfo_core::ports::AgentLifecycleListener;
///
/// struct LogOnShutdown;
///
/// impl AgentLifecycleListener for LogOnShutdown {
///     fn agent_shutdown(&self) {
///         println!("agent is going down");
///     }
/// }
/// ```
pub trait AgentLifecycleListener: Send + Sync {
    /// Plugins and configuration have been loaded.
    fn plugins_loaded(&self) {}

    /// A unit of work (build runner) has finished.
    fn work_unit_finished(&self) {}

    /// The host is shutting down.
    fn agent_shutdown(&self) {}
}

/// Registration handle for lifecycle listeners.
pub trait LifecycleEventsPort: Send + Sync {
    /// Register a listener. Listeners are notified in registration order.
    fn add_listener(&self, listener: Arc<dyn AgentLifecycleListener>);
}

/// Listener that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLifecycleListener;

impl AgentLifecycleListener for NoopLifecycleListener {}
