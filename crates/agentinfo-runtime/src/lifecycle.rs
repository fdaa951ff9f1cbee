//! In-process lifecycle event dispatcher.
//!
//! Hosts that embed the reporter without their own event system use this
//! dispatcher: components register through `LifecycleEventsPort` and the
//! host calls the broadcast methods at the matching points.

use std::sync::{Arc, RwLock};

use agentinfo_core::{AgentLifecycleListener, LifecycleEventsPort};
use tracing::debug;

/// Fan-out dispatcher for agent lifecycle callbacks.
#[derive(Default)]
pub struct LifecycleEventDispatcher {
    listeners: RwLock<Vec<Arc<dyn AgentLifecycleListener>>>,
}

impl LifecycleEventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.read().map_or(0, |l| l.len())
    }

    /// Notify listeners that plugins and configuration are loaded.
    pub fn plugins_loaded(&self) {
        debug!("Dispatching plugins_loaded");
        for listener in self.snapshot() {
            listener.plugins_loaded();
        }
    }

    /// Notify listeners that a unit of work has finished.
    pub fn work_unit_finished(&self) {
        debug!("Dispatching work_unit_finished");
        for listener in self.snapshot() {
            listener.work_unit_finished();
        }
    }

    /// Notify listeners that the agent is shutting down.
    pub fn agent_shutdown(&self) {
        debug!("Dispatching agent_shutdown");
        for listener in self.snapshot() {
            listener.agent_shutdown();
        }
    }

    // Listeners are called without holding the lock so a callback may
    // register further listeners.
    fn snapshot(&self) -> Vec<Arc<dyn AgentLifecycleListener>> {
        self.listeners
            .read()
            .map(|l| l.clone())
            .unwrap_or_default()
    }
}

impl LifecycleEventsPort for LifecycleEventDispatcher {
    fn add_listener(&self, listener: Arc<dyn AgentLifecycleListener>) {
        if let Ok(mut listeners) = self.listeners.write() {
            listeners.push(listener);
        }
    }
}
