//! Agent system info reporter.
//!
//! Publishes host hardware facts into the agent configuration table:
//!
//! - memory size and processor count, once, when plugins are loaded
//! - free space on the working directory, after every finished work unit
//!   and on a fixed-delay timer while the host is idle
//!
//! Once the timer is up, every sample runs on its worker thread; lifecycle
//! callbacks only enqueue work. Before that (or if the timer fails to
//! start) samples run on the caller's thread.
//!
//! Every failure degrades to "parameter not published". Nothing here can
//! take the host down.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use agentinfo_core::{
    AgentConfigPort, AgentLifecycleListener, HostActivityPort, LifecycleEventsPort, Metric,
    Settings, SystemProbePort, bytes_to_mb, refresh_interval_or_default,
};
use tracing::{debug, error, info, warn};

use crate::error::ReporterError;
use crate::scheduler::FixedDelayScheduler;

/// Lifecycle state of the reporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReporterState {
    /// Constructed, not yet registered for lifecycle events.
    Created,
    /// Registered, waiting for plugins to load.
    Armed,
    /// Static parameters published, free-space timer running.
    Running,
    /// Timer cancelled. Terminal.
    Shutdown,
}

/// Samples the system probe and writes results into the configuration table.
///
/// Cheap to clone; clones share the same ports.
#[derive(Clone)]
pub struct ParameterPublisher {
    config: Arc<dyn AgentConfigPort>,
    probe: Arc<dyn SystemProbePort>,
}

impl ParameterPublisher {
    pub fn new(config: Arc<dyn AgentConfigPort>, probe: Arc<dyn SystemProbePort>) -> Self {
        Self { config, probe }
    }

    /// Physical memory in whole megabytes, if the platform can tell.
    pub fn physical_memory_size_mb(&self) -> Option<u64> {
        match self.probe.total_memory_bytes() {
            Ok(bytes) => bytes_to_mb(bytes).filter(|mb| *mb > 0),
            Err(e) => {
                warn!(error = %e, "Failed to get total memory size");
                None
            }
        }
    }

    /// Logical processor count, if the platform can tell.
    pub fn processors_count(&self) -> Option<u64> {
        match self.probe.logical_cpu_count() {
            Ok(0) => {
                warn!("Failed to get CPU count: OS reported zero processors");
                None
            }
            Ok(count) => u64::try_from(count).ok(),
            Err(e) => {
                warn!(error = %e, "Failed to get CPU count");
                None
            }
        }
    }

    /// Publish memory size and processor count.
    ///
    /// Unavailable values are logged and left unset.
    pub fn publish_static_parameters(&self) {
        let memory = Metric::memory_size_mb(self.physical_memory_size_mb());
        if !self.publish(&memory) {
            warn!(
                key = memory.key,
                "Failed to detect physical memory size. Property {} will not be set",
                memory.key
            );
        }

        let cpus = Metric::cpu_count(self.processors_count());
        if !self.publish(&cpus) {
            warn!(
                key = cpus.key,
                "Failed to detect number of processors. Property {} will not be set",
                cpus.key
            );
        }
    }

    /// Publish free space of the working directory.
    ///
    /// Returns the published megabytes. A failed or negative reading is
    /// routine on some filesystems and only logged at debug.
    pub fn publish_free_space(&self) -> Option<u64> {
        let work_dir = self.config.work_directory();
        let free_mb = match self.probe.free_space_bytes(&work_dir) {
            Ok(bytes) => bytes_to_mb(bytes),
            Err(e) => {
                debug!(error = %e, "Free space query failed");
                None
            }
        };

        let metric = Metric::free_space_mb(free_mb);
        if !self.publish(&metric) {
            debug!(
                key = metric.key,
                work_dir = %work_dir.display(),
                "Failed to detect free space. Property {} will not be set",
                metric.key
            );
        }
        metric.value
    }

    /// Write a metric if it carries a value. Returns whether it was written.
    fn publish(&self, metric: &Metric) -> bool {
        let Some(rendered) = metric.rendered() else {
            return false;
        };
        debug!(key = metric.key, value = %rendered, unit = ?metric.unit, "Publishing parameter");
        self.config.set_parameter(metric.key, rendered);
        true
    }
}

/// Reports hardware and free-space parameters over the agent lifecycle.
///
/// # Example
///
/// ```ignore
/// let dispatcher = LifecycleEventDispatcher::new();
/// let reporter = AgentSystemInfo::attach(config, host, probe, Settings::default(), &dispatcher);
///
/// dispatcher.plugins_loaded();     // static parameters + timer
/// dispatcher.work_unit_finished(); // immediate free-space publish
/// dispatcher.agent_shutdown();     // timer cancelled
/// ```
pub struct AgentSystemInfo {
    publisher: ParameterPublisher,
    host: Arc<dyn HostActivityPort>,
    settings: Settings,
    state: Mutex<ReporterState>,
    scheduler: Mutex<Option<FixedDelayScheduler>>,
    refresh_interval: Mutex<Option<Duration>>,
}

impl AgentSystemInfo {
    /// Create a reporter in the `Created` state.
    pub fn new(
        config: Arc<dyn AgentConfigPort>,
        host: Arc<dyn HostActivityPort>,
        probe: Arc<dyn SystemProbePort>,
        settings: Settings,
    ) -> Self {
        Self {
            publisher: ParameterPublisher::new(config, probe),
            host,
            settings,
            state: Mutex::new(ReporterState::Created),
            scheduler: Mutex::new(None),
            refresh_interval: Mutex::new(None),
        }
    }

    /// Create a reporter and register it for lifecycle events.
    pub fn attach(
        config: Arc<dyn AgentConfigPort>,
        host: Arc<dyn HostActivityPort>,
        probe: Arc<dyn SystemProbePort>,
        settings: Settings,
        events: &dyn LifecycleEventsPort,
    ) -> Arc<Self> {
        let reporter = Arc::new(Self::new(config, host, probe, settings));
        reporter.register(events);
        reporter
    }

    /// Register with a lifecycle dispatcher. Only the first call has an effect.
    pub fn register(self: &Arc<Self>, events: &dyn LifecycleEventsPort) {
        let mut state = lock(&self.state);
        if *state != ReporterState::Created {
            debug!(state = ?*state, "Reporter already registered");
            return;
        }
        events.add_listener(self.clone());
        *state = ReporterState::Armed;
    }

    pub fn state(&self) -> ReporterState {
        *lock(&self.state)
    }

    /// Free-space refresh interval, once the timer has been armed.
    pub fn refresh_interval(&self) -> Option<Duration> {
        *lock(&self.refresh_interval)
    }

    pub fn publisher(&self) -> &ParameterPublisher {
        &self.publisher
    }

    fn parse_refresh_interval(&self) -> Duration {
        let raw = self
            .publisher
            .config
            .parameter(&self.settings.refresh_parameter);
        refresh_interval_or_default(raw.as_deref(), &self.settings)
    }

    fn start_timer(&self, interval: Duration) -> Result<FixedDelayScheduler, ReporterError> {
        let scheduler = FixedDelayScheduler::start(&self.settings.timer_thread_name)?;

        let publisher = self.publisher.clone();
        let host = self.host.clone();
        scheduler.schedule_with_fixed_delay(
            "update free space",
            Duration::ZERO,
            interval,
            Arc::new(move || {
                if host.is_busy() {
                    debug!("Host is busy, skipping free space refresh");
                    return Ok(());
                }
                publisher.publish_free_space();
                Ok(())
            }),
        )?;

        Ok(scheduler)
    }

    /// Run `job` on the timer worker, or on the caller's thread when no
    /// timer is running.
    fn dispatch<F>(&self, name: &str, job: F)
    where
        F: FnOnce(&ParameterPublisher) + Send + 'static,
    {
        let scheduler = lock(&self.scheduler);
        if let Some(worker) = scheduler.as_ref() {
            let publisher = self.publisher.clone();
            if let Err(e) = worker.run_once(name, move || {
                job(&publisher);
                Ok(())
            }) {
                debug!(task = name, error = %e, "Timer worker stopped, task dropped");
            }
            return;
        }
        drop(scheduler);

        job(&self.publisher);
    }
}

impl AgentLifecycleListener for AgentSystemInfo {
    fn plugins_loaded(&self) {
        {
            let mut state = lock(&self.state);
            if *state == ReporterState::Shutdown {
                debug!("Ignoring plugins_loaded after shutdown");
                return;
            }

            let mut scheduler = lock(&self.scheduler);
            if scheduler.is_some() {
                debug!("Free space timer already running");
            } else {
                let interval = self.parse_refresh_interval();
                match self.start_timer(interval) {
                    Ok(started) => {
                        info!(
                            interval_secs = interval.as_secs(),
                            "Free space refresh scheduled"
                        );
                        *scheduler = Some(started);
                        *lock(&self.refresh_interval) = Some(interval);
                        *state = ReporterState::Running;
                    }
                    Err(e) => {
                        error!(error = %e, "Failed to start free space refresh timer");
                    }
                }
            }
        }

        self.dispatch(
            "publish static parameters",
            ParameterPublisher::publish_static_parameters,
        );
    }

    fn work_unit_finished(&self) {
        // Ignores the busy flag: the unit that made the host busy just ended.
        self.dispatch("publish free space after work unit", |publisher| {
            publisher.publish_free_space();
        });
    }

    fn agent_shutdown(&self) {
        *lock(&self.state) = ReporterState::Shutdown;
        if let Some(scheduler) = lock(&self.scheduler).take() {
            scheduler.shutdown();
        }
    }
}

// A poisoned lock only means a callback panicked mid-update; the guarded
// values are plain data and stay usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::thread;
    use std::time::Instant;

    use agentinfo_core::{
        CPU_COUNT_KEY, FREE_SPACE_KEY, FREE_SPACE_REFRESH_KEY, MEMORY_SIZE_KEY, SystemProbeError,
        SystemProbeResult,
    };
    use mockall::mock;

    use crate::config_store::InMemoryConfigStore;
    use crate::lifecycle::LifecycleEventDispatcher;

    const GIB: i64 = 1024 * 1024 * 1024;

    mock! {
        Probe {}

        impl SystemProbePort for Probe {
            fn total_memory_bytes(&self) -> SystemProbeResult<i64>;
            fn logical_cpu_count(&self) -> SystemProbeResult<usize>;
            fn free_space_bytes(&self, path: &Path) -> SystemProbeResult<i64>;
        }
    }

    /// Probe whose free-space reading counts calls.
    struct CountingProbe {
        free_space_calls: AtomicUsize,
    }

    impl SystemProbePort for CountingProbe {
        fn total_memory_bytes(&self) -> SystemProbeResult<i64> {
            Ok(8 * GIB)
        }

        fn logical_cpu_count(&self) -> SystemProbeResult<usize> {
            Ok(4)
        }

        fn free_space_bytes(&self, _path: &Path) -> SystemProbeResult<i64> {
            self.free_space_calls.fetch_add(1, Ordering::SeqCst);
            Ok(GIB)
        }
    }

    fn store() -> Arc<InMemoryConfigStore> {
        Arc::new(InMemoryConfigStore::new("/agent/work"))
    }

    fn publisher_with(store: &Arc<InMemoryConfigStore>, probe: MockProbe) -> ParameterPublisher {
        ParameterPublisher::new(store.clone(), Arc::new(probe))
    }

    fn wait_until(timeout: Duration, condition: impl Fn() -> bool) -> bool {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if condition() {
                return true;
            }
            thread::sleep(Duration::from_millis(5));
        }
        condition()
    }

    #[test]
    fn test_static_parameters_published() {
        let store = store();
        let mut probe = MockProbe::new();
        probe.expect_total_memory_bytes().returning(|| Ok(16 * GIB + 123));
        probe.expect_logical_cpu_count().returning(|| Ok(12));

        publisher_with(&store, probe).publish_static_parameters();

        assert_eq!(store.parameter(MEMORY_SIZE_KEY).as_deref(), Some("16384"));
        assert_eq!(store.parameter(CPU_COUNT_KEY).as_deref(), Some("12"));
    }

    #[test]
    fn test_static_parameters_omitted_when_unavailable() {
        let store = store();
        let mut probe = MockProbe::new();
        probe
            .expect_total_memory_bytes()
            .returning(|| Err(SystemProbeError::Unsupported("Physical memory size")));
        probe.expect_logical_cpu_count().returning(|| Ok(0));

        publisher_with(&store, probe).publish_static_parameters();

        assert_eq!(store.parameter(MEMORY_SIZE_KEY), None);
        assert_eq!(store.parameter(CPU_COUNT_KEY), None);
    }

    #[test]
    fn test_memory_zero_negative_or_sub_megabyte_is_omitted() {
        for reading in [0, -1, 1024] {
            let store = store();
            let mut probe = MockProbe::new();
            probe.expect_total_memory_bytes().returning(move || Ok(reading));
            probe.expect_logical_cpu_count().returning(|| Ok(2));

            publisher_with(&store, probe).publish_static_parameters();

            assert_eq!(store.parameter(MEMORY_SIZE_KEY), None, "reading {reading}");
            assert_eq!(store.parameter(CPU_COUNT_KEY).as_deref(), Some("2"));
        }
    }

    #[test]
    fn test_static_parameters_overwrite_on_repeat() {
        let store = store();
        store.set_parameter(CPU_COUNT_KEY, "1".to_string());

        let mut probe = MockProbe::new();
        probe.expect_total_memory_bytes().returning(|| Ok(2 * GIB));
        probe.expect_logical_cpu_count().returning(|| Ok(8));
        let publisher = publisher_with(&store, probe);

        publisher.publish_static_parameters();
        publisher.publish_static_parameters();
        assert_eq!(store.parameter(CPU_COUNT_KEY).as_deref(), Some("8"));
    }

    #[test]
    fn test_free_space_published_in_megabytes() {
        let store = store();
        let mut probe = MockProbe::new();
        probe
            .expect_free_space_bytes()
            .withf(|path| path.to_str() == Some("/agent/work"))
            .returning(|_| Ok(5_368_709_120));

        let published = publisher_with(&store, probe).publish_free_space();

        assert_eq!(published, Some(5120));
        assert_eq!(store.parameter(FREE_SPACE_KEY).as_deref(), Some("5120"));
    }

    #[test]
    fn test_free_space_zero_is_published() {
        let store = store();
        let mut probe = MockProbe::new();
        probe.expect_free_space_bytes().returning(|_| Ok(1000));

        publisher_with(&store, probe).publish_free_space();
        assert_eq!(store.parameter(FREE_SPACE_KEY).as_deref(), Some("0"));
    }

    #[test]
    fn test_free_space_failure_leaves_previous_value() {
        let store = store();
        store.set_parameter(FREE_SPACE_KEY, "777".to_string());

        let mut probe = MockProbe::new();
        let mut calls = 0;
        probe.expect_free_space_bytes().returning(move |path| {
            calls += 1;
            if calls == 1 {
                Ok(-1)
            } else {
                Err(SystemProbeError::FreeSpaceQueryFailed {
                    path: PathBuf::from(path),
                    reason: "volume unmounted".to_string(),
                })
            }
        });
        let publisher = publisher_with(&store, probe);

        assert_eq!(publisher.publish_free_space(), None);
        assert_eq!(publisher.publish_free_space(), None);
        assert_eq!(store.parameter(FREE_SPACE_KEY).as_deref(), Some("777"));
    }

    #[test]
    fn test_lifecycle_states() {
        let store = store();
        let dispatcher = LifecycleEventDispatcher::new();
        let probe = Arc::new(CountingProbe {
            free_space_calls: AtomicUsize::new(0),
        });
        let reporter = Arc::new(AgentSystemInfo::new(
            store.clone(),
            Arc::new(AtomicBool::new(false)),
            probe,
            Settings::default(),
        ));
        assert_eq!(reporter.state(), ReporterState::Created);

        reporter.register(&dispatcher);
        reporter.register(&dispatcher);
        assert_eq!(reporter.state(), ReporterState::Armed);
        assert_eq!(dispatcher.listener_count(), 1);

        dispatcher.plugins_loaded();
        assert_eq!(reporter.state(), ReporterState::Running);
        assert_eq!(reporter.refresh_interval(), Some(Duration::from_secs(1800)));
        assert!(wait_until(Duration::from_secs(2), || {
            store.parameter(CPU_COUNT_KEY).is_some()
        }));
        assert_eq!(store.parameter(MEMORY_SIZE_KEY).as_deref(), Some("8192"));
        assert_eq!(store.parameter(CPU_COUNT_KEY).as_deref(), Some("4"));

        dispatcher.agent_shutdown();
        assert_eq!(reporter.state(), ReporterState::Shutdown);

        dispatcher.plugins_loaded();
        assert_eq!(reporter.state(), ReporterState::Shutdown);
    }

    #[test]
    fn test_refresh_interval_read_from_config() {
        let store = store();
        store.set_parameter(FREE_SPACE_REFRESH_KEY, " 90 ".to_string());
        let dispatcher = LifecycleEventDispatcher::new();
        let reporter = AgentSystemInfo::attach(
            store,
            Arc::new(AtomicBool::new(false)),
            Arc::new(CountingProbe {
                free_space_calls: AtomicUsize::new(0),
            }),
            Settings::default(),
            &dispatcher,
        );

        dispatcher.plugins_loaded();
        assert_eq!(reporter.refresh_interval(), Some(Duration::from_secs(90)));
        dispatcher.agent_shutdown();
    }

    #[test]
    fn test_invalid_refresh_interval_uses_default() {
        let store = store();
        store.set_parameter(FREE_SPACE_REFRESH_KEY, "not-a-number".to_string());
        let dispatcher = LifecycleEventDispatcher::new();
        let reporter = AgentSystemInfo::attach(
            store,
            Arc::new(AtomicBool::new(false)),
            Arc::new(CountingProbe {
                free_space_calls: AtomicUsize::new(0),
            }),
            Settings::default(),
            &dispatcher,
        );

        dispatcher.plugins_loaded();
        assert_eq!(reporter.refresh_interval(), Some(Duration::from_secs(1800)));
        dispatcher.agent_shutdown();
    }

    #[test]
    fn test_work_unit_finished_publishes_even_when_busy() {
        let store = store();
        let busy = Arc::new(AtomicBool::new(true));
        let mut probe = MockProbe::new();
        probe.expect_free_space_bytes().times(1).returning(|_| Ok(3 * GIB));

        let dispatcher = LifecycleEventDispatcher::new();
        let _reporter = AgentSystemInfo::attach(
            store.clone(),
            busy,
            Arc::new(probe),
            Settings::default(),
            &dispatcher,
        );

        dispatcher.work_unit_finished();
        assert_eq!(store.parameter(FREE_SPACE_KEY).as_deref(), Some("3072"));
    }

    #[test]
    fn test_timer_skips_while_busy_and_resumes_when_idle() {
        let store = store();
        store.set_parameter(FREE_SPACE_REFRESH_KEY, "1".to_string());
        let busy = Arc::new(AtomicBool::new(true));
        let probe = Arc::new(CountingProbe {
            free_space_calls: AtomicUsize::new(0),
        });

        let dispatcher = LifecycleEventDispatcher::new();
        let _reporter = AgentSystemInfo::attach(
            store.clone(),
            busy.clone(),
            probe.clone(),
            Settings::default(),
            &dispatcher,
        );

        dispatcher.plugins_loaded();

        // The first tick fires immediately and must be skipped
        thread::sleep(Duration::from_millis(200));
        assert_eq!(probe.free_space_calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.parameter(FREE_SPACE_KEY), None);

        busy.store(false, Ordering::SeqCst);
        assert!(wait_until(Duration::from_secs(5), || {
            probe.free_space_calls.load(Ordering::SeqCst) >= 1
        }));
        assert!(wait_until(Duration::from_secs(1), || {
            store.parameter(FREE_SPACE_KEY).is_some()
        }));
        assert_eq!(store.parameter(FREE_SPACE_KEY).as_deref(), Some("1024"));

        dispatcher.agent_shutdown();
    }

    #[test]
    fn test_no_timer_publishes_after_shutdown() {
        let store = store();
        store.set_parameter(FREE_SPACE_REFRESH_KEY, "1".to_string());
        let probe = Arc::new(CountingProbe {
            free_space_calls: AtomicUsize::new(0),
        });

        let dispatcher = LifecycleEventDispatcher::new();
        let _reporter = AgentSystemInfo::attach(
            store,
            Arc::new(AtomicBool::new(false)),
            probe.clone(),
            Settings::default(),
            &dispatcher,
        );

        dispatcher.plugins_loaded();
        assert!(wait_until(Duration::from_secs(2), || {
            probe.free_space_calls.load(Ordering::SeqCst) >= 1
        }));

        dispatcher.agent_shutdown();
        thread::sleep(Duration::from_millis(100));
        let after_shutdown = probe.free_space_calls.load(Ordering::SeqCst);

        // Longer than one refresh interval
        thread::sleep(Duration::from_millis(1500));
        assert_eq!(probe.free_space_calls.load(Ordering::SeqCst), after_shutdown);
    }

    /// Records the thread each free-space query runs on.
    struct ThreadRecordingProbe(Mutex<Vec<Option<String>>>);

    impl SystemProbePort for ThreadRecordingProbe {
        fn total_memory_bytes(&self) -> SystemProbeResult<i64> {
            Ok(GIB)
        }
        fn logical_cpu_count(&self) -> SystemProbeResult<usize> {
            Ok(1)
        }
        fn free_space_bytes(&self, _path: &Path) -> SystemProbeResult<i64> {
            let name = thread::current().name().map(ToString::to_string);
            self.0.lock().unwrap().push(name);
            Ok(2 * GIB)
        }
    }

    #[test]
    fn test_work_unit_finished_samples_on_timer_thread_when_running() {
        let store = store();
        let probe = Arc::new(ThreadRecordingProbe(Mutex::new(Vec::new())));
        let dispatcher = LifecycleEventDispatcher::new();
        let _reporter = AgentSystemInfo::attach(
            store.clone(),
            // Busy: the periodic tick is skipped, only the triggered publish samples
            Arc::new(AtomicBool::new(true)),
            probe.clone(),
            Settings {
                timer_thread_name: "free-space-sampler".to_string(),
                ..Settings::default()
            },
            &dispatcher,
        );

        dispatcher.plugins_loaded();
        dispatcher.work_unit_finished();

        assert!(wait_until(Duration::from_secs(2), || {
            store.parameter(FREE_SPACE_KEY).is_some()
        }));
        assert_eq!(store.parameter(FREE_SPACE_KEY).as_deref(), Some("2048"));
        assert_eq!(
            *probe.0.lock().unwrap(),
            vec![Some("free-space-sampler".to_string())]
        );
        dispatcher.agent_shutdown();
    }

    #[test]
    fn test_work_unit_finished_before_timer_samples_on_caller_thread() {
        let store = store();
        let probe = Arc::new(ThreadRecordingProbe(Mutex::new(Vec::new())));
        let dispatcher = LifecycleEventDispatcher::new();
        let reporter = AgentSystemInfo::attach(
            store.clone(),
            Arc::new(AtomicBool::new(true)),
            probe.clone(),
            Settings::default(),
            &dispatcher,
        );
        assert_eq!(reporter.state(), ReporterState::Armed);

        dispatcher.work_unit_finished();

        assert_eq!(store.parameter(FREE_SPACE_KEY).as_deref(), Some("2048"));
        let caller = thread::current().name().map(ToString::to_string);
        assert_eq!(*probe.0.lock().unwrap(), vec![caller]);
    }

    #[test]
    fn test_timer_uses_configured_thread_name() {
        struct ThreadNameProbe(Mutex<Option<String>>);

        impl SystemProbePort for ThreadNameProbe {
            fn total_memory_bytes(&self) -> SystemProbeResult<i64> {
                Ok(GIB)
            }
            fn logical_cpu_count(&self) -> SystemProbeResult<usize> {
                Ok(1)
            }
            fn free_space_bytes(&self, _path: &Path) -> SystemProbeResult<i64> {
                *self.0.lock().unwrap() = thread::current().name().map(ToString::to_string);
                Ok(0)
            }
        }

        let probe = Arc::new(ThreadNameProbe(Mutex::new(None)));
        let dispatcher = LifecycleEventDispatcher::new();
        let _reporter = AgentSystemInfo::attach(
            store(),
            Arc::new(AtomicBool::new(false)),
            probe.clone(),
            Settings {
                timer_thread_name: "free-space-sampler".to_string(),
                ..Settings::default()
            },
            &dispatcher,
        );

        dispatcher.plugins_loaded();
        assert!(wait_until(Duration::from_secs(2), || probe.0.lock().unwrap().is_some()));
        assert_eq!(probe.0.lock().unwrap().as_deref(), Some("free-space-sampler"));
        dispatcher.agent_shutdown();
    }
}
