//! Single-worker fixed-delay scheduler.
//!
//! Periodic and one-shot tasks run sequentially on one dedicated, named OS
//! thread that drives a current-thread tokio runtime. Each task is wrapped
//! by [`catch_all`], so an error or panic in one run is logged and the next
//! run still happens.
//!
//! Shutdown cancels pending runs and returns immediately; a run already in
//! progress is allowed to finish on the worker thread.

use std::any::Any;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tokio::runtime::{Builder, Handle};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::error::ReporterError;

/// A repeatable unit of work.
pub type ScheduledTask = Arc<dyn Fn() -> Result<(), ReporterError> + Send + Sync>;

/// Run `task`, logging instead of propagating any error or panic.
///
/// Returns `true` when the task completed successfully.
pub fn catch_all<E, F>(name: &str, task: F) -> bool
where
    E: Display,
    F: FnOnce() -> Result<(), E>,
{
    match panic::catch_unwind(AssertUnwindSafe(task)) {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            error!(task = name, error = %e, "Scheduled task failed");
            false
        }
        Err(payload) => {
            error!(
                task = name,
                panic = panic_message(payload.as_ref()),
                "Scheduled task panicked"
            );
            false
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string panic payload>")
}

/// Scheduler owning one background worker thread.
pub struct FixedDelayScheduler {
    handle: Handle,
    cancel_token: CancellationToken,
    thread_name: String,
}

impl FixedDelayScheduler {
    /// Spawn the worker thread.
    pub fn start(thread_name: &str) -> Result<Self, ReporterError> {
        let runtime = Builder::new_current_thread().enable_time().build()?;
        let handle = runtime.handle().clone();
        let cancel_token = CancellationToken::new();

        let worker_token = cancel_token.clone();
        let worker_name = thread_name.to_string();
        thread::Builder::new()
            .name(thread_name.to_string())
            .spawn(move || {
                // Spawned tasks only make progress while this block_on runs.
                runtime.block_on(worker_token.cancelled());
                debug!(thread = %worker_name, "Scheduler worker stopped");
            })?;

        debug!(thread = %thread_name, "Scheduler worker started");

        Ok(Self {
            handle,
            cancel_token,
            thread_name: thread_name.to_string(),
        })
    }

    /// Run `task` after `initial_delay`, then again `delay` after each run
    /// completes, until the scheduler is shut down.
    pub fn schedule_with_fixed_delay(
        &self,
        name: &str,
        initial_delay: Duration,
        delay: Duration,
        task: ScheduledTask,
    ) -> Result<(), ReporterError> {
        if self.cancel_token.is_cancelled() {
            return Err(ReporterError::SchedulerStopped);
        }

        let name = name.to_string();
        let cancel_token = self.cancel_token.clone();

        debug!(
            task = %name,
            initial_delay_ms = initial_delay.as_millis(),
            delay_secs = delay.as_secs(),
            "Scheduling fixed-delay task"
        );

        self.handle.spawn(async move {
            let mut next_delay = initial_delay;
            loop {
                tokio::select! {
                    () = tokio::time::sleep(next_delay) => {}
                    () = cancel_token.cancelled() => {
                        debug!(task = %name, "Fixed-delay task cancelled");
                        break;
                    }
                }

                catch_all(&name, || task());
                next_delay = delay;
            }
        });

        Ok(())
    }

    /// Run `task` once on the worker thread, as soon as it is free.
    ///
    /// A task still queued when the scheduler shuts down is dropped.
    pub fn run_once<F>(&self, name: &str, task: F) -> Result<(), ReporterError>
    where
        F: FnOnce() -> Result<(), ReporterError> + Send + 'static,
    {
        if self.cancel_token.is_cancelled() {
            return Err(ReporterError::SchedulerStopped);
        }

        let name = name.to_string();
        debug!(task = %name, "Submitting one-shot task");
        self.handle.spawn(async move {
            catch_all(&name, task);
        });

        Ok(())
    }

    /// Stop scheduling further runs. Does not wait for a run in progress.
    pub fn shutdown(&self) {
        if !self.cancel_token.is_cancelled() {
            debug!(thread = %self.thread_name, "Shutting down scheduler");
            self.cancel_token.cancel();
        }
    }

    pub fn is_shutdown(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

impl Drop for FixedDelayScheduler {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}
