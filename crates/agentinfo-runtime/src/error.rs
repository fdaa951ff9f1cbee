//! Runtime error types.

use thiserror::Error;

/// Errors raised while running the reporter machinery.
///
/// None of these reach the host: lifecycle callbacks log them and carry on.
#[derive(Debug, Error)]
pub enum ReporterError {
    /// The background worker thread or its runtime could not be created.
    #[error("Failed to start scheduler: {0}")]
    SchedulerStart(#[from] std::io::Error),

    /// A task was submitted after the scheduler was shut down.
    #[error("Scheduler has been shut down")]
    SchedulerStopped,
}
