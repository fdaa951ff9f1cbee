//! Watch command handler.
//!
//! Runs the full reporter lifecycle the way an agent would: plugins loaded,
//! timer sampling in the background, shutdown on Ctrl-C. Each published
//! key is printed when its value changes.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::Ordering;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use agentinfo_core::AgentConfigPort;
use agentinfo_runtime::{AgentSystemInfo, InMemoryConfigStore, ReporterState};

use super::PUBLISHED_KEYS;
use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the watch command until Ctrl-C.
pub async fn execute(ctx: &CliContext, poll_ms: u64, busy: bool) -> Result<()> {
    if poll_ms == 0 {
        return Err(CliError::Arguments("--poll-ms must be > 0".to_string()).into());
    }

    let shutdown = async {
        // A failed signal registration ends the watch instead of hanging it.
        let _ = tokio::signal::ctrl_c().await;
    };

    run_until(
        ctx,
        Duration::from_millis(poll_ms),
        busy,
        shutdown,
        |key, value| println!("{key} = {value}"),
    )
    .await
}

/// Drive the reporter lifecycle until `shutdown` resolves.
///
/// `on_change` receives every published key whose value differs from the
/// last one seen, checked every `poll`.
pub async fn run_until<F, C>(
    ctx: &CliContext,
    poll: Duration,
    busy: bool,
    shutdown: F,
    mut on_change: C,
) -> Result<()>
where
    F: Future<Output = ()>,
    C: FnMut(&str, &str),
{
    ctx.busy.store(busy, Ordering::Relaxed);

    let reporter = AgentSystemInfo::attach(
        ctx.config.clone(),
        ctx.busy.clone(),
        ctx.probe.clone(),
        ctx.settings.clone(),
        ctx.events.as_ref(),
    );

    ctx.events.plugins_loaded();
    if reporter.state() != ReporterState::Running {
        ctx.events.agent_shutdown();
        return Err(CliError::Reporter("free space timer did not start".to_string()).into());
    }

    if let Some(interval) = reporter.refresh_interval() {
        info!(
            interval_secs = interval.as_secs(),
            work_dir = %ctx.config.work_directory().display(),
            "Watching agent parameters, press Ctrl-C to stop"
        );
    }

    let mut seen = HashMap::new();
    let mut ticker = tokio::time::interval(poll);
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            () = &mut shutdown => break,
            _ = ticker.tick() => report_changes(&ctx.config, &mut seen, &mut on_change),
        }
    }

    ctx.events.agent_shutdown();
    info!(state = ?reporter.state(), "Reporter stopped");
    Ok(())
}

fn report_changes<C>(
    config: &InMemoryConfigStore,
    seen: &mut HashMap<&'static str, String>,
    on_change: &mut C,
) where
    C: FnMut(&str, &str),
{
    for key in PUBLISHED_KEYS {
        let Some(value) = config.parameter(key) else {
            continue;
        };
        if seen.get(key) != Some(&value) {
            on_change(key, &value);
            seen.insert(key, value);
        }
    }
}
