//! CLI bootstrap - the composition root.
//!
//! This module is the only place where the concrete adapters are wired
//! together for the CLI:
//! - the `dashmap` configuration store, seeded from files and `-D` flags
//! - the in-process lifecycle dispatcher
//! - the `sysinfo`-backed system probe
//!
//! Command handlers receive the composed `CliContext` and never build
//! infrastructure themselves.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use agentinfo_core::{Settings, SystemProbePort, validate_settings};
use agentinfo_runtime::{DefaultSystemProbe, InMemoryConfigStore, LifecycleEventDispatcher};
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Agent working directory. `None` uses the current directory.
    pub work_dir: Option<PathBuf>,
    /// Properties file seeding the agent parameters.
    pub properties: Option<PathBuf>,
    /// JSON settings file.
    pub settings: Option<PathBuf>,
    /// Parameters applied after the properties file.
    pub defines: Vec<(String, String)>,
}

impl CliConfig {
    /// Take the global options from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            work_dir: cli.work_dir.clone(),
            properties: cli.properties.clone(),
            settings: cli.settings.clone(),
            defines: cli.defines.clone(),
        }
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    /// Agent parameter table.
    pub config: Arc<InMemoryConfigStore>,
    /// Lifecycle dispatcher the reporter registers with.
    pub events: Arc<LifecycleEventDispatcher>,
    /// Host hardware probe.
    pub probe: Arc<dyn SystemProbePort>,
    /// Host busy flag.
    pub busy: Arc<AtomicBool>,
    /// Validated reporter settings.
    pub settings: Settings,
}

/// Bootstrap the CLI context from configuration.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    bootstrap_with_probe(config, Arc::new(DefaultSystemProbe::new()))
}

/// Bootstrap with a caller-supplied probe.
pub fn bootstrap_with_probe(
    config: CliConfig,
    probe: Arc<dyn SystemProbePort>,
) -> Result<CliContext, CliError> {
    let settings = match &config.settings {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
            serde_json::from_str::<Settings>(&text)?
        }
        None => Settings::default(),
    };
    validate_settings(&settings)?;

    let work_dir = match config.work_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    debug!(work_dir = %work_dir.display(), "Using agent working directory");

    let store = InMemoryConfigStore::new(work_dir);
    if let Some(path) = &config.properties {
        let count = store.load_properties(path)?;
        debug!(path = %path.display(), count, "Loaded agent properties");
    }
    store.extend(config.defines);

    Ok(CliContext {
        config: Arc::new(store),
        events: Arc::new(LifecycleEventDispatcher::new()),
        probe,
        busy: Arc::new(AtomicBool::new(false)),
        settings,
    })
}
