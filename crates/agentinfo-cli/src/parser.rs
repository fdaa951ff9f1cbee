//! Main CLI parser and top-level argument handling.
//!
//! Global options describe the agent being simulated: where its working
//! directory is and which parameters it starts with.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the agent system info reporter.
#[derive(Parser)]
#[command(name = "agentinfo")]
#[command(about = "Publish host memory, CPU and free disk space as agent parameters")]
#[command(version)]
pub struct Cli {
    /// Agent working directory whose disk is sampled for free space
    #[arg(long = "work-dir", env = "AGENTINFO_WORK_DIR", global = true)]
    pub work_dir: Option<PathBuf>,

    /// Seed agent parameters from a properties file
    #[arg(long = "properties", global = true)]
    pub properties: Option<PathBuf>,

    /// Reporter settings as a JSON file
    #[arg(long = "settings", global = true)]
    pub settings: Option<PathBuf>,

    /// Set an agent parameter (repeatable), e.g. -D key=value
    #[arg(short = 'D', value_name = "KEY=VALUE", value_parser = parse_define, global = true)]
    pub defines: Vec<(String, String)>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Parse a `key=value` pair. The key is trimmed and must not be empty; the
/// value is kept as given and may itself contain `=`.
pub fn parse_define(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in `{raw}`"));
    }
    Ok((key.to_string(), value.to_string()))
}
