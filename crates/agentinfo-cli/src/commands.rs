//! Subcommands of the `agentinfo` binary.

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Publish every parameter once and print the table
    Snapshot {
        /// Print as a JSON object instead of aligned text
        #[arg(long)]
        json: bool,
        /// Include every agent parameter, not just the published ones
        #[arg(long)]
        all: bool,
    },

    /// Run the reporter lifecycle until Ctrl-C, printing parameter changes
    Watch {
        /// How often the table is checked for changes, in milliseconds
        #[arg(long, default_value_t = 1000)]
        poll_ms: u64,
        /// Mark the host busy so periodic free-space sampling is skipped
        #[arg(long)]
        busy: bool,
    },
}
