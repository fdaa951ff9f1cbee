//! Snapshot command handler.
//!
//! Publishes the static parameters and the current free space once, then
//! prints the resulting table.

use anyhow::Result;
use serde_json::{Map, Value};

use agentinfo_core::AgentConfigPort;
use agentinfo_runtime::ParameterPublisher;

use super::PUBLISHED_KEYS;
use crate::bootstrap::CliContext;

/// Execute the snapshot command.
pub fn execute(ctx: &CliContext, json: bool, all: bool) -> Result<()> {
    let rows = collect(ctx, all);
    if json {
        println!("{}", serde_json::to_string_pretty(&render_json(&rows))?);
    } else {
        print!("{}", render_text(&rows));
    }
    Ok(())
}

/// Publish once and read the table back.
///
/// Published keys are always listed, with `None` when the host could not
/// provide a value. With `all`, every other parameter follows in key order.
pub fn collect(ctx: &CliContext, all: bool) -> Vec<(String, Option<String>)> {
    let publisher = ParameterPublisher::new(ctx.config.clone(), ctx.probe.clone());
    publisher.publish_static_parameters();
    publisher.publish_free_space();

    let mut rows: Vec<(String, Option<String>)> = PUBLISHED_KEYS
        .iter()
        .map(|key| ((*key).to_string(), ctx.config.parameter(key)))
        .collect();

    if all {
        rows.extend(
            ctx.config
                .snapshot()
                .into_iter()
                .filter(|(key, _)| !PUBLISHED_KEYS.contains(&key.as_str()))
                .map(|(key, value)| (key, Some(value))),
        );
    }
    rows
}

/// Aligned `key  value` lines.
pub fn render_text(rows: &[(String, Option<String>)]) -> String {
    let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (key, value) in rows {
        let value = value.as_deref().unwrap_or("(not available)");
        out.push_str(&format!("{key:<width$}  {value}\n"));
    }
    out
}

/// JSON object; unavailable values are `null`.
pub fn render_json(rows: &[(String, Option<String>)]) -> Value {
    let map: Map<String, Value> = rows
        .iter()
        .map(|(key, value)| {
            let value = value.clone().map_or(Value::Null, Value::String);
            (key.clone(), value)
        })
        .collect();
    Value::Object(map)
}
