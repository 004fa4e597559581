// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! Loads an operator-authored YAML configuration file and converts it to
//! the `serde_json::Value` the resolver consumes. Grounded in spec.md §6's
//! framing of configuration parsing as external to the engine.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Read `path`, parse it as YAML, and convert it to JSON. The engine never
/// sees the YAML document itself, only the resulting value.
pub fn load(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading configuration file {}", path.display()))?;
    let yaml: serde_yaml_ng::Value =
        serde_yaml_ng::from_str(&text).with_context(|| format!("parsing configuration file {}", path.display()))?;
    serde_json::to_value(yaml).context("converting configuration to JSON")
}

/// `logging.level` passthrough, consulted alongside `--level` when a
/// configuration has already been loaded.
pub fn logging_level(config: &Value) -> Option<&str> {
    config.get("logging")?.get("level")?.as_str()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
