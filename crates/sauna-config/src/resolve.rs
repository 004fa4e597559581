// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! Turns a parsed configuration `Value` plus the frozen plugin/consumer
//! registries into a concrete `Vec<Check>` and `Vec<ConsumerSpec>`.
//!
//! Grounded in `Sauna.plugins_checks` / `Sauna.consumers` /
//! `Sauna.get_all_active_checks`: normalizes the mapping-or-list config
//! shape, derives names and periodicities, and collects every dependency
//! error before failing so the operator sees the complete picture.

use std::collections::HashSet;

use sauna_core::{Check, CheckParams, ConfigError, ConsumerSpec, DependencyError, StartupError};
use sauna_registry::{ConsumerRegistry, PluginRegistry};
use serde_json::Value;

const DEFAULT_PERIODICITY: u64 = 120;

/// The result of resolving configuration: a ready-to-schedule check list
/// and a ready-to-spawn consumer list.
#[derive(Debug)]
pub struct ResolvedConfig {
    pub hostname: String,
    pub checks: Vec<Check>,
    pub consumers: Vec<ConsumerSpec>,
}

/// Resolve `config` against `plugins` and `consumers`. Fails fast on any
/// configuration shape/name error; dependency errors from plugin
/// instantiation are collected across every plugin block and reported
/// together only if at least one remains after all blocks are processed.
pub fn resolve(config: &Value, plugins: &PluginRegistry, consumers: &ConsumerRegistry) -> Result<ResolvedConfig, StartupError> {
    let root = config.as_object().ok_or_else(|| ConfigError::Invalid("configuration root must be a mapping".to_string()))?;

    let global_periodicity = root.get("periodicity").and_then(Value::as_u64).unwrap_or(DEFAULT_PERIODICITY);

    let hostname = root
        .get("hostname")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(default_hostname);

    validate_extra_plugins(root.get("extra_plugins"), plugins)?;

    let mut dependency_errors = Vec::new();
    let checks = resolve_checks(root.get("plugins"), global_periodicity, plugins, &mut dependency_errors)?;
    if !dependency_errors.is_empty() {
        return Err(StartupError::Dependencies(dependency_errors));
    }

    let consumer_specs = resolve_consumers(root.get("consumers"), consumers)?;

    Ok(ResolvedConfig { hostname, checks, consumers: consumer_specs })
}

fn default_hostname() -> String {
    hostname::get().ok().map(|h| h.to_string_lossy().into_owned()).unwrap_or_else(|| "localhost".to_string())
}

fn validate_extra_plugins(value: Option<&Value>, plugins: &PluginRegistry) -> Result<(), ConfigError> {
    let Some(value) = value else { return Ok(()) };
    let names = value.as_array().ok_or_else(|| ConfigError::Invalid("extra_plugins must be a list".to_string()))?;
    for name in names {
        let name = name.as_str().ok_or_else(|| ConfigError::Invalid("extra_plugins entries must be strings".to_string()))?;
        if plugins.get(name).is_none() {
            return Err(ConfigError::UnknownPlugin(name.to_string()));
        }
    }
    Ok(())
}

/// Normalize a `plugins`/`consumers` config block: either a mapping keyed
/// by type, or an ordered list of objects each carrying an explicit `type`.
/// Both normalize to the list form, tagged with `type`.
fn normalize_blocks(value: Option<&Value>, field: &str) -> Result<Vec<serde_json::Map<String, Value>>, ConfigError> {
    let Some(value) = value else { return Ok(Vec::new()) };
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_object().cloned().ok_or_else(|| ConfigError::Invalid(format!("{field} entries must be mappings"))))
            .collect(),
        Value::Object(map) => map
            .iter()
            .map(|(type_name, params)| {
                let mut block = params.as_object().cloned().unwrap_or_default();
                block.insert("type".to_string(), Value::String(type_name.clone()));
                Ok(block)
            })
            .collect(),
        _ => Err(ConfigError::Invalid(format!("{field} must be a mapping or a list"))),
    }
}

fn block_type<'a>(block: &'a serde_json::Map<String, Value>, field: &str) -> Result<&'a str, ConfigError> {
    block
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| ConfigError::Invalid(format!("{field} entry is missing a 'type' field")))
}

fn resolve_checks(
    value: Option<&Value>,
    global_periodicity: u64,
    plugins: &PluginRegistry,
    dependency_errors: &mut Vec<DependencyError>,
) -> Result<Vec<Check>, StartupError> {
    let blocks = normalize_blocks(value, "plugins")?;
    let mut checks = Vec::new();
    let mut seen_names = HashSet::new();

    for block in blocks {
        let plugin_type = block_type(&block, "plugins")?;
        let entry = plugins.get(plugin_type).ok_or_else(|| ConfigError::UnknownPlugin(plugin_type.to_string()))?;

        if let Err(dep_err) = entry.verify_dependency() {
            dependency_errors.push(dep_err);
            continue;
        }

        let check_blocks = block
            .get("checks")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        for check_value in check_blocks {
            let check_block = check_value
                .as_object()
                .ok_or_else(|| ConfigError::Invalid(format!("check entry for plugin {plugin_type:?} must be a mapping")))?
                .clone();

            let check_type = block_type(&check_block, "checks")?.to_string();
            let function = entry
                .check(&check_type)
                .ok_or_else(|| ConfigError::UnknownCheckType { plugin: plugin_type.to_string(), check_type: check_type.clone() })?;

            let name = check_block
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("{}_{}", plugin_type.to_lowercase(), check_type));

            if !seen_names.insert(name.clone()) {
                return Err(ConfigError::DuplicateCheckName(name).into());
            }

            let periodicity = check_block.get("periodicity").and_then(Value::as_u64).unwrap_or(global_periodicity);

            let mut params: CheckParams = check_block;
            params.remove("type");
            params.remove("name");
            params.remove("periodicity");

            checks.push(Check::new(name, periodicity, function, params));
        }
    }

    Ok(checks)
}

fn resolve_consumers(value: Option<&Value>, consumers: &ConsumerRegistry) -> Result<Vec<ConsumerSpec>, ConfigError> {
    let blocks = normalize_blocks(value, "consumers")?;
    let mut specs = Vec::new();

    for block in blocks {
        let kind = block_type(&block, "consumers")?.to_string();
        let mode = consumers.mode_of(&kind).ok_or_else(|| ConfigError::UnknownConsumer(kind.clone()))?;

        let mut params = block;
        params.remove("type");

        specs.push(ConsumerSpec::new(kind, mode, params));
    }

    Ok(specs)
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
