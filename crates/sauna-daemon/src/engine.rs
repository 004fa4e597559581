// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! Builds the frozen registries and resolved configuration the lifecycle
//! controller runs against. Grounded in `sauna.Sauna.__init__`, which reads
//! the config once and holds the resolved checks/consumers for the
//! process's lifetime.

use sauna_config::resolve;
use sauna_core::{Check, ConsumerSpec, StartupError};
use sauna_registry::{ConsumerRegistry, PluginRegistry};
use sauna_store::ResultStore;
use serde_json::Value;

/// Everything the lifecycle controller needs to run: the frozen registries,
/// the resolved checks/consumers, and a fresh result store.
pub struct Engine {
    pub plugins: PluginRegistry,
    pub consumers: ConsumerRegistry,
    pub hostname: String,
    pub checks: Vec<Check>,
    pub consumer_specs: Vec<ConsumerSpec>,
    pub store: ResultStore,
}

impl Engine {
    /// Register every built-in plugin/consumer, then resolve `config`
    /// against them. Fails fast on any configuration or dependency error.
    pub fn build(config: &Value) -> Result<Self, StartupError> {
        let mut plugins = PluginRegistry::new();
        sauna_plugins::register_builtins(&mut plugins)?;

        let mut consumers = ConsumerRegistry::new();
        sauna_consumers::register_builtins(&mut consumers)?;

        let resolved = resolve(config, &plugins, &consumers)?;

        Ok(Self {
            plugins,
            consumers,
            hostname: resolved.hostname,
            checks: resolved.checks,
            consumer_specs: resolved.consumers,
            store: ResultStore::new(),
        })
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
