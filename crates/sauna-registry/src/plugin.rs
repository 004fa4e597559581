// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! `name -> (check functions, dependency check)` table, populated once at
//! startup. Grounded in `sauna.plugins.__init__::register_plugin`/
//! `get_plugin`/`get_all_plugins`.

use std::collections::BTreeMap;

use sauna_core::{CheckFn, ConfigError, DependencyError};

/// A registered plugin: its check functions keyed by short type
/// (`load1`, `used_percent`, ...) and a dependency probe run at
/// configuration-resolve time.
pub struct PluginEntry {
    pub checks: BTreeMap<&'static str, CheckFn>,
    verify_dependency: fn() -> Result<(), DependencyError>,
}

impl PluginEntry {
    /// Run this plugin's dependency probe (e.g. "is `lm-sensors` present").
    /// Statically compiled plugins that need nothing external just return
    /// `Ok(())` unconditionally.
    pub fn verify_dependency(&self) -> Result<(), DependencyError> {
        (self.verify_dependency)()
    }

    pub fn check(&self, check_type: &str) -> Option<CheckFn> {
        self.checks.get(check_type).copied()
    }
}

/// Process-wide plugin table, frozen after startup registration.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: BTreeMap<&'static str, PluginEntry>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin's check functions under `name`. Fails if `name`
    /// is already registered.
    pub fn register(
        &mut self,
        name: &'static str,
        checks: BTreeMap<&'static str, CheckFn>,
        verify_dependency: fn() -> Result<(), DependencyError>,
    ) -> Result<(), ConfigError> {
        if self.plugins.contains_key(name) {
            return Err(ConfigError::Invalid(format!("plugin {name:?} already registered")));
        }
        self.plugins.insert(name, PluginEntry { checks, verify_dependency });
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&PluginEntry> {
        self.plugins.get(name)
    }

    /// Stable alphabetical iteration (a `BTreeMap` already orders its keys).
    pub fn list_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.plugins.keys().copied()
    }
}

#[cfg(test)]
#[path = "plugin_tests.rs"]
mod tests;
