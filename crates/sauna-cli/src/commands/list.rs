// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! `sauna list-available-checks` / `list-available-consumers` /
//! `list-active-checks` - registry and configuration diagnostics.

use anyhow::Result;
use sauna_registry::{ConsumerRegistry, PluginRegistry};

/// Every check type every built-in plugin exposes, as `plugin.check_type`,
/// alphabetical (both tables are `BTreeMap`-backed).
pub fn available_checks() -> Result<()> {
    let mut registry = PluginRegistry::new();
    sauna_plugins::register_builtins(&mut registry)?;

    for plugin in registry.list_names() {
        let Some(entry) = registry.get(plugin) else { continue };
        for check_type in entry.checks.keys() {
            println!("{plugin}.{check_type}");
        }
    }
    Ok(())
}

/// Every registered consumer, with the mode it was registered under.
pub fn available_consumers() -> Result<()> {
    let mut registry = ConsumerRegistry::new();
    sauna_consumers::register_builtins(&mut registry)?;

    for name in registry.list_names() {
        let mode = registry.mode_of(name).map(mode_label).unwrap_or("?");
        println!("{name} ({mode})");
    }
    Ok(())
}

/// Every check this configuration resolves to, with its periodicity.
pub fn active_checks(config: &serde_json::Value) -> Result<()> {
    let engine = sauna_daemon::Engine::build(config)?;
    let mut checks: Vec<_> = engine.checks.iter().collect();
    checks.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));

    for check in checks {
        println!("{} every {}s", check.id, check.periodicity);
    }
    Ok(())
}

fn mode_label(mode: sauna_core::ConsumerMode) -> &'static str {
    match mode {
        sauna_core::ConsumerMode::Queued => "queued",
        sauna_core::ConsumerMode::Batched => "batched",
        sauna_core::ConsumerMode::Pull => "pull",
    }
}
