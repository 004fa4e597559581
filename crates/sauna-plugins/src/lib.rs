// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Built-in probes, minimal on purpose: the engine treats a check as a pure
//! `params -> (Status, String)` function and does not care how it computes
//! its answer. Grounded one-for-one on the original `sauna.plugins.ext`
//! modules, reimplemented over `sysinfo` instead of `psutil`.

pub mod disk;
pub mod dummy;
pub mod load;
pub mod memory;
pub mod params;
pub mod process;

use sauna_core::ConfigError;
use sauna_registry::PluginRegistry;

/// Register every built-in plugin. Called once from the daemon/CLI binary
/// at startup (see `sauna-registry`'s compile-time registration design).
pub fn register_builtins(registry: &mut PluginRegistry) -> Result<(), ConfigError> {
    load::register(registry)?;
    memory::register(registry)?;
    disk::register(registry)?;
    process::register(registry)?;
    dummy::register(registry)?;
    Ok(())
}
