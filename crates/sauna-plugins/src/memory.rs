// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! `Memory` plugin: RAM and swap usage. Grounded in
//! `sauna.plugins.ext.memory.Memory`, reading `/proc/meminfo` via `sysinfo`
//! instead of `psutil.virtual_memory()`/`psutil.swap_memory()`.

use std::collections::BTreeMap;

use sauna_core::{CheckFn, CheckParams, CheckOutcome, ConfigError, DependencyError, Threshold};
use sauna_core::threshold::evaluate_value_more_is_worse;
use sysinfo::System;

use crate::params::thresholds;

fn verify_dependency() -> Result<(), DependencyError> {
    Ok(())
}

fn percent_used(used: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        used as f64 / total as f64 * 100.0
    }
}

fn used_percent(params: &CheckParams) -> CheckOutcome {
    let mut sys = System::new();
    sys.refresh_memory();
    let value = percent_used(sys.used_memory(), sys.total_memory());
    let (warn, crit) = thresholds(params, Threshold::Percent(80.0), Threshold::Percent(90.0));
    let status = evaluate_value_more_is_worse(value, warn, crit);
    Ok((status, format!("Memory used: {value:.1}%")))
}

fn swap_used_percent(params: &CheckParams) -> CheckOutcome {
    let mut sys = System::new();
    sys.refresh_memory();
    let value = percent_used(sys.used_swap(), sys.total_swap());
    let (warn, crit) = thresholds(params, Threshold::Percent(80.0), Threshold::Percent(90.0));
    let status = evaluate_value_more_is_worse(value, warn, crit);
    Ok((status, format!("Swap used: {value:.1}%")))
}

fn available(params: &CheckParams) -> CheckOutcome {
    let mut sys = System::new();
    sys.refresh_memory();
    let value = sys.available_memory() as f64;
    let (warn, crit) = thresholds(params, Threshold::Bytes(1_073_741_824), Threshold::Bytes(536_870_912));
    let status = sauna_core::threshold::evaluate_value_less_is_worse(value, warn, crit);
    Ok((status, format!("Memory available: {}", sauna_core::threshold::format_human_bytes(sys.available_memory() as i64))))
}

pub fn register(registry: &mut sauna_registry::PluginRegistry) -> Result<(), ConfigError> {
    let mut checks: BTreeMap<&'static str, CheckFn> = BTreeMap::new();
    checks.insert("used_percent", used_percent);
    checks.insert("swap_used_percent", swap_used_percent);
    checks.insert("available", available);
    registry.register("memory", checks, verify_dependency)?;
    Ok(())
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
