// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! `Load` plugin: 1/5/15-minute load averages. Grounded in
//! `sauna.plugins.ext.load.Load`, reading `/proc/loadavg` via `sysinfo`
//! instead of `os.getloadavg()`.

use std::collections::BTreeMap;

use sauna_core::{CheckFn, CheckParams, CheckOutcome, ConfigError, DependencyError, Threshold};
use sauna_registry::PluginRegistry;

use crate::params::thresholds;

fn verify_dependency() -> Result<(), DependencyError> {
    Ok(())
}

fn evaluate(minute_label: &str, value: f64, params: &CheckParams) -> CheckOutcome {
    let (warn, crit) = thresholds(params, Threshold::Count(2.0), Threshold::Count(4.0));
    let status = sauna_core::threshold::evaluate_value_more_is_worse(value, warn, crit);
    Ok((status, format!("Load {minute_label}: {value}")))
}

fn load1(params: &CheckParams) -> CheckOutcome {
    evaluate("1", sysinfo::System::load_average().one, params)
}

fn load5(params: &CheckParams) -> CheckOutcome {
    evaluate("5", sysinfo::System::load_average().five, params)
}

fn load15(params: &CheckParams) -> CheckOutcome {
    evaluate("15", sysinfo::System::load_average().fifteen, params)
}

pub fn register(registry: &mut PluginRegistry) -> Result<(), ConfigError> {
    let mut checks: BTreeMap<&'static str, CheckFn> = BTreeMap::new();
    checks.insert("load1", load1);
    checks.insert("load5", load5);
    checks.insert("load15", load15);
    registry.register("load", checks, verify_dependency)?;
    Ok(())
}

#[cfg(test)]
#[path = "load_tests.rs"]
mod tests;
