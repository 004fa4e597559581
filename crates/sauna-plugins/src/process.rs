// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! `Process` plugin: process presence and counts. Grounded in
//! `sauna.plugins.ext.processes.Processes`, reading `/proc` via `sysinfo`
//! instead of iterating `psutil.process_iter()`.

use std::collections::BTreeMap;

use sauna_core::{CheckFn, CheckParams, CheckOutcome, ConfigError, DependencyError, Status};
use sysinfo::System;

use crate::params::required_str;

fn verify_dependency() -> Result<(), DependencyError> {
    Ok(())
}

fn matching_count(sys: &System, exec: &str) -> usize {
    sys.processes()
        .values()
        .filter(|process| process.name().to_string_lossy() == exec || process.exe().is_some_and(|p| p.ends_with(exec)))
        .count()
}

/// `running`: is at least one instance of `exec` alive, optionally an exact
/// count `nb`. Mirrors `Processes.running`: zero matches is always `Crit`;
/// with `nb` given, an exact match is `Ok` and anything else is `Warn`.
fn running(params: &CheckParams) -> CheckOutcome {
    let exec = required_str(params, "exec")?;
    let mut sys = System::new_all();
    sys.refresh_processes(sysinfo::ProcessesToUpdate::All, true);
    let count = matching_count(&sys, exec);

    if count == 0 {
        return Ok((Status::Crit, format!("No instance of {exec} is running")));
    }
    match params.get("nb").and_then(|v| v.as_u64()) {
        Some(expected) if expected as usize == count => Ok((Status::Ok, format!("{count} instance(s) of {exec} running"))),
        Some(expected) => Ok((
            Status::Warn,
            format!("{count} instance(s) of {exec} running, expected {expected}"),
        )),
        None => Ok((Status::Ok, format!("{count} instance(s) of {exec} running"))),
    }
}

fn count(params: &CheckParams) -> CheckOutcome {
    let mut sys = System::new_all();
    sys.refresh_processes(sysinfo::ProcessesToUpdate::All, true);
    let _ = params;
    Ok((Status::Ok, format!("{} processes", sys.processes().len())))
}

pub fn register(registry: &mut sauna_registry::PluginRegistry) -> Result<(), ConfigError> {
    let mut checks: BTreeMap<&'static str, CheckFn> = BTreeMap::new();
    checks.insert("running", running);
    checks.insert("count", count);
    registry.register("process", checks, verify_dependency)?;
    Ok(())
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
