// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! `Disk` plugin: filesystem space usage. Grounded in
//! `sauna.plugins.ext.disk.Disk`, reading mounted filesystems via `sysinfo`
//! instead of `psutil.disk_partitions()`/`os.statvfs()`.

use std::collections::BTreeMap;
use std::path::Path;

use sauna_core::{CheckFn, CheckParams, CheckOutcome, ConfigError, DependencyError, Threshold};
use sauna_core::threshold::evaluate_value_more_is_worse;
use sysinfo::Disks;

use crate::params::thresholds;

fn verify_dependency() -> Result<(), DependencyError> {
    Ok(())
}

/// Percentage of a filesystem's space currently in use, or `None` if no
/// mounted disk matches `path`.
fn used_percent_for(path: &str) -> Option<f64> {
    let disks = Disks::new_with_refreshed_list();
    let mut best: Option<&sysinfo::Disk> = None;
    for disk in disks.list() {
        let mount = disk.mount_point();
        if Path::new(path).starts_with(mount) {
            if best.map_or(true, |b| mount.as_os_str().len() > b.mount_point().as_os_str().len()) {
                best = Some(disk);
            }
        }
    }
    best.map(|disk| {
        let total = disk.total_space();
        if total == 0 {
            0.0
        } else {
            (total - disk.available_space()) as f64 / total as f64 * 100.0
        }
    })
}

fn used_percent(params: &CheckParams) -> CheckOutcome {
    let path = params.get("path").and_then(|v| v.as_str()).unwrap_or("/");
    let value = used_percent_for(path).ok_or_else(|| format!("no mounted filesystem matches {path:?}"))?;
    let (warn, crit) = thresholds(params, Threshold::Percent(80.0), Threshold::Percent(90.0));
    let status = evaluate_value_more_is_worse(value, warn, crit);
    Ok((status, format!("Disk {path} used: {value:.1}%")))
}

pub fn register(registry: &mut sauna_registry::PluginRegistry) -> Result<(), ConfigError> {
    let mut checks: BTreeMap<&'static str, CheckFn> = BTreeMap::new();
    checks.insert("used_percent", used_percent);
    registry.register("disk", checks, verify_dependency)?;
    Ok(())
}

#[cfg(test)]
#[path = "disk_tests.rs"]
mod tests;
