// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! `Dummy` plugin: returns exactly whatever status/output its params say.
//! Used for exercising the scheduler/runner/delivery pipeline without a
//! real probe. Grounded in `sauna.plugins.ext.dummy.Dummy`.

use std::collections::BTreeMap;

use sauna_core::{CheckFn, CheckParams, CheckOutcome, ConfigError, DependencyError, Status};

fn verify_dependency() -> Result<(), DependencyError> {
    Ok(())
}

fn dummy(params: &CheckParams) -> CheckOutcome {
    let status = match params.get("status").and_then(|v| v.as_i64()) {
        Some(code) => Status::from_code(code as i16),
        None => Status::Ok,
    };
    let output = params
        .get("output")
        .and_then(|v| v.as_str())
        .unwrap_or("OK")
        .to_string();
    Ok((status, output))
}

pub fn register(registry: &mut sauna_registry::PluginRegistry) -> Result<(), ConfigError> {
    let mut checks: BTreeMap<&'static str, CheckFn> = BTreeMap::new();
    checks.insert("dummy", dummy);
    registry.register("dummy", checks, verify_dependency)?;
    Ok(())
}

#[cfg(test)]
#[path = "dummy_tests.rs"]
mod tests;
