// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! Shared helpers for pulling `warn`/`crit` thresholds and other typed
//! fields out of a check's opaque parameter map.

use sauna_core::{CheckParams, Threshold};
use serde_json::Value;

/// Parse a `warn`/`crit`-shaped field: JSON numbers become `Threshold::Count`
/// directly, strings go through `Threshold::from_str` (human bytes,
/// percents, bare integers).
fn value_to_threshold(value: &Value) -> Option<Threshold> {
    match value {
        Value::Number(n) => n.as_f64().map(Threshold::Count),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Read `warn`/`crit` from `params`, falling back to the given defaults
/// when absent or unparsable.
pub fn thresholds(params: &CheckParams, default_warn: Threshold, default_crit: Threshold) -> (Threshold, Threshold) {
    let warn = params.get("warn").and_then(value_to_threshold).unwrap_or(default_warn);
    let crit = params.get("crit").and_then(value_to_threshold).unwrap_or(default_crit);
    (warn, crit)
}

pub fn required_str<'a>(params: &'a CheckParams, key: &str) -> Result<&'a str, String> {
    params.get(key).and_then(Value::as_str).ok_or_else(|| format!("missing required parameter {key:?}"))
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
