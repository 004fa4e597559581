// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! Recursive configuration merge, matching the original `_merge_config`:
//! lists concatenate, objects merge key-wise (last writer wins on a
//! scalar), everything else overrides.

use serde_json::Value;

/// Merge `other` into `base` in place.
pub fn merge_value(base: &mut Value, other: Value) {
    match (base, other) {
        (Value::Object(base_map), Value::Object(other_map)) => {
            for (key, value) in other_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_value(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (Value::Array(base_arr), Value::Array(other_arr)) => {
            base_arr.extend(other_arr);
        }
        (base_slot, other_value) => {
            *base_slot = other_value;
        }
    }
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
