// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! Retry/staleness/batching parameters shared by queued- and batched-mode
//! workers. Grounded in `sauna.consumers.QueuedConsumer`'s constructor
//! defaults.

use sauna_core::CheckParams;
use serde_json::Value;

/// Queued-mode retry and staleness policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Drop an item older than this many seconds instead of sending it.
    pub stale_age: i64,
    /// `-1` retries forever; otherwise the number of retries allowed
    /// before the item is dropped.
    pub max_retry: i64,
    /// Seconds to wait between retries, interruptible by shutdown.
    pub retry_delay: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { stale_age: 300, max_retry: -1, retry_delay: 5 }
    }
}

impl RetryPolicy {
    /// `true` once `counter` retries have already been attempted and no
    /// more are allowed.
    pub fn retries_exhausted(&self, counter: i64) -> bool {
        self.max_retry != -1 && counter > self.max_retry
    }

    /// Read `stale_age`/`max_retry`/`retry_delay` from a consumer's
    /// configuration block, falling back to the defaults for any key left
    /// unset.
    pub fn from_params(params: &CheckParams) -> Self {
        let default = Self::default();
        Self {
            stale_age: params.get("stale_age").and_then(Value::as_i64).unwrap_or(default.stale_age),
            max_retry: params.get("max_retry").and_then(Value::as_i64).unwrap_or(default.max_retry),
            retry_delay: params.get("retry_delay").and_then(Value::as_u64).unwrap_or(default.retry_delay),
        }
    }
}

/// Batched-mode accumulation policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchPolicy {
    pub max_batch_size: usize,
    pub max_batch_delay: i64,
}

impl Default for BatchPolicy {
    fn default() -> Self {
        Self { max_batch_size: 64, max_batch_delay: 15 }
    }
}

impl BatchPolicy {
    /// Read `max_batch_size`/`max_batch_delay` from a consumer's
    /// configuration block, falling back to the defaults for any key left
    /// unset.
    pub fn from_params(params: &CheckParams) -> Self {
        let default = Self::default();
        Self {
            max_batch_size: params.get("max_batch_size").and_then(Value::as_u64).map(|v| v as usize).unwrap_or(default.max_batch_size),
            max_batch_delay: params.get("max_batch_delay").and_then(Value::as_i64).unwrap_or(default.max_batch_delay),
        }
    }
}

/// `true` if `item_timestamp` is old enough that `stale_age` says to drop it.
pub fn is_stale(item_timestamp: i64, now: i64, stale_age: i64) -> bool {
    now - item_timestamp > stale_age
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
