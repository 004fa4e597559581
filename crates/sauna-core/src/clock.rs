// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! Clock abstraction for testable time handling.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// A clock that provides the current wall-clock second.
///
/// `ServiceCheck::timestamp` is stamped from this, not `SystemTime`
/// directly, so runner and scheduler tests can control time.
pub trait Clock: Clone + Send + Sync {
    fn epoch_seconds(&self) -> i64;
}

/// Real system clock.
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn epoch_seconds(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

/// Fake clock for testing with controllable time.
#[derive(Clone)]
pub struct FakeClock {
    epoch_seconds: Arc<Mutex<i64>>,
}

impl FakeClock {
    pub fn new(epoch_seconds: i64) -> Self {
        Self { epoch_seconds: Arc::new(Mutex::new(epoch_seconds)) }
    }

    pub fn advance(&self, seconds: i64) {
        *self.epoch_seconds.lock() += seconds;
    }

    pub fn set(&self, epoch_seconds: i64) {
        *self.epoch_seconds.lock() = epoch_seconds;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new(1_000_000)
    }
}

impl Clock for FakeClock {
    fn epoch_seconds(&self) -> i64 {
        *self.epoch_seconds.lock()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
