// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Process-wide mapping from check name to its latest `ServiceCheck`.
//!
//! Only the check runner writes; pull consumers (HTTP/TCP status servers)
//! and the CLI `status` command read concurrently. Matches the teacher's
//! `Arc<Mutex<MaterializedState>>` shared-state idiom.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use sauna_core::{ServiceCheck, Status};
use serde::Serialize;

/// A read-only view of one check's latest result, as served by `snapshot()`
/// and the HTTP status server's JSON body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckSummary {
    pub status: Status,
    pub code: i16,
    pub timestamp: i64,
    pub output: String,
}

impl From<&ServiceCheck> for CheckSummary {
    fn from(check: &ServiceCheck) -> Self {
        Self { status: check.status, code: check.status.code(), timestamp: check.timestamp, output: check.output.clone() }
    }
}

/// Process-wide `name -> ServiceCheck` map, behind a single mutex.
///
/// Cheap to clone: internally an `Arc`, so every consumer task and the
/// lifecycle controller share the same map.
#[derive(Clone, Default)]
pub struct ResultStore {
    inner: Arc<Mutex<HashMap<String, ServiceCheck>>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the latest outcome for `check.name`. Entries are never evicted.
    pub fn record(&self, check: ServiceCheck) {
        self.inner.lock().insert(check.name.clone(), check);
    }

    /// Latest result for a single check, if it has ever run.
    pub fn get(&self, name: &str) -> Option<ServiceCheck> {
        self.inner.lock().get(name).cloned()
    }

    /// Deep copy of every check's latest result, keyed by name.
    pub fn snapshot(&self) -> HashMap<String, CheckSummary> {
        self.inner.lock().iter().map(|(name, check)| (name.clone(), CheckSummary::from(check))).collect()
    }

    /// Worst status across all stored checks, under the severity ordering
    /// `OK < UNKNOWN < WARN < CRIT`. An empty store is `OK`.
    pub fn overall(&self) -> Status {
        self.inner.lock().values().map(|check| check.status).max().unwrap_or(Status::Ok)
    }

    /// Number of distinct checks that have ever produced a result.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
