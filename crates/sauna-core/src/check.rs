// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! Shapes shared by the registries, resolver, scheduler and runner:
//! `Check`, `ConsumerSpec`, and the `ServiceCheck` result record.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::status::Status;

/// Opaque per-check or per-consumer parameter bag.
///
/// Carries whatever fields a plugin/consumer configuration block had beyond
/// the ones the resolver itself interprets (`type`, `name`, `periodicity`,
/// `mode`, ...). Plugins and consumers parse their own subset out of this.
pub type CheckParams = serde_json::Map<String, serde_json::Value>;

/// A check's unique name, used as the result-store key and queue routing key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CheckId(String);

impl CheckId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CheckId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&str> for CheckId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl Borrow<str> for CheckId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Outcome of running a check function once: either a decided status with its
/// output text, or a failure message. The runner converts the failure case
/// (and any caught panic) to `Status::Unknown`.
pub type CheckOutcome = Result<(Status, String), String>;

/// A registered check function: `params -> (Status, message)`.
///
/// Plain function pointers rather than boxed closures, matching the fact
/// that plugins are compiled in, not loaded dynamically (see the registry's
/// compile-time design). `fn` pointers are trivially `UnwindSafe`, which the
/// runner's `catch_unwind` call around each invocation relies on.
pub type CheckFn = fn(&CheckParams) -> CheckOutcome;

/// One configured invocation of a probe: a name, how often to run it, the
/// function to call, and the parameters to call it with.
#[derive(Clone)]
pub struct Check {
    pub id: CheckId,
    pub periodicity: u64,
    pub function: CheckFn,
    pub params: CheckParams,
}

impl Check {
    pub fn new(id: impl Into<CheckId>, periodicity: u64, function: CheckFn, params: CheckParams) -> Self {
        Self { id: id.into(), periodicity, function, params }
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("id", &self.id)
            .field("periodicity", &self.periodicity)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// How a consumer receives check outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsumerMode {
    /// One item at a time, `max_batch_size = 1`.
    Queued,
    /// Accumulated into batches before sending.
    Batched,
    /// No queue; the consumer reads the result store on demand.
    Pull,
}

/// A resolved consumer configuration block: which implementation, how it is
/// fed, and its own parameters.
#[derive(Debug, Clone)]
pub struct ConsumerSpec {
    pub kind: String,
    pub mode: ConsumerMode,
    pub params: CheckParams,
}

impl ConsumerSpec {
    pub fn new(kind: impl Into<String>, mode: ConsumerMode, params: CheckParams) -> Self {
        Self { kind: kind.into(), mode, params }
    }
}

/// The outcome of one check execution: immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCheck {
    pub timestamp: i64,
    pub hostname: String,
    pub name: String,
    pub status: Status,
    pub output: String,
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
