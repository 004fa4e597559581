// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! Check runner: executes one configured [`Check`] and turns whatever it
//! does into a [`ServiceCheck`]. Grounded in `sauna.Sauna.launch_check`,
//! which wraps every plugin call so a misbehaving probe cannot take the
//! whole daemon down with it.

use std::panic::{self, AssertUnwindSafe};

use sauna_core::{Check, Clock, Status};
use sauna_store::ResultStore;

/// Run `check.function(&check.params)` and turn the result into a
/// `ServiceCheck`, stamped with `hostname` and the current time.
///
/// A function that panics or returns `Err` becomes `Status::Unknown` with
/// the panic payload or error message as output; execution of the daemon
/// continues regardless (see spec's "probe error" handling).
pub fn run_check<C: Clock>(check: &Check, hostname: &str, clock: &C) -> sauna_core::ServiceCheck {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| (check.function)(&check.params)));

    let (status, output) = match outcome {
        Ok(Ok((status, output))) => (status, output),
        Ok(Err(message)) => (Status::Unknown, message),
        Err(panic_payload) => (Status::Unknown, panic_message(&panic_payload)),
    };

    sauna_core::ServiceCheck {
        timestamp: clock.epoch_seconds(),
        hostname: hostname.to_string(),
        name: check.id.as_str().to_string(),
        status,
        output,
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("check panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("check panicked: {message}")
    } else {
        "check panicked with a non-string payload".to_string()
    }
}

/// Run every `due` check in `checks` sequentially, recording each result in
/// `store` as it is produced. Sequential per spec.md §4.4 ("the runner
/// executes due checks one at a time per tick").
pub fn run_due_checks<C: Clock>(checks: &[Check], due: &[sauna_core::CheckId], hostname: &str, store: &ResultStore, clock: &C) -> Vec<sauna_core::ServiceCheck> {
    let mut results = Vec::with_capacity(due.len());
    for id in due {
        let Some(check) = checks.iter().find(|c| &c.id == id) else {
            tracing::warn!(check = %id, "scheduler produced an unknown check id");
            continue;
        };
        let result = run_check(check, hostname, clock);
        store.record(result.clone());
        results.push(result);
    }
    results
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
