// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! Producer task: ticks the [`Scheduler`], runs due checks, and fans each
//! result out onto every push consumer's queue. Grounded in
//! `sauna.Sauna.main_loop`, the one Python thread that owned scheduling and
//! running; here it is the one task that owns the `Scheduler` and the
//! runner.

use sauna_consumers::ConsumerMessage;
use sauna_core::{Check, Clock};
use sauna_scheduler::Scheduler;
use sauna_store::ResultStore;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use crate::runner::run_due_checks;

/// Drive the scheduler until `shutdown` is tripped, running due checks on
/// every tick and broadcasting each result to every push-consumer queue in
/// `push_senders`. Sends a [`ConsumerMessage::Shutdown`] sentinel to each
/// queue before returning so parked workers wake up (spec's §5 shutdown
/// model).
pub async fn run<C: Clock>(
    mut scheduler: Scheduler,
    checks: Vec<Check>,
    hostname: String,
    store: ResultStore,
    push_senders: Vec<UnboundedSender<ConsumerMessage>>,
    clock: C,
    shutdown: CancellationToken,
) {
    let tick_duration = std::time::Duration::from_secs(scheduler.tick_duration());

    // Tick 0 runs immediately on startup (every check is due on it), then
    // the loop waits `tick_duration` between subsequent ticks.
    loop {
        if shutdown.is_cancelled() {
            break;
        }

        let (tick_index, due) = scheduler.next_tick();
        tracing::debug!(tick = tick_index, due = due.len(), "running due checks");
        let results = run_due_checks(&checks, &due, &hostname, &store, &clock);

        for result in results {
            for sender in &push_senders {
                let _ = sender.send(ConsumerMessage::Check(result.clone()));
            }
        }

        tokio::select! {
            _ = shutdown.cancelled() => break,
            _ = tokio::time::sleep(tick_duration) => {}
        }
    }

    for sender in &push_senders {
        let _ = sender.send(ConsumerMessage::Shutdown);
    }
}

#[cfg(test)]
#[path = "producer_tests.rs"]
mod tests;
