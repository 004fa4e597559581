// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! Lifecycle controller: builds the [`Engine`], spawns the producer task
//! and one task per consumer, and waits for a clean shutdown.
//!
//! Grounded in `sauna.Sauna.launch` (one producer thread, one thread per
//! consumer, a `threading.Event` tripped by `SIGINT`/`SIGTERM`) and in the
//! signal-handling idiom of `witchcraft_server::init_logging_runtime`
//! (`tokio::signal::unix` streams for `SIGINT`/`SIGTERM`, raced with
//! shutdown via `tokio::select!`).

use sauna_consumers::{run_batched_worker, run_queued_worker, BatchPolicy, ConsumerMessage, RetryPolicy};
use sauna_core::{ConsumerMode, SystemClock};
use sauna_registry::PullConsumer;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use crate::engine::Engine;
use crate::producer;

/// Run the daemon to completion: installs the `SIGINT`/`SIGTERM` handler,
/// then drives [`run_until_shutdown`] until it trips.
pub async fn run(engine: Engine) {
    let shutdown = CancellationToken::new();
    tokio::spawn(wait_for_shutdown_signal(shutdown.clone()));
    run_until_shutdown(engine, shutdown).await;
}

/// Spawn every task and join them once `shutdown` is tripped (by a signal,
/// in production, or directly in tests). Never returns an error itself;
/// configuration errors are the caller's job to surface before calling
/// this (see [`Engine::build`]).
pub async fn run_until_shutdown(engine: Engine, shutdown: CancellationToken) {
    let mut handles = Vec::new();
    let mut push_senders: Vec<UnboundedSender<ConsumerMessage>> = Vec::new();

    for spec in &engine.consumer_specs {
        match spec.mode {
            ConsumerMode::Queued => {
                let Some(factory) = engine.consumers.push_factory(&spec.kind) else {
                    tracing::error!(consumer = %spec.kind, "no push factory registered under this mode");
                    continue;
                };
                let consumer = match factory(&spec.params) {
                    Ok(consumer) => consumer,
                    Err(e) => {
                        tracing::error!(consumer = %spec.kind, error = %e, "failed to build consumer");
                        continue;
                    }
                };
                let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
                push_senders.push(tx);
                let policy = RetryPolicy::from_params(&spec.params);
                let name = spec.kind.clone();
                let shutdown = shutdown.clone();
                handles.push(tokio::spawn(async move {
                    run_queued_worker(&name, consumer.as_ref(), rx, policy, SystemClock, shutdown).await;
                }));
            }
            ConsumerMode::Batched => {
                let Some(factory) = engine.consumers.push_factory(&spec.kind) else {
                    tracing::error!(consumer = %spec.kind, "no push factory registered under this mode");
                    continue;
                };
                let consumer = match factory(&spec.params) {
                    Ok(consumer) => consumer,
                    Err(e) => {
                        tracing::error!(consumer = %spec.kind, error = %e, "failed to build consumer");
                        continue;
                    }
                };
                let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
                push_senders.push(tx);
                let batch_policy = BatchPolicy::from_params(&spec.params);
                let retry_policy = RetryPolicy::from_params(&spec.params);
                let name = spec.kind.clone();
                let shutdown = shutdown.clone();
                handles.push(tokio::spawn(async move {
                    run_batched_worker(&name, consumer.as_ref(), rx, batch_policy, retry_policy, SystemClock, shutdown).await;
                }));
            }
            ConsumerMode::Pull => {
                let Some(factory) = engine.consumers.pull_factory(&spec.kind) else {
                    tracing::error!(consumer = %spec.kind, "no pull factory registered under this mode");
                    continue;
                };
                let consumer = match factory(&spec.params) {
                    Ok(consumer) => consumer,
                    Err(e) => {
                        tracing::error!(consumer = %spec.kind, error = %e, "failed to build consumer");
                        continue;
                    }
                };
                let store = engine.store.clone();
                let name = spec.kind.clone();
                let shutdown = shutdown.clone();
                handles.push(tokio::spawn(async move {
                    if let Err(e) = consumer.run(store, shutdown).await {
                        tracing::error!(consumer = %name, error = %e, "pull consumer exited with an error");
                    }
                }));
            }
        }
    }

    let scheduled = engine
        .checks
        .iter()
        .map(|check| sauna_scheduler::ScheduledCheck { id: check.id.clone(), periodicity: check.periodicity })
        .collect();
    let scheduler = sauna_scheduler::Scheduler::new(scheduled);
    let producer_handle = tokio::spawn(producer::run(
        scheduler,
        engine.checks,
        engine.hostname,
        engine.store,
        push_senders,
        SystemClock,
        shutdown.clone(),
    ));

    producer_handle.await.ok();
    for handle in handles {
        handle.await.ok();
    }
}

/// Trip `shutdown` once, on the first of SIGINT or SIGTERM.
async fn wait_for_shutdown_signal(shutdown: CancellationToken) {
    #[cfg(unix)]
    {
        let mut terminate = match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(stream) => stream,
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                return;
            }
        };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => tracing::info!("received SIGINT, shutting down"),
            _ = terminate.recv() => tracing::info!("received SIGTERM, shutting down"),
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
        tracing::info!("received interrupt, shutting down");
    }
    shutdown.cancel();
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
