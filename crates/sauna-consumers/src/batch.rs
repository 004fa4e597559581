// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! Batched-mode push-consumer worker loop. Grounded in
//! `sauna.consumers.BatchConsumer.run`.

use sauna_core::{Clock, ServiceCheck};
use sauna_registry::PushConsumer;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::message::ConsumerMessage;
use crate::policy::{is_stale, BatchPolicy, RetryPolicy};

/// Drive one push consumer's queue in batched mode until a `Shutdown`
/// sentinel arrives or the channel closes.
pub async fn run_batched_worker<C: Clock>(
    name: &str,
    consumer: &dyn PushConsumer,
    mut rx: tokio::sync::mpsc::UnboundedReceiver<ConsumerMessage>,
    batch_policy: BatchPolicy,
    retry_policy: RetryPolicy,
    clock: C,
    shutdown: CancellationToken,
) {
    let mut buffer: Vec<ServiceCheck> = Vec::new();
    let mut batch_created_at = clock.epoch_seconds();

    loop {
        let elapsed = clock.epoch_seconds() - batch_created_at;
        let remaining = (batch_policy.max_batch_delay - elapsed).max(0);
        let delay = std::time::Duration::from_secs(remaining as u64);
        tokio::select! {
            message = rx.recv() => {
                match message {
                    None => {
                        flush(name, consumer, &mut buffer, &retry_policy, &clock, &shutdown).await;
                        return;
                    }
                    Some(ConsumerMessage::Shutdown) => {
                        flush(name, consumer, &mut buffer, &retry_policy, &clock, &shutdown).await;
                        return;
                    }
                    Some(ConsumerMessage::Check(item)) => {
                        if buffer.is_empty() {
                            batch_created_at = clock.epoch_seconds();
                        }
                        buffer.push(item);
                        if buffer.len() >= batch_policy.max_batch_size {
                            flush(name, consumer, &mut buffer, &retry_policy, &clock, &shutdown).await;
                        }
                    }
                }
            }
            _ = tokio::time::sleep(delay), if !buffer.is_empty() => {
                if clock.epoch_seconds() - batch_created_at >= batch_policy.max_batch_delay {
                    flush(name, consumer, &mut buffer, &retry_policy, &clock, &shutdown).await;
                }
            }
        }
    }
}

/// Flush the accumulated batch, checking staleness against its *last* item
/// and applying the same retry rules as queued mode to the whole batch.
async fn flush<C: Clock>(
    name: &str,
    consumer: &dyn PushConsumer,
    buffer: &mut Vec<ServiceCheck>,
    policy: &RetryPolicy,
    clock: &C,
    shutdown: &CancellationToken,
) {
    if buffer.is_empty() {
        return;
    }
    let items = std::mem::take(buffer);
    let Some(last) = items.last() else { return };
    if is_stale(last.timestamp, clock.epoch_seconds(), policy.stale_age) {
        warn!(consumer = name, batch_size = items.len(), "dropping stale batch");
        return;
    }

    let mut retries: i64 = 0;
    loop {
        match consumer.send_batch(&items).await {
            Ok(()) => return,
            Err(err) => {
                retries += 1;
                if policy.retries_exhausted(retries) {
                    warn!(consumer = name, batch_size = items.len(), error = %err, "max retries exceeded, dropping batch");
                    return;
                }
                warn!(consumer = name, batch_size = items.len(), error = %err, retries, "batch send failed, retrying");
                tokio::select! {
                    _ = tokio::time::sleep(std::time::Duration::from_secs(policy.retry_delay)) => {}
                    _ = shutdown.cancelled() => {
                        warn!(consumer = name, batch_size = items.len(), "shutdown during retry backoff, dropping batch");
                        return;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
