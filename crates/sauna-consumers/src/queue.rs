// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! Queued-mode (`max_batch_size = 1`) push-consumer worker loop. Grounded
//! in `sauna.consumers.QueuedConsumer.run`.

use sauna_core::{Clock, ServiceCheck};
use sauna_registry::PushConsumer;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::message::ConsumerMessage;
use crate::policy::{is_stale, RetryPolicy};

/// Drive one push consumer's queue until a `Shutdown` sentinel arrives or
/// the channel closes. Owns the consumer for the lifetime of the task.
pub async fn run_queued_worker<C: Clock>(
    name: &str,
    consumer: &dyn PushConsumer,
    mut rx: tokio::sync::mpsc::UnboundedReceiver<ConsumerMessage>,
    policy: RetryPolicy,
    clock: C,
    shutdown: CancellationToken,
) {
    while let Some(message) = rx.recv().await {
        let item = match message {
            ConsumerMessage::Shutdown => break,
            ConsumerMessage::Check(item) => item,
        };

        if is_stale(item.timestamp, clock.epoch_seconds(), policy.stale_age) {
            warn!(consumer = name, check = %item.name, "dropping stale item");
            continue;
        }

        deliver_with_retry(name, consumer, &item, &policy, &shutdown).await;
    }
}

/// Send `item`, retrying on failure per `policy` until it succeeds, the
/// retry budget is exhausted, or shutdown is requested mid-wait.
async fn deliver_with_retry(
    name: &str,
    consumer: &dyn PushConsumer,
    item: &ServiceCheck,
    policy: &RetryPolicy,
    shutdown: &CancellationToken,
) {
    let mut retries: i64 = 0;
    loop {
        match consumer.send(item).await {
            Ok(()) => return,
            Err(err) => {
                retries += 1;
                if policy.retries_exhausted(retries) {
                    warn!(consumer = name, check = %item.name, error = %err, "max retries exceeded, dropping item");
                    return;
                }
                warn!(consumer = name, check = %item.name, error = %err, retries, "send failed, retrying");
                tokio::select! {
                    _ = tokio::time::sleep(std::time::Duration::from_secs(policy.retry_delay)) => {}
                    _ = shutdown.cancelled() => {
                        warn!(consumer = name, check = %item.name, "shutdown during retry backoff, dropping item");
                        return;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
