// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Delivery fan-out worker loops and built-in push/pull consumer backends.
//!
//! The queued/batched worker loops in [`queue`]/[`batch`] are generic over
//! the consumer backend; each backend module below only implements
//! `PushConsumer`/`PullConsumer` and registers a factory.

pub mod batch;
pub mod http_push;
pub mod http_server;
pub mod message;
pub mod nsca;
pub mod policy;
pub mod queue;
pub mod stdout;
pub mod tcp_server;

pub use batch::run_batched_worker;
pub use message::ConsumerMessage;
pub use policy::{is_stale, BatchPolicy, RetryPolicy};
pub use queue::run_queued_worker;

use sauna_core::ConfigError;
use sauna_registry::ConsumerRegistry;

/// Register every built-in consumer. Called once from the daemon/CLI binary
/// at startup (see `sauna-registry`'s compile-time registration design).
pub fn register_builtins(registry: &mut ConsumerRegistry) -> Result<(), ConfigError> {
    stdout::register(registry)?;
    http_push::register(registry)?;
    nsca::register(registry)?;
    http_server::register(registry)?;
    tcp_server::register(registry)?;
    Ok(())
}
