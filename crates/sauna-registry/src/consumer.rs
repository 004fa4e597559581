// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! `name -> (consumer factory, mode)` table. Grounded in
//! `sauna.consumers.__init__::register_consumer`/`get_consumer`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use sauna_core::{CheckParams, ConfigError, ConsumerMode, SendError, ServiceCheck};
use sauna_store::ResultStore;
use tokio_util::sync::CancellationToken;

/// A push consumer: fed one item (queued mode) or a batch (batched mode) at
/// a time by the fan-out worker loop in `sauna-consumers`.
#[async_trait]
pub trait PushConsumer: Send + Sync {
    async fn send(&self, check: &ServiceCheck) -> Result<(), SendError>;

    /// Default: send sequentially, stopping at the first failure so the
    /// whole batch is retried or dropped together. Consumers whose backend
    /// has a native batch endpoint (e.g. HTTP bulk APIs) may override this.
    async fn send_batch(&self, checks: &[ServiceCheck]) -> Result<(), SendError> {
        for check in checks {
            self.send(check).await?;
        }
        Ok(())
    }
}

/// A pull consumer: owns its own accept loop and serves the result store on
/// demand. `run` takes ownership so the loop can move the consumer into its
/// spawned task.
#[async_trait]
pub trait PullConsumer: Send + Sync {
    async fn run(self: Box<Self>, store: ResultStore, shutdown: CancellationToken) -> Result<(), SendError>;
}

type PushFactory = fn(&CheckParams) -> Result<Box<dyn PushConsumer>, ConfigError>;
type PullFactory = fn(&CheckParams) -> Result<Box<dyn PullConsumer>, ConfigError>;

/// A registered consumer constructor, tagged by which kind of consumer it
/// builds. The tag must agree with the `ConsumerMode` it is registered
/// under: `Queued`/`Batched` require `Push`, `Pull` requires `Pull`.
pub enum ConsumerFactory {
    Push(PushFactory),
    Pull(PullFactory),
}

struct ConsumerEntry {
    factory: ConsumerFactory,
    mode: ConsumerMode,
}

/// Process-wide consumer table, frozen after startup registration.
#[derive(Default)]
pub struct ConsumerRegistry {
    consumers: BTreeMap<&'static str, ConsumerEntry>,
}

impl ConsumerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a consumer constructor under `name`. Fails if `name` is
    /// already registered, or if `mode` disagrees with `factory`'s kind
    /// (e.g. a pull-mode consumer with a push factory).
    pub fn register(&mut self, name: &'static str, mode: ConsumerMode, factory: ConsumerFactory) -> Result<(), ConfigError> {
        if self.consumers.contains_key(name) {
            return Err(ConfigError::Invalid(format!("consumer {name:?} already registered")));
        }
        let kind_matches = matches!(
            (mode, &factory),
            (ConsumerMode::Queued, ConsumerFactory::Push(_))
                | (ConsumerMode::Batched, ConsumerFactory::Push(_))
                | (ConsumerMode::Pull, ConsumerFactory::Pull(_))
        );
        if !kind_matches {
            return Err(ConfigError::Invalid(format!("consumer {name:?} mode does not match its factory kind")));
        }
        self.consumers.insert(name, ConsumerEntry { factory, mode });
        Ok(())
    }

    pub fn mode_of(&self, name: &str) -> Option<ConsumerMode> {
        self.consumers.get(name).map(|entry| entry.mode)
    }

    pub fn push_factory(&self, name: &str) -> Option<PushFactory> {
        match self.consumers.get(name)?.factory {
            ConsumerFactory::Push(factory) => Some(factory),
            ConsumerFactory::Pull(_) => None,
        }
    }

    pub fn pull_factory(&self, name: &str) -> Option<PullFactory> {
        match self.consumers.get(name)?.factory {
            ConsumerFactory::Pull(factory) => Some(factory),
            ConsumerFactory::Push(_) => None,
        }
    }

    /// Stable alphabetical iteration.
    pub fn list_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.consumers.keys().copied()
    }
}

#[cfg(test)]
#[path = "consumer_tests.rs"]
mod tests;
