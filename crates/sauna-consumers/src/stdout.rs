// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! `Stdout` consumer: prints every check as it arrives. Grounded in
//! `sauna.consumers.ext.stdout.StdoutConsumer`.

use async_trait::async_trait;
use sauna_core::{CheckParams, ConfigError, SendError, ServiceCheck};
use sauna_registry::{ConsumerFactory, ConsumerRegistry, PushConsumer};
use sauna_core::ConsumerMode;

struct StdoutConsumer;

#[async_trait]
impl PushConsumer for StdoutConsumer {
    async fn send(&self, check: &ServiceCheck) -> Result<(), SendError> {
        println!("{} {} {} {}", check.hostname, check.name, check.status, check.output);
        Ok(())
    }
}

fn build(_params: &CheckParams) -> Result<Box<dyn PushConsumer>, ConfigError> {
    Ok(Box::new(StdoutConsumer))
}

pub fn register(registry: &mut ConsumerRegistry) -> Result<(), ConfigError> {
    registry.register("Stdout", ConsumerMode::Queued, ConsumerFactory::Push(build))
}

#[cfg(test)]
#[path = "stdout_tests.rs"]
mod tests;
