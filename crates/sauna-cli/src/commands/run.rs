// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! `sauna run` (the default subcommand) - resolves the configuration and
//! hands the engine to the lifecycle controller for the life of the
//! process.

use anyhow::Result;
use sauna_daemon::Engine;

pub async fn run(config: &serde_json::Value) -> Result<()> {
    let engine = Engine::build(config)?;
    sauna_daemon::run(engine).await;
    Ok(())
}
