// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! `sauna status` - runs every configured check once, synchronously, and
//! prints the results. Does not start the scheduler or any consumer.

use anyhow::Result;
use sauna_core::SystemClock;
use sauna_daemon::{run_check, Engine};

pub fn run_once(config: &serde_json::Value) -> Result<()> {
    let engine = Engine::build(config)?;
    let clock = SystemClock;

    let mut results: Vec<_> =
        engine.checks.iter().map(|check| run_check(check, &engine.hostname, &clock)).collect();
    results.sort_by(|a, b| a.name.cmp(&b.name));

    for result in results {
        println!("{} {} {}", result.name, result.status, result.output);
    }
    Ok(())
}
