// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! Wires `tracing-subscriber` from the CLI's `--level` flag and, once a
//! configuration is available, its `logging.level` passthrough.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber. `level` is a standard
/// `tracing` filter directive (`"warn"`, `"info"`, `"sauna_daemon=debug"`,
/// ...); an invalid directive falls back to `warn` rather than failing
/// startup over a logging typo.
pub fn init(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
