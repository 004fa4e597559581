// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! `sauna sample` - writes an annotated starter configuration.

use anyhow::{Context, Result};

const SAMPLE: &str = r#"# Sample sauna configuration. Copy this to sauna.yml and adjust.

periodicity: 120
hostname: null  # defaults to the OS FQDN

plugins:
  load:
    checks:
      - type: load1
        warn: 2
        crit: 4
  memory:
    checks:
      - type: used_percent
        warn: 80%
        crit: 90%
  disk:
    checks:
      - type: used_percent
        path: /
        warn: 80%
        crit: 90%

consumers:
  - type: Stdout
  - type: HTTPServer
    port: 8080
    format: json
"#;

const PATH: &str = "./sauna-sample.yml";

pub fn write() -> Result<()> {
    std::fs::write(PATH, SAMPLE).with_context(|| format!("writing {PATH}"))?;
    println!("wrote sample configuration to {PATH}");
    Ok(())
}
