// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! `sauna` - the host-resident health-check daemon's command line entry
//! point. Owns argument parsing, YAML-to-JSON configuration loading, and
//! logging setup; the engine itself lives in `sauna-daemon` and never sees
//! a `clap::Parser` or a YAML document.

mod commands;
mod config;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sauna", version, about = "Host-resident health-check daemon")]
struct Cli {
    /// Configuration file to load.
    #[arg(long, default_value = "sauna.yml", global = true)]
    config: PathBuf,

    /// Log level (a `tracing` filter directive).
    #[arg(long, default_value = "warn", global = true)]
    level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the daemon (default).
    Run,
    /// Write a sample configuration to ./sauna-sample.yml.
    Sample,
    /// List the checks this configuration resolves to.
    ListActiveChecks,
    /// List every check type every built-in plugin exposes.
    ListAvailableChecks,
    /// List every registered consumer and its delivery mode.
    ListAvailableConsumers,
    /// Run every configured check once and print the results.
    Status,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match dispatch(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

async fn dispatch(cli: Cli) -> anyhow::Result<()> {
    match cli.command.unwrap_or(Command::Run) {
        Command::Sample => {
            logging::init(&cli.level);
            commands::sample::write()
        }
        Command::ListAvailableChecks => {
            logging::init(&cli.level);
            commands::list::available_checks()
        }
        Command::ListAvailableConsumers => {
            logging::init(&cli.level);
            commands::list::available_consumers()
        }
        Command::ListActiveChecks => {
            let config = config::load(&cli.config)?;
            logging::init(config::logging_level(&config).unwrap_or(&cli.level));
            commands::list::active_checks(&config)
        }
        Command::Status => {
            let config = config::load(&cli.config)?;
            logging::init(config::logging_level(&config).unwrap_or(&cli.level));
            commands::status::run_once(&config)
        }
        Command::Run => {
            let config = config::load(&cli.config)?;
            logging::init(config::logging_level(&config).unwrap_or(&cli.level));
            commands::run::run(&config).await
        }
    }
}
