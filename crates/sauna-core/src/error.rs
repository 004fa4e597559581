// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! Startup-time error kinds shared across the workspace: configuration
//! errors, collected dependency errors, and the combined failure a plugin
//! runs into during resolution.
//!
//! Per-crate errors further down the stack (`sauna_wire::ProtocolError`,
//! per-consumer `SendError`) live in their own crates; this module only
//! holds the kinds that are fatal at startup, shared by the resolver and
//! the registries.

/// An optional plugin's runtime dependency is unavailable.
///
/// In the original Python daemon this meant "import failed"; in a
/// statically compiled target it means "this feature was not built in" or
/// "a declared `extra_plugins` name is not registered". Collected across
/// all plugins so the operator sees every missing dependency at once
/// rather than one at a time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("plugin {plugin:?} unavailable: {reason}")]
pub struct DependencyError {
    pub plugin: String,
    pub reason: String,
}

impl DependencyError {
    pub fn new(plugin: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { plugin: plugin.into(), reason: reason.into() }
    }
}

/// A configuration-resolution failure: bad shape, unknown name, or a
/// duplicate. Fatal, surfaced to the operator before the daemon starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown plugin {0:?}")]
    UnknownPlugin(String),

    #[error("unknown check type {check_type:?} for plugin {plugin:?}")]
    UnknownCheckType { plugin: String, check_type: String },

    #[error("unknown consumer {0:?}")]
    UnknownConsumer(String),

    #[error("duplicate check name {0:?}")]
    DuplicateCheckName(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level startup failure: either a configuration problem or a batch of
/// collected dependency errors. `anyhow` wraps this at the CLI boundary;
/// everywhere below the CLI it is propagated as a typed `Result`.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{} missing dependencies:\n{}", .0.len(), format_dependency_errors(.0))]
    Dependencies(Vec<DependencyError>),
}

fn format_dependency_errors(errors: &[DependencyError]) -> String {
    errors.iter().map(|e| format!("  - {e}")).collect::<Vec<_>>().join("\n")
}

/// A push consumer's outbound delivery failed. Never fatal at the daemon
/// level; drives the per-consumer retry state machine in the fan-out
/// worker loop (§4.5).
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
