// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! Resolves an `include` glob into a merged configuration document.
//!
//! Document loading (reading the file, parsing whatever format it's in) is
//! injected by the caller: this crate does not know or care that the CLI
//! happens to use `serde_yaml_ng`. Glob matches are sorted lexicographically
//! before merging, resolving spec's open question on include ordering in
//! favor of determinism (the original relies on filesystem iteration order).

use std::path::{Path, PathBuf};

use sauna_core::ConfigError;
use serde_json::Value;

use crate::merge::merge_value;

/// Expand `pattern`, sort matches lexicographically, load each with
/// `load_document`, and merge them into `base` in that order.
pub fn resolve_includes<F>(base: &mut Value, pattern: &str, mut load_document: F) -> Result<(), ConfigError>
where
    F: FnMut(&Path) -> Result<Value, ConfigError>,
{
    let mut paths: Vec<PathBuf> = glob::glob(pattern)
        .map_err(|e| ConfigError::Invalid(format!("bad include glob {pattern:?}: {e}")))?
        .filter_map(Result::ok)
        .collect();
    paths.sort();

    for path in paths {
        let document = load_document(&path)?;
        merge_value(base, document);
    }
    Ok(())
}

#[cfg(test)]
#[path = "include_tests.rs"]
mod tests;
