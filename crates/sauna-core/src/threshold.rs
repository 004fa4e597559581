// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! Threshold parsing and evaluation for `warn`/`crit` check parameters.
//!
//! Grounded in the original `sauna.plugins.human_to_bytes` /
//! `bytes_to_human` / `Plugin._strip_percent_sign`: thresholds are plain
//! integers, human byte sizes (`5M`, `1.5G`, base 1024), or percent
//! strings (`"80%"`).

use std::fmt;
use std::str::FromStr;

use crate::status::Status;

const BYTE_SYMBOLS: [char; 8] = ['K', 'M', 'G', 'T', 'P', 'E', 'Z', 'Y'];

/// A parsed `warn`/`crit` threshold value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    Count(f64),
    Bytes(i64),
    Percent(f64),
}

impl Threshold {
    /// Numeric value for comparison against a measured quantity.
    pub fn value(self) -> f64 {
        match self {
            Threshold::Count(v) => v,
            Threshold::Bytes(v) => v as f64,
            Threshold::Percent(v) => v,
        }
    }
}

/// Error returned when a threshold string cannot be parsed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid threshold value: {0:?}")]
pub struct ThresholdParseError(pub String);

impl FromStr for Threshold {
    type Err = ThresholdParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if let Some(stripped) = raw.strip_suffix('%') {
            return stripped
                .trim()
                .parse::<f64>()
                .map(Threshold::Percent)
                .map_err(|_| ThresholdParseError(raw.to_string()));
        }
        if let Some(last) = raw.chars().last() {
            let symbol = last.to_ascii_uppercase();
            if BYTE_SYMBOLS.contains(&symbol) {
                return parse_human_bytes(raw)
                    .map(Threshold::Bytes)
                    .ok_or_else(|| ThresholdParseError(raw.to_string()));
            }
        }
        raw.parse::<f64>()
            .map(Threshold::Count)
            .map_err(|_| ThresholdParseError(raw.to_string()))
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::Count(v) => write!(f, "{v}"),
            Threshold::Bytes(v) => write!(f, "{}", format_human_bytes(*v)),
            Threshold::Percent(v) => write!(f, "{v}%"),
        }
    }
}

/// Parse a human byte size like `"5M"` or `"1.5G"` into a byte count.
///
/// Base 1024, symbols `K..Y`. Returns `None` for unrecognized input.
pub fn parse_human_bytes(size: &str) -> Option<i64> {
    let size = size.trim();
    let last = size.chars().last()?;
    let symbol = last.to_ascii_uppercase();
    let index = BYTE_SYMBOLS.iter().position(|&s| s == symbol)?;
    let number_part = &size[..size.len() - last.len_utf8()];
    let base: f64 = number_part.trim().parse().ok()?;
    let multiplier = 1024f64.powi(index as i32 + 1);
    Some((base * multiplier) as i64)
}

/// Format a byte count as a human size, e.g. `5_242_880 -> "5.0M"`.
///
/// Mirrors `sauna.plugins.bytes_to_human`: the largest symbol whose
/// multiplier fits is used; plain byte counts are suffixed with `B`.
pub fn format_human_bytes(n: i64) -> String {
    for (index, symbol) in BYTE_SYMBOLS.iter().enumerate().rev() {
        let multiplier = 1024f64.powi(index as i32 + 1);
        if (n as f64) >= multiplier {
            return format!("{:.1}{}", n as f64 / multiplier, symbol);
        }
    }
    format!("{n}B")
}

/// Strip a trailing `%` (if present) and parse the remainder as an integer,
/// mirroring `Plugin._strip_percent_sign`.
pub fn strip_percent_sign(value: &str) -> Option<i64> {
    let value = value.trim();
    if let Ok(n) = value.parse::<i64>() {
        return Some(n);
    }
    value.split('%').next()?.trim().parse().ok()
}

/// Evaluate a measured `value` against thresholds where *more* is worse
/// (e.g. load average, memory used): `value >= crit -> Crit`,
/// `value >= warn -> Warn`, else `Ok`.
pub fn evaluate_value_more_is_worse(value: f64, warn: Threshold, crit: Threshold) -> Status {
    if value >= crit.value() {
        Status::Crit
    } else if value >= warn.value() {
        Status::Warn
    } else {
        Status::Ok
    }
}

/// Evaluate a measured `value` against thresholds where *less* is worse
/// (e.g. free disk space, free memory): `value <= crit -> Crit`,
/// `value <= warn -> Warn`, else `Ok`.
pub fn evaluate_value_less_is_worse(value: f64, warn: Threshold, crit: Threshold) -> Status {
    if value <= crit.value() {
        Status::Crit
    } else if value <= warn.value() {
        Status::Warn
    } else {
        Status::Ok
    }
}

#[cfg(test)]
#[path = "threshold_tests.rs"]
mod tests;
