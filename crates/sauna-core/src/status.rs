// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! Status codes and their severity ordering.

use std::fmt;

/// Outcome of a single check.
///
/// Ordered by severity for fan-in reduction: `OK < Unknown < Warn < Crit`.
/// `Unknown` sits between `OK` and `Warn` — it means "ran but could not
/// decide", which is less alarming than a confirmed warning but more
/// alarming than a clean result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Ok,
    Unknown,
    Warn,
    Crit,
}

impl Status {
    /// Integer code matching the wire protocol (`OK=0, WARN=1, CRIT=2, UNKNOWN=3`).
    pub fn code(self) -> i16 {
        match self {
            Status::Ok => 0,
            Status::Warn => 1,
            Status::Crit => 2,
            Status::Unknown => 3,
        }
    }

    /// Decode a wire status code, defaulting to `Unknown` for anything else.
    pub fn from_code(code: i16) -> Status {
        match code {
            0 => Status::Ok,
            1 => Status::Warn,
            2 => Status::Crit,
            _ => Status::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warn => "WARNING",
            Status::Crit => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl serde::Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        match raw.as_str() {
            "OK" => Ok(Status::Ok),
            "WARNING" => Ok(Status::Warn),
            "CRITICAL" => Ok(Status::Crit),
            "UNKNOWN" => Ok(Status::Unknown),
            other => Err(serde::de::Error::custom(format!("unrecognized status {other:?}"))),
        }
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
