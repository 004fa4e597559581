// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! Tagged union carried on each per-consumer queue. The shutdown sentinel
//! rides the same queue as real items so a worker parked on `recv()` wakes
//! up without a separate signalling path.

use sauna_core::ServiceCheck;

#[derive(Debug, Clone)]
pub enum ConsumerMessage {
    Check(ServiceCheck),
    Shutdown,
}
