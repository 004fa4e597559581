// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! Last-known-good address ordering for NSCA's multi-address failover.
//!
//! Pure and I/O-free: the actual socket connect/send loop lives in the NSCA
//! consumer, which calls [`order_addresses_mru`] to decide try order and
//! reports back whichever address it wants remembered as "good".

use crate::codec::ProtocolError;

/// Reorder `addresses` so the last-known-good one (if still present) tries
/// first, preserving relative order of the rest.
pub fn order_addresses_mru(addresses: &[String], last_good: Option<&str>) -> Vec<String> {
    let Some(last_good) = last_good else {
        return addresses.to_vec();
    };
    match addresses.iter().position(|addr| addr == last_good) {
        None => addresses.to_vec(),
        Some(pos) => {
            let mut ordered = vec![addresses[pos].clone()];
            ordered.extend(addresses.iter().enumerate().filter(|(i, _)| *i != pos).map(|(_, a)| a.clone()));
            ordered
        }
    }
}

/// Try each address in MRU order via `try_address`, stopping at the first
/// success and updating `last_good` to match. Returns
/// [`ProtocolError::AllReceiversFailed`] if every address failed.
pub fn send_with_failover<F>(
    addresses: &[String],
    last_good: &mut Option<String>,
    mut try_address: F,
) -> Result<(), ProtocolError>
where
    F: FnMut(&str) -> bool,
{
    for addr in order_addresses_mru(addresses, last_good.as_deref()) {
        if try_address(&addr) {
            *last_good = Some(addr);
            return Ok(());
        }
    }
    Err(ProtocolError::AllReceiversFailed)
}

#[cfg(test)]
#[path = "failover_tests.rs"]
mod tests;
