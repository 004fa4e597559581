// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! NSCA v3 wire protocol: fixed-size binary framing, CRC32 integrity,
//! XOR encryption, and last-known-good address failover.
//!
//! Bit-exact with the original `sauna.consumers.ext.nsca` module: same
//! struct layout (`!128sL` init packet, `!hhIIh64s128s4096sh` service
//! packet), same CRC32-over-zeroed-field scheme, same cyclic-XOR order
//! (IV first, then key).

pub mod codec;
pub mod failover;

pub use codec::{
    decode_init_payload, decode_service_payload, encode_service_payload, encrypt, verify_crc,
    xor_cycled, InitPayload, ProtocolError, ServicePayload, INIT_PAYLOAD_SIZE, MAX_HOSTNAME_SIZE,
    MAX_OUTPUT_SIZE, MAX_SERVICE_SIZE, PROTOCOL_VERSION, SERVICE_PAYLOAD_SIZE,
};
pub use failover::{order_addresses_mru, send_with_failover};
