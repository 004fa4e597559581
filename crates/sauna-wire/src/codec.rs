// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! Fixed-size big-endian framing for the NSCA init and service packets,
//! plus CRC32 and XOR encryption.

use sauna_core::ServiceCheck;

pub const PROTOCOL_VERSION: i16 = 3;
/// Field width; one byte must remain zero, so the usable length is one less.
pub const MAX_HOSTNAME_SIZE: usize = 64;
pub const MAX_SERVICE_SIZE: usize = 128;
pub const MAX_OUTPUT_SIZE: usize = 4096;

/// `!128sL`: 128-byte IV + 4-byte big-endian timestamp.
pub const INIT_PAYLOAD_SIZE: usize = 128 + 4;

/// `!hhIIh64s128s4096sh`: version, pad, crc32, timestamp, status, hostname,
/// service, output, pad.
pub const SERVICE_PAYLOAD_SIZE: usize =
    2 + 2 + 4 + 4 + 2 + MAX_HOSTNAME_SIZE + MAX_SERVICE_SIZE + MAX_OUTPUT_SIZE + 2;

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("NSCA hostnames can be up to {} characters", MAX_HOSTNAME_SIZE - 1)]
    HostnameTooLong,

    #[error("NSCA service names can be up to {} characters", MAX_SERVICE_SIZE - 1)]
    ServiceNameTooLong,

    #[error("encryption mode not supported")]
    EncryptionModeNotSupported,

    #[error("incomplete init packet: expected {expected} bytes, got {got}")]
    IncompleteInitPacket { expected: usize, got: usize },

    #[error("no receiver accepted the check")]
    AllReceiversFailed,
}

/// The server-sent init packet: a per-connection IV and the server's clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitPayload {
    pub iv: [u8; 128],
    pub timestamp: u32,
}

/// Decode a fixed `INIT_PAYLOAD_SIZE`-byte buffer into its IV and timestamp.
pub fn decode_init_payload(buf: &[u8]) -> Result<InitPayload, ProtocolError> {
    if buf.len() != INIT_PAYLOAD_SIZE {
        return Err(ProtocolError::IncompleteInitPacket { expected: INIT_PAYLOAD_SIZE, got: buf.len() });
    }
    let mut iv = [0u8; 128];
    iv.copy_from_slice(&buf[..128]);
    let timestamp = u32::from_be_bytes(buf[128..132].try_into().expect("slice is 4 bytes"));
    Ok(InitPayload { iv, timestamp })
}

/// A decoded NSCA service payload, as produced by [`encode_service_payload`]
/// and consumed by a receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicePayload {
    pub timestamp: u32,
    pub status: i16,
    pub hostname: String,
    pub service: String,
    pub output: String,
}

impl ServicePayload {
    /// Build a payload from a `ServiceCheck`, truncating `output` to
    /// `MAX_OUTPUT_SIZE - 1` bytes and rejecting oversize hostname/service.
    pub fn from_service_check(check: &ServiceCheck) -> Result<Self, ProtocolError> {
        if check.hostname.len() > MAX_HOSTNAME_SIZE - 1 {
            return Err(ProtocolError::HostnameTooLong);
        }
        if check.name.len() > MAX_SERVICE_SIZE - 1 {
            return Err(ProtocolError::ServiceNameTooLong);
        }
        let mut output = check.output.clone();
        if output.len() > MAX_OUTPUT_SIZE - 1 {
            output.truncate(MAX_OUTPUT_SIZE - 1);
        }
        Ok(Self {
            timestamp: check.timestamp as u32,
            status: check.status.code(),
            hostname: check.hostname.clone(),
            service: check.name.clone(),
            output,
        })
    }
}

fn write_null_padded(buf: &mut Vec<u8>, s: &str, width: usize) {
    let bytes = s.as_bytes();
    buf.extend_from_slice(bytes);
    buf.resize(buf.len() + (width - bytes.len()), 0);
}

/// Pack a `ServicePayload` into its `SERVICE_PAYLOAD_SIZE`-byte wire form,
/// computing CRC32 over the packet with the `crc32` field zeroed and then
/// writing the result back into that field.
pub fn encode_service_payload(payload: &ServicePayload) -> Vec<u8> {
    let mut buf = Vec::with_capacity(SERVICE_PAYLOAD_SIZE);
    buf.extend_from_slice(&PROTOCOL_VERSION.to_be_bytes());
    buf.extend_from_slice(&0i16.to_be_bytes()); // pad0
    buf.extend_from_slice(&0u32.to_be_bytes()); // crc32 placeholder
    buf.extend_from_slice(&payload.timestamp.to_be_bytes());
    buf.extend_from_slice(&payload.status.to_be_bytes());
    write_null_padded(&mut buf, &payload.hostname, MAX_HOSTNAME_SIZE);
    write_null_padded(&mut buf, &payload.service, MAX_SERVICE_SIZE);
    write_null_padded(&mut buf, &payload.output, MAX_OUTPUT_SIZE);
    buf.extend_from_slice(&0i16.to_be_bytes()); // pad1
    debug_assert_eq!(buf.len(), SERVICE_PAYLOAD_SIZE);

    let crc = crc32fast::hash(&buf);
    buf[4..8].copy_from_slice(&crc.to_be_bytes());
    buf
}

/// Decode a `SERVICE_PAYLOAD_SIZE`-byte buffer back into a `ServicePayload`,
/// ignoring the version/pad/crc fields (CRC verification is the caller's
/// job, since it must happen before this call consumes the buffer).
pub fn decode_service_payload(buf: &[u8]) -> Option<ServicePayload> {
    if buf.len() != SERVICE_PAYLOAD_SIZE {
        return None;
    }
    let timestamp = u32::from_be_bytes(buf[8..12].try_into().ok()?);
    let status = i16::from_be_bytes(buf[12..14].try_into().ok()?);
    let hostname_start = 14;
    let service_start = hostname_start + MAX_HOSTNAME_SIZE;
    let output_start = service_start + MAX_SERVICE_SIZE;
    let output_end = output_start + MAX_OUTPUT_SIZE;
    let hostname = read_null_padded(&buf[hostname_start..service_start]);
    let service = read_null_padded(&buf[service_start..output_start]);
    let output = read_null_padded(&buf[output_start..output_end]);
    Some(ServicePayload { timestamp, status, hostname, service, output })
}

fn read_null_padded(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}

/// Verify that zeroing the `crc32` field and recomputing CRC32 over the
/// packet reproduces the value stored in it.
pub fn verify_crc(buf: &[u8]) -> bool {
    if buf.len() != SERVICE_PAYLOAD_SIZE {
        return false;
    }
    let stored = u32::from_be_bytes(buf[4..8].try_into().expect("4 bytes"));
    let mut zeroed = buf.to_vec();
    zeroed[4..8].copy_from_slice(&0u32.to_be_bytes());
    crc32fast::hash(&zeroed) == stored
}

/// Repeated XOR: first XOR `data` with `iv` (cycled), then XOR the result
/// with `key` (cycled). Self-inverse for a given `(iv, key)` pair.
pub fn xor_cycled(data: &[u8], iv: &[u8], key: &[u8]) -> Vec<u8> {
    let after_iv: Vec<u8> =
        data.iter().zip(iv.iter().cycle()).map(|(&byte, &pad)| byte ^ pad).collect();
    after_iv.iter().zip(key.iter().cycle()).map(|(&byte, &pad)| byte ^ pad).collect()
}

/// Apply the configured encryption mode. `0` is identity, `1` is
/// [`xor_cycled`]; any other mode is a configuration error.
pub fn encrypt(mode: u8, data: &[u8], iv: &[u8], key: &[u8]) -> Result<Vec<u8>, ProtocolError> {
    match mode {
        0 => Ok(data.to_vec()),
        1 => Ok(xor_cycled(data, iv, key)),
        _ => Err(ProtocolError::EncryptionModeNotSupported),
    }
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
