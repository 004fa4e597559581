// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! `NSCA` push consumer: sends check results to an NSCA receiver using the
//! wire framing and failover ordering from `sauna-wire`. Grounded in
//! `sauna.consumers.ext.nsca.NSCAConsumer`.

use std::time::Duration;

use async_trait::async_trait;
use sauna_core::{CheckParams, ConfigError, ConsumerMode, SendError, ServiceCheck};
use sauna_registry::{ConsumerFactory, ConsumerRegistry, PushConsumer};
use sauna_wire::{decode_init_payload, encode_service_payload, encrypt, order_addresses_mru, ServicePayload, INIT_PAYLOAD_SIZE};
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::Mutex as AsyncMutex;

struct NscaConsumer {
    server: String,
    port: u16,
    timeout: Duration,
    encryption: u8,
    key: Vec<u8>,
    /// Touched only by this consumer's own worker task (single consumer per queue).
    last_good: AsyncMutex<Option<String>>,
}

impl NscaConsumer {
    async fn resolve_addresses(&self) -> Result<Vec<String>, SendError> {
        let addrs = tokio::net::lookup_host((self.server.as_str(), self.port)).await?;
        let mut seen = Vec::new();
        for addr in addrs {
            let ip = addr.ip().to_string();
            if !seen.contains(&ip) {
                seen.push(ip);
            }
        }
        Ok(seen)
    }

    async fn send_to_receiver(&self, address: &str, encoded: &[u8]) -> Result<(), SendError> {
        let stream = tokio::time::timeout(self.timeout, TcpStream::connect((address, self.port)))
            .await
            .map_err(|_| SendError::Timeout(self.timeout))??;
        let mut stream = stream;

        let mut init_buf = [0u8; INIT_PAYLOAD_SIZE];
        tokio::time::timeout(self.timeout, stream.read_exact(&mut init_buf))
            .await
            .map_err(|_| SendError::Timeout(self.timeout))??;
        let init = decode_init_payload(&init_buf).map_err(|e| SendError::Other(e.to_string()))?;

        let ciphertext = encrypt(self.encryption, encoded, &init.iv, &self.key).map_err(|e| SendError::Other(e.to_string()))?;
        tokio::time::timeout(self.timeout, stream.write_all(&ciphertext))
            .await
            .map_err(|_| SendError::Timeout(self.timeout))??;
        Ok(())
    }
}

#[async_trait]
impl PushConsumer for NscaConsumer {
    async fn send(&self, check: &ServiceCheck) -> Result<(), SendError> {
        let payload = ServicePayload::from_service_check(check).map_err(|e| SendError::Other(e.to_string()))?;
        let encoded = encode_service_payload(&payload);

        let addresses = self.resolve_addresses().await?;
        let last_good = self.last_good.lock().await.clone();
        let ordered = order_addresses_mru(&addresses, last_good.as_deref());

        for address in ordered {
            match self.send_to_receiver(&address, &encoded).await {
                Ok(()) => {
                    *self.last_good.lock().await = Some(address);
                    return Ok(());
                }
                Err(e) => {
                    tracing::info!(address = %address, error = %e, "NSCA receiver did not accept the check");
                }
            }
        }
        Err(SendError::Other("no receiver accepted the check".to_string()))
    }
}

fn build(params: &CheckParams) -> Result<Box<dyn PushConsumer>, ConfigError> {
    let server = params.get("server").and_then(Value::as_str).unwrap_or("localhost").to_string();
    let port = params.get("port").and_then(Value::as_u64).unwrap_or(5667) as u16;
    let timeout = Duration::from_secs(params.get("timeout").and_then(Value::as_u64).unwrap_or(10));
    let encryption = params.get("encryption").and_then(Value::as_u64).unwrap_or(0) as u8;
    let key = params.get("key").and_then(Value::as_str).unwrap_or("").as_bytes().to_vec();
    Ok(Box::new(NscaConsumer { server, port, timeout, encryption, key, last_good: AsyncMutex::new(None) }))
}

pub fn register(registry: &mut ConsumerRegistry) -> Result<(), ConfigError> {
    registry.register("NSCA", ConsumerMode::Queued, ConsumerFactory::Push(build))
}

#[cfg(test)]
#[path = "nsca_tests.rs"]
mod tests;
