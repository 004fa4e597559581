// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! `TCPServer` pull consumer: writes the overall status to every connected
//! client, once on accept and again whenever a line is received. Grounded
//! in `sauna.consumers.ext.tcp_server.TCPServerConsumer`; the original's
//! manual `select()` reactor and per-socket write buffers are replaced by
//! one spawned task per connection, in the same accept-and-spawn idiom as
//! the teacher's `Listener::run_dual`.

use std::time::Duration;

use async_trait::async_trait;
use sauna_core::{CheckParams, ConfigError, ConsumerMode, SendError};
use sauna_registry::{ConsumerFactory, ConsumerRegistry, PullConsumer};
use sauna_store::ResultStore;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio_util::sync::CancellationToken;

const KEEPALIVE_IDLE: Duration = Duration::from_secs(30);
const KEEPALIVE_INTERVAL: Duration = Duration::from_secs(10);
const KEEPALIVE_RETRIES: u32 = 5;
/// Fixed regardless of configuration; the original read the listen port
/// value a second time for its backlog instead of a dedicated setting.
const LISTEN_BACKLOG: i32 = 128;

fn bind_listener(port: u16) -> std::io::Result<TcpListener> {
    let address: std::net::SocketAddr = ([0, 0, 0, 0], port).into();
    let socket = socket2::Socket::new(socket2::Domain::IPV4, socket2::Type::STREAM, Some(socket2::Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    socket.bind(&address.into())?;
    socket.listen(LISTEN_BACKLOG)?;
    socket.set_nonblocking(true)?;
    TcpListener::from_std(socket.into())
}

struct TcpServerConsumer {
    port: u16,
    keepalive: bool,
}

fn status_line(store: &ResultStore) -> Vec<u8> {
    format!("{}\n", store.overall()).into_bytes()
}

fn apply_keepalive(stream: &TcpStream) -> std::io::Result<()> {
    let socket = socket2::SockRef::from(stream);
    let keepalive = socket2::TcpKeepalive::new()
        .with_time(KEEPALIVE_IDLE)
        .with_interval(KEEPALIVE_INTERVAL)
        .with_retries(KEEPALIVE_RETRIES);
    socket.set_tcp_keepalive(&keepalive)
}

async fn handle_connection(stream: TcpStream, store: ResultStore, shutdown: CancellationToken) -> std::io::Result<()> {
    let (read_half, mut write_half) = tokio::io::split(stream);
    write_half.write_all(&status_line(&store)).await?;

    let mut reader = BufReader::new(read_half);
    loop {
        let mut line = String::new();
        tokio::select! {
            _ = shutdown.cancelled() => return write_half.shutdown().await,
            read = reader.read_line(&mut line) => {
                let n = read?;
                if n == 0 {
                    return Ok(());
                }
                write_half.write_all(&status_line(&store)).await?;
            }
        }
    }
}

#[async_trait]
impl PullConsumer for TcpServerConsumer {
    async fn run(self: Box<Self>, store: ResultStore, shutdown: CancellationToken) -> Result<(), SendError> {
        let listener = bind_listener(self.port)?;
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => return Ok(()),
                accepted = listener.accept() => {
                    match accepted {
                        Ok((stream, addr)) => {
                            if self.keepalive {
                                if let Err(e) = apply_keepalive(&stream) {
                                    tracing::warn!(%addr, error = %e, "failed to set TCP keepalive");
                                }
                            }
                            let store = store.clone();
                            let shutdown = shutdown.clone();
                            tokio::spawn(async move {
                                if let Err(e) = handle_connection(stream, store, shutdown).await {
                                    tracing::debug!(%addr, error = %e, "TCP status connection closed");
                                }
                            });
                        }
                        Err(e) => tracing::warn!(error = %e, "TCP accept error"),
                    }
                }
            }
        }
    }
}

fn build(params: &CheckParams) -> Result<Box<dyn PullConsumer>, ConfigError> {
    let port = params.get("port").and_then(Value::as_u64).unwrap_or(5555) as u16;
    let keepalive = params.get("keepalive").and_then(Value::as_bool).unwrap_or(true);
    Ok(Box::new(TcpServerConsumer { port, keepalive }))
}

pub fn register(registry: &mut ConsumerRegistry) -> Result<(), ConfigError> {
    registry.register("TCPServer", ConsumerMode::Pull, ConsumerFactory::Pull(build))
}

#[cfg(test)]
#[path = "tcp_server_tests.rs"]
mod tests;
