// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! `HTTPServer` pull consumer: serves the result store as JSON or HTML over
//! a hand-rolled HTTP/1.1 request line parser. Grounded in
//! `sauna.consumers.ext.http_server.HTTPServerConsumer`, with request
//! dispatch modeled on the accept-and-spawn loop of the teacher's own
//! `Listener::run_dual`.

use async_trait::async_trait;
use sauna_core::{CheckParams, ConfigError, ConsumerMode, SendError};
use sauna_registry::{ConsumerFactory, ConsumerRegistry, PullConsumer};
use sauna_store::ResultStore;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio_util::sync::CancellationToken;

const SERVER_HEADER: &str = concat!("sauna-rs/", env!("CARGO_PKG_VERSION"));

struct HttpServerConsumer {
    address: String,
    port: u16,
    html: bool,
}

fn render_json(store: &ResultStore) -> String {
    let overall = store.overall();
    json!({
        "status": overall,
        "code": overall.code(),
        "checks": store.snapshot(),
    })
    .to_string()
}

fn render_html(store: &ResultStore) -> String {
    let overall = store.overall();
    let mut rows = String::new();
    let mut names: Vec<_> = store.snapshot().into_iter().collect();
    names.sort_by(|a, b| a.0.cmp(&b.0));
    for (name, summary) in names {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            html_escape::encode_text(&name),
            summary.status,
            html_escape::encode_text(&summary.output),
        ));
    }
    format!(
        "<!DOCTYPE html><html><head><title>sauna</title></head><body>\n\
         <h1>{overall}</h1>\n\
         <table><thead><tr><th>check</th><th>status</th><th>output</th></tr></thead>\n\
         <tbody>\n{rows}</tbody></table>\n</body></html>\n"
    )
}

fn render_error(message: &str) -> String {
    json!({ "error": message }).to_string()
}

async fn read_request_line(reader: &mut BufReader<tokio::io::ReadHalf<TcpStream>>) -> std::io::Result<(String, String)> {
    let mut line = String::new();
    reader.read_line(&mut line).await?;
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let path = parts.next().unwrap_or("/").to_string();
    loop {
        let mut header_line = String::new();
        let n = reader.read_line(&mut header_line).await?;
        if n == 0 || header_line == "\r\n" || header_line == "\n" {
            break;
        }
    }
    Ok((method, path))
}

async fn handle_connection(stream: TcpStream, store: &ResultStore, html: bool) -> std::io::Result<()> {
    let (read_half, mut write_half) = tokio::io::split(stream);
    let mut reader = BufReader::new(read_half);
    let (method, path) = read_request_line(&mut reader).await?;

    let (status_line, content_type, body) = if method != "GET" && method != "HEAD" {
        ("405 Method Not Allowed", "application/json", render_error("method not allowed"))
    } else if path != "/" {
        ("404 Not Found", "application/json", render_error("Resource not found"))
    } else if html {
        ("200 OK", "text/html; charset=utf-8", render_html(store))
    } else {
        ("200 OK", "application/json", render_json(store))
    };

    let header = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nServer: {SERVER_HEADER}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    write_half.write_all(header.as_bytes()).await?;
    if method != "HEAD" {
        write_half.write_all(body.as_bytes()).await?;
    }
    write_half.shutdown().await
}

#[async_trait]
impl PullConsumer for HttpServerConsumer {
    async fn run(self: Box<Self>, store: ResultStore, shutdown: CancellationToken) -> Result<(), SendError> {
        let listener = TcpListener::bind((self.address.as_str(), self.port)).await?;
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => return Ok(()),
                accepted = listener.accept() => {
                    match accepted {
                        Ok((stream, addr)) => {
                            let store = store.clone();
                            let html = self.html;
                            tokio::spawn(async move {
                                if let Err(e) = handle_connection(stream, &store, html).await {
                                    tracing::debug!(%addr, error = %e, "HTTP status connection closed");
                                }
                            });
                        }
                        Err(e) => tracing::warn!(error = %e, "HTTP accept error"),
                    }
                }
            }
        }
    }
}

fn build(params: &CheckParams) -> Result<Box<dyn PullConsumer>, ConfigError> {
    let address = params.get("address").and_then(Value::as_str).unwrap_or("0.0.0.0").to_string();
    let port = params.get("port").and_then(Value::as_u64).unwrap_or(8080) as u16;
    let html = matches!(params.get("format").and_then(Value::as_str), Some("html"));
    Ok(Box::new(HttpServerConsumer { address, port, html }))
}

pub fn register(registry: &mut ConsumerRegistry) -> Result<(), ConfigError> {
    registry.register("HTTPServer", ConsumerMode::Pull, ConsumerFactory::Pull(build))
}

#[cfg(test)]
#[path = "http_server_tests.rs"]
mod tests;
