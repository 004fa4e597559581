// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! `HTTP` and `HTTP-icinga` push consumers. Grounded in
//! `sauna.consumers.ext.http.HTTPConsumer` and
//! `sauna.consumers.ext.http_icinga.HTTPIcingaConsumer`, reimplemented over
//! `reqwest` instead of `requests`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use sauna_core::{CheckParams, ConfigError, ConsumerMode, SendError, ServiceCheck};
use sauna_registry::{ConsumerFactory, ConsumerRegistry, PushConsumer};
use serde_json::{json, Value};

fn headers_from_params(params: &CheckParams) -> Result<HeaderMap, ConfigError> {
    let mut headers = HeaderMap::new();
    let Some(Value::Object(map)) = params.get("headers") else {
        return Ok(headers);
    };
    for (key, value) in map {
        let Some(value) = value.as_str() else {
            return Err(ConfigError::Invalid(format!("header {key:?} must be a string")));
        };
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|_| ConfigError::Invalid(format!("invalid header name {key:?}")))?;
        let value = HeaderValue::from_str(value).map_err(|_| ConfigError::Invalid(format!("invalid header value for {key:?}")))?;
        headers.insert(name, value);
    }
    Ok(headers)
}

fn timeout_from_params(params: &CheckParams) -> Duration {
    let seconds = params.get("timeout").and_then(Value::as_u64).unwrap_or(60);
    Duration::from_secs(seconds)
}

fn url_from_params(params: &CheckParams) -> String {
    params.get("url").and_then(Value::as_str).unwrap_or("http://localhost").to_string()
}

fn client(timeout: Duration, headers: HeaderMap) -> Result<reqwest::Client, ConfigError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .default_headers(headers)
        .build()
        .map_err(|e| ConfigError::Invalid(format!("failed to build HTTP client: {e}")))
}

struct HttpConsumer {
    url: String,
    client: reqwest::Client,
}

#[async_trait]
impl PushConsumer for HttpConsumer {
    async fn send(&self, check: &ServiceCheck) -> Result<(), SendError> {
        let body = json!({
            "timestamp": check.timestamp,
            "hostname": check.hostname,
            "service": check.name,
            "status": check.status.code(),
            "output": check.output,
        });
        let response = self.client.post(&self.url).json(&body).send().await.map_err(to_send_error)?;
        response.error_for_status().map_err(to_send_error)?;
        Ok(())
    }
}

struct HttpIcingaConsumer {
    url: String,
    client: reqwest::Client,
}

#[async_trait]
impl PushConsumer for HttpIcingaConsumer {
    async fn send(&self, check: &ServiceCheck) -> Result<(), SendError> {
        let body = json!({
            "filter": format!("host.name==\"{}\" && service.name==\"{}\"", check.hostname, check.name),
            "exit_status": check.status.code(),
            "plugin_output": check.output,
            "type": "Service",
        });
        let response = self.client.post(&self.url).json(&body).send().await.map_err(to_send_error)?;
        response.error_for_status().map_err(to_send_error)?;
        Ok(())
    }
}

fn to_send_error(err: reqwest::Error) -> SendError {
    if err.is_timeout() {
        SendError::Timeout(Duration::from_secs(0))
    } else {
        SendError::Other(err.to_string())
    }
}

fn build_http(params: &CheckParams) -> Result<Box<dyn PushConsumer>, ConfigError> {
    let client = client(timeout_from_params(params), headers_from_params(params)?)?;
    Ok(Box::new(HttpConsumer { url: url_from_params(params), client }))
}

fn build_http_icinga(params: &CheckParams) -> Result<Box<dyn PushConsumer>, ConfigError> {
    let client = client(timeout_from_params(params), headers_from_params(params)?)?;
    Ok(Box::new(HttpIcingaConsumer { url: url_from_params(params), client }))
}

pub fn register(registry: &mut ConsumerRegistry) -> Result<(), ConfigError> {
    registry.register("HTTP", ConsumerMode::Queued, ConsumerFactory::Push(build_http))?;
    registry.register("HTTP-icinga", ConsumerMode::Queued, ConsumerFactory::Push(build_http_icinga))?;
    Ok(())
}

#[cfg(test)]
#[path = "http_push_tests.rs"]
mod tests;
