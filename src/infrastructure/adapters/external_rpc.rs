//! External RPC adapter for communicating with JSON-RPC endpoints
//!
//! This adapter performs the HTTP POST for a single JSON-RPC call. Each call is
//! attempted exactly once.

use crate::{
    config::AppConfig,
    domain::rpc::{JsonRpcRequest, JsonRpcResponse},
    infrastructure::adapters::transport::RpcTransport,
    shared::{
        error::{AppError, AppResult},
        logging::LoggingUtils,
    },
};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, Instant};

/// Adapter for external JSON-RPC endpoints
#[derive(Debug, Clone)]
pub struct ExternalRpcAdapter {
    client: Client,
}

impl ExternalRpcAdapter {
    /// Create a new external RPC adapter
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        Self::with_timeout(Duration::from_secs(config.endpoint.timeout_seconds))
    }

    /// Create an adapter with an explicit per-request timeout
    pub fn with_timeout(timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    async fn post(&self, rpc_url: &str, request: &JsonRpcRequest) -> AppResult<JsonRpcResponse> {
        let response = self
            .client
            .post(rpc_url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Http {
                status: status.as_u16(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::Json(format!("Failed to parse response: {}", e)))?;

        JsonRpcResponse::from_value(body)
    }
}

#[async_trait]
impl RpcTransport for ExternalRpcAdapter {
    async fn send(&self, rpc_url: &str, method: &str, params: Value) -> AppResult<JsonRpcResponse> {
        LoggingUtils::log_request(rpc_url, method, &params);

        let request = JsonRpcRequest::new(method, params, Some(JsonRpcRequest::timestamp_id()));
        let started = Instant::now();
        let result = self.post(rpc_url, &request).await;
        let duration_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(_) => LoggingUtils::log_success(method, duration_ms),
            Err(e) => LoggingUtils::log_error(method, e, duration_ms),
        }

        result
    }
}
