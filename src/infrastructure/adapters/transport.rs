//! Transport seam between use cases and the network

use crate::{domain::rpc::JsonRpcResponse, shared::error::AppResult};
use async_trait::async_trait;
use serde_json::Value;

/// Sends one JSON-RPC request to an endpoint and returns the decoded response.
///
/// Implementations fail only when no JSON-RPC response object could be
/// obtained. A response carrying an `error` member is still `Ok`.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    async fn send(&self, rpc_url: &str, method: &str, params: Value) -> AppResult<JsonRpcResponse>;
}
