//! Common test utilities and mock implementations
//!
//! This module provides a scripted transport shared by the test modules.

use crate::{
    domain::rpc::JsonRpcResponse,
    infrastructure::adapters::RpcTransport,
    shared::error::{AppError, AppResult},
};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Barrier;

/// What the mock does when a method is called
#[derive(Clone)]
pub enum Reply {
    /// Answer with this response body
    Body(Value),
    /// Fail the call with this error
    Fail(AppError),
    /// Never answer
    Hang,
}

/// Mock transport answering each method from a script
pub struct MockTransport {
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<(String, String, Value)>>,
    barrier: Option<Arc<Barrier>>,
}

impl MockTransport {
    /// Create a mock with no scripted methods
    pub fn new() -> Self {
        Self {
            replies: HashMap::new(),
            calls: Mutex::new(Vec::new()),
            barrier: None,
        }
    }

    /// Script a reply for a method
    pub fn on(mut self, method: &str, reply: Reply) -> Self {
        self.replies.insert(method.to_string(), reply);
        self
    }

    /// Script a successful result for a method
    pub fn result(self, method: &str, result: Value) -> Self {
        self.on(
            method,
            Reply::Body(serde_json::json!({"jsonrpc": "2.0", "id": 1, "result": result})),
        )
    }

    /// Hold every call until `parties` calls are in flight together
    pub fn rendezvous(mut self, parties: usize) -> Self {
        self.barrier = Some(Arc::new(Barrier::new(parties)));
        self
    }

    /// Calls observed so far as (url, method, params)
    pub fn calls(&self) -> Vec<(String, String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RpcTransport for MockTransport {
    async fn send(&self, rpc_url: &str, method: &str, params: Value) -> AppResult<JsonRpcResponse> {
        self.calls
            .lock()
            .unwrap()
            .push((rpc_url.to_string(), method.to_string(), params));

        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }

        match self.replies.get(method).cloned() {
            Some(Reply::Body(body)) => JsonRpcResponse::from_value(body),
            Some(Reply::Fail(error)) => Err(error),
            Some(Reply::Hang) => std::future::pending().await,
            None => Err(AppError::Transport(format!("no reply scripted for {}", method))),
        }
    }
}

/// A mock that answers all four health probes
pub fn healthy_node(genesis: Value) -> MockTransport {
    MockTransport::new()
        .result("eth_blockNumber", serde_json::json!("0x13a1f3b"))
        .result("eth_chainId", serde_json::json!("0x89"))
        .result("eth_gasPrice", serde_json::json!("0x6fc23ac00"))
        .result("eth_getBlockByNumber", genesis)
}
