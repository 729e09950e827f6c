//! JSON-RPC 2.0 wire types

use crate::shared::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const JSONRPC_VERSION: &str = "2.0";

fn default_jsonrpc_version() -> String {
    JSONRPC_VERSION.to_string()
}

/// Outgoing JSON-RPC request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// JSON-RPC version
    #[serde(default = "default_jsonrpc_version")]
    pub jsonrpc: String,

    /// Method name
    pub method: String,

    /// Parameters
    pub params: Value,

    /// Request ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

impl JsonRpcRequest {
    /// Create a new request
    pub fn new(method: impl Into<String>, params: Value, id: Option<u64>) -> Self {
        Self {
            jsonrpc: default_jsonrpc_version(),
            method: method.into(),
            params,
            id,
        }
    }

    /// Request id derived from the current wall clock in milliseconds
    pub fn timestamp_id() -> u64 {
        chrono::Utc::now().timestamp_millis().max(0) as u64
    }
}

/// JSON-RPC response body exactly as received from an endpoint. Immutable once
/// received; serializes back to the same object, unknown members included.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct JsonRpcResponse {
    body: Map<String, Value>,
}

/// JSON-RPC error object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// Error code
    pub code: i64,

    /// Error message
    pub message: String,

    /// Additional error data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    /// Create a successful response
    pub fn success(result: Value, id: Option<Value>) -> Self {
        Self::with_member("result", result, id)
    }

    /// Create an error response
    pub fn failure(error: JsonRpcError, id: Option<Value>) -> Self {
        let mut member = Map::new();
        member.insert("code".to_string(), Value::from(error.code));
        member.insert("message".to_string(), Value::from(error.message));
        if let Some(data) = error.data {
            member.insert("data".to_string(), data);
        }
        Self::with_member("error", Value::Object(member), id)
    }

    fn with_member(key: &str, value: Value, id: Option<Value>) -> Self {
        let mut body = Map::new();
        body.insert("jsonrpc".to_string(), Value::from(JSONRPC_VERSION));
        if let Some(id) = id {
            body.insert("id".to_string(), id);
        }
        body.insert(key.to_string(), value);
        Self { body }
    }

    /// Build a response from a decoded body. Only JSON objects qualify; their
    /// members are kept untouched.
    pub fn from_value(body: Value) -> AppResult<Self> {
        match body {
            Value::Object(body) => Ok(Self { body }),
            other => Err(AppError::InvalidResponse(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// The body as received
    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    /// Request id echoed by the endpoint
    pub fn id(&self) -> Option<&Value> {
        self.body.get("id")
    }

    /// The non-null result, if any
    pub fn result(&self) -> Option<&Value> {
        self.body.get("result").filter(|v| !v.is_null())
    }

    /// Whether the body carries `"result": null` explicitly, as opposed to no
    /// `result` member at all
    pub fn has_null_result(&self) -> bool {
        matches!(self.body.get("result"), Some(Value::Null))
    }

    /// The `error` member, whatever its shape
    pub fn error(&self) -> Option<&Value> {
        self.body.get("error").filter(|v| !v.is_null())
    }

    /// The `error` member decoded as a JSON-RPC error object; `None` when it is
    /// absent or does not have the standard shape
    pub fn rpc_error(&self) -> Option<JsonRpcError> {
        self.error()
            .and_then(|error| serde_json::from_value(error.clone()).ok())
    }
}

impl JsonRpcError {
    /// Create a new error object
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
