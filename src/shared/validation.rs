//! Validation utilities module
//!
//! Input checks for what the operator types: endpoint URLs, method names and
//! parameter text. Method names are not checked against any schema.

use crate::shared::error::{AppError, AppResult};
use serde_json::Value;

/// Validation utilities for the application
pub struct ValidationUtils;

impl ValidationUtils {
    /// Validate an endpoint URL
    pub fn validate_rpc_url(url: &str) -> AppResult<()> {
        if url.trim().is_empty() {
            return Err(AppError::Validation("RPC URL cannot be empty".to_string()));
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AppError::Validation(
                "RPC URL must start with http:// or https://".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate a JSON-RPC method name
    pub fn validate_method_name(method: &str) -> AppResult<()> {
        if method.trim().is_empty() {
            return Err(AppError::Validation("Method name cannot be empty".to_string()));
        }

        Ok(())
    }

    /// Parse the params text of a request; blank text means no params
    pub fn parse_params(text: &str) -> AppResult<Value> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Value::Array(vec![]));
        }

        let params: Value = serde_json::from_str(text)
            .map_err(|e| AppError::Validation(format!("Params are not valid JSON: {}", e)))?;

        match params {
            Value::Array(_) | Value::Object(_) => Ok(params),
            other => Err(AppError::Validation(format!(
                "Params must be a JSON array or object, got {}",
                other
            ))),
        }
    }
}
