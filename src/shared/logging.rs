//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use crate::shared::error::{AppError, AppResult};
use tracing::{debug, info, warn};

/// Logging utilities for the application
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified configuration
    pub fn initialize(level: &str, format: &str, structured: bool) -> AppResult<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));

        let builder = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(structured)
            .with_file(structured)
            .with_line_number(structured)
            .with_writer(std::io::stderr)
            .with_ansi(false);

        let result = if format.eq_ignore_ascii_case("json") {
            tracing::subscriber::set_global_default(builder.json().finish())
        } else {
            tracing::subscriber::set_global_default(builder.finish())
        };

        result.map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))
    }

    /// Log an outgoing RPC call
    pub fn log_request(rpc_url: &str, method: &str, params: &serde_json::Value) {
        debug!(
            rpc_url = %rpc_url,
            method = %method,
            params = %params,
            "Sending RPC request"
        );
    }

    /// Log a completed RPC call
    pub fn log_success(method: &str, duration_ms: u64) {
        debug!(
            method = %method,
            duration_ms = %duration_ms,
            "RPC request completed"
        );
    }

    /// Log a failed RPC call
    pub fn log_error(method: &str, error: &AppError, duration_ms: u64) {
        warn!(
            method = %method,
            error = %error,
            duration_ms = %duration_ms,
            "RPC request failed"
        );
    }

    /// Log a health verdict; failed checks are logged with their cause
    pub fn log_health(rpc_url: &str, status: &str, error: Option<&str>, duration_ms: u64) {
        match error {
            None => info!(
                rpc_url = %rpc_url,
                status = %status,
                duration_ms = %duration_ms,
                "Health check finished"
            ),
            Some(error) => warn!(
                rpc_url = %rpc_url,
                status = %status,
                error = %error,
                duration_ms = %duration_ms,
                "Health check failed"
            ),
        }
    }
}
