//! Application configuration structures
//!
//! This module contains the main configuration structures for the application.

use crate::shared::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Endpoint the inspector talks to
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct EndpointConfig {
    /// RPC URL (e.g., "https://eth.llamarpc.com")
    #[validate(url)]
    pub rpc_url: String,

    /// Per-request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    pub timeout_seconds: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[validate(length(min = 1))]
    pub level: String,

    /// Log format (text, json)
    #[validate(length(min = 1))]
    pub format: String,

    /// Include target, file and line in log lines
    pub structured: bool,
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    /// Endpoint configuration
    #[validate(nested)]
    pub endpoint: EndpointConfig,

    /// Logging configuration
    #[validate(nested)]
    pub logging: LoggingConfig,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://eth.llamarpc.com".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            structured: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("RpcInspector").required(false))
            .add_source(config::Environment::with_prefix("RPC_INSPECTOR").separator("__"))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build configuration: {}", e)))?;

        let config: AppConfig = config
            .try_deserialize()
            .map_err(|e| AppError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        config.validate_config()?;

        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate_config(&self) -> AppResult<()> {
        self.validate()
            .map_err(|e| AppError::Validation(format!("Configuration validation failed: {}", e)))?;

        crate::config::validation::ConfigValidator::validate_config(self)
    }

    /// Non-fatal configuration warnings, for logging after initialization
    pub fn warnings(&self) -> Vec<String> {
        crate::config::validation::ConfigValidator::warnings(self)
    }

    /// Apply command-line overrides on top of loaded values
    pub fn with_overrides(
        mut self,
        rpc_url: Option<String>,
        timeout_seconds: Option<u64>,
        log_level: Option<String>,
    ) -> AppResult<Self> {
        if let Some(rpc_url) = rpc_url {
            self.endpoint.rpc_url = rpc_url;
        }
        if let Some(timeout_seconds) = timeout_seconds {
            self.endpoint.timeout_seconds = timeout_seconds;
        }
        if let Some(level) = log_level {
            self.logging.level = level;
        }

        self.validate_config()?;
        Ok(self)
    }
}
