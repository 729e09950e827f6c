//! Configuration validation module
//!
//! This module provides additional validation logic for configuration
//! beyond the basic validator crate validation.

use crate::config::app_config::{AppConfig, LoggingConfig};
use crate::shared::error::{AppError, AppResult};
use crate::shared::validation::ValidationUtils;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["text", "json"];

/// Configuration validator for additional validation logic
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate_config(config: &AppConfig) -> AppResult<()> {
        ValidationUtils::validate_rpc_url(&config.endpoint.rpc_url)?;
        Self::validate_logging_config(&config.logging)
    }

    /// Settings that are accepted but worth reporting once logging is up
    pub fn warnings(config: &AppConfig) -> Vec<String> {
        let mut warnings = Vec::new();

        if !config.endpoint.rpc_url.starts_with("https://")
            && !Self::is_local(&config.endpoint.rpc_url)
        {
            warnings.push(format!(
                "Endpoint {} is reached over plain HTTP",
                config.endpoint.rpc_url
            ));
        }

        warnings
    }

    fn is_local(url: &str) -> bool {
        url.contains("localhost") || url.contains("127.0.0.1")
    }

    /// Validate logging configuration
    fn validate_logging_config(logging: &LoggingConfig) -> AppResult<()> {
        if !LOG_LEVELS.contains(&logging.level.to_ascii_lowercase().as_str()) {
            return Err(AppError::Validation(format!(
                "Invalid log level: {}",
                logging.level
            )));
        }

        if !LOG_FORMATS.contains(&logging.format.to_ascii_lowercase().as_str()) {
            return Err(AppError::Validation(format!(
                "Invalid log format: {}",
                logging.format
            )));
        }

        Ok(())
    }
}
