//! Test suite for RPC Inspector
//!
//! - Unit tests for formatting properties
//! - Integration tests for the health check and single-call use cases
//! - Mock transport and fixture payloads

pub mod common;
pub mod integration;

/// Test configuration and utilities
pub mod config {
    use crate::config::AppConfig;
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Initialize tracing once for the whole test binary
    pub fn init() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter("debug")
                .with_test_writer()
                .try_init();
        });
    }

    /// Configuration pointing at a local endpoint with a short timeout
    pub fn test_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.endpoint.rpc_url = "http://127.0.0.1:8545".to_string();
        config.endpoint.timeout_seconds = 2;
        config.logging.level = "debug".to_string();
        config
    }
}

/// Test utilities and helpers
pub mod utils {
    use serde_json::Value;

    /// Assert JSON-RPC response structure
    pub fn assert_rpc_response(response: &Value) {
        let obj = response.as_object().expect("response must be an object");
        assert_eq!(obj.get("jsonrpc"), Some(&Value::from("2.0")));
        assert!(obj.contains_key("id"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ExternalRpcAdapter;

    #[test]
    fn test_config_initialization() {
        config::init();
        let test_config = config::test_config();
        assert!(test_config.validate_config().is_ok());
        assert_eq!(test_config.endpoint.timeout_seconds, 2);
    }

    #[test]
    fn test_adapter_builds_from_test_config() {
        assert!(ExternalRpcAdapter::new(&config::test_config()).is_ok());
    }

    #[test]
    fn test_fixtures_are_well_formed() {
        utils::assert_rpc_response(&fixtures::method_not_found());
        for block in [fixtures::genesis_block(), fixtures::recent_block()] {
            assert!(block["transactions"].is_array());
        }
    }
}
