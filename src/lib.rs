//! RPC Inspector - diagnostics for Ethereum-style JSON-RPC endpoints
//!
//! This library issues JSON-RPC calls against an arbitrary endpoint, turns raw
//! results into typed, human-readable views keyed by method name, and folds a
//! fixed set of probes into a single endpoint health verdict.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

#[cfg(test)]
mod tests;

pub use application::{FormatResponseUseCase, HealthCheckUseCase};
pub use config::AppConfig;
pub use domain::{format_by_method, FormattedResult, HealthRecord, JsonRpcResponse, TypedPayload};
pub use infrastructure::{ExternalRpcAdapter, RpcTransport};
pub use shared::error::{AppError, AppResult};

/// Application result type
pub type Result<T> = std::result::Result<T, AppError>;
