//! Domain layer - Core logic and domain models
//!
//! This module contains the wire types, response formatting rules and the
//! health record. None of it performs I/O.

pub mod format;
pub mod health;
pub mod presets;
pub mod rpc;
pub mod units;

pub use format::{
    default_formatter, format_by_method, ArrayEntry, FormattedResult, PayloadParser,
    ResponseFormatter, TypedPayload, NOT_AVAILABLE,
};
pub use health::{HealthRecord, HealthStatus};
pub use presets::{find_preset, preset_methods, PresetMethod};
pub use rpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
