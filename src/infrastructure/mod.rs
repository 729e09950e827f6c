//! Infrastructure layer - External concerns and adapters
//!
//! This module contains the network transport and the shell command builder.

pub mod adapters;
pub mod curl;

// Re-export main adapters
pub use adapters::{ExternalRpcAdapter, RpcTransport};
pub use curl::{curl_command, curl_command_now};
