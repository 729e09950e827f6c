//! Infrastructure adapters module
//!
//! This module contains adapters for external services.

pub mod external_rpc;
pub mod transport;

pub use external_rpc::ExternalRpcAdapter;
pub use transport::RpcTransport;
