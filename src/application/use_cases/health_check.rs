use crate::{
    domain::{
        format::{parse_gas_price, parse_generic_hex, FormattedResult},
        health::HealthRecord,
        rpc::JsonRpcResponse,
    },
    infrastructure::adapters::RpcTransport,
    shared::logging::LoggingUtils,
};
use futures::future::try_join4;
use serde_json::json;
use std::time::Instant;

/// Block requested to tell archive nodes from pruned ones
pub const GENESIS_BLOCK_TAG: &str = "0x0";

/// Health check use case
///
/// Fires four probes at the endpoint at once and folds them into one
/// [`HealthRecord`]. Any probe failing makes the whole check unhealthy; the
/// answers of the other probes are discarded.
#[derive(Debug, Default)]
pub struct HealthCheckUseCase;

impl HealthCheckUseCase {
    /// Create a new health check use case
    pub fn new() -> Self {
        Self
    }

    /// Execute the health check against `rpc_url`
    pub async fn execute<T>(&self, transport: &T, rpc_url: &str) -> HealthRecord
    where
        T: RpcTransport + ?Sized,
    {
        let started = Instant::now();

        let probes = try_join4(
            transport.send(rpc_url, "eth_blockNumber", json!([])),
            transport.send(rpc_url, "eth_chainId", json!([])),
            transport.send(rpc_url, "eth_gasPrice", json!([])),
            transport.send(rpc_url, "eth_getBlockByNumber", json!([GENESIS_BLOCK_TAG, false])),
        )
        .await;

        let record = match probes {
            Ok((block_number, chain_id, gas_price, genesis)) => HealthRecord::healthy(
                FormattedResult::with_parser(block_number, parse_generic_hex),
                FormattedResult::with_parser(chain_id, parse_generic_hex),
                FormattedResult::with_parser(gas_price, parse_gas_price),
                Self::retains_genesis(&genesis),
            ),
            Err(error) => HealthRecord::unhealthy(error.to_string()),
        };

        LoggingUtils::log_health(
            rpc_url,
            &record.status.to_string(),
            record.error.as_deref(),
            started.elapsed().as_millis() as u64,
        );

        record
    }

    /// Archive heuristic: only an explicit `"result": null` for height zero
    /// marks a pruned node. An answer without a `result` member counts as
    /// archive.
    fn retains_genesis(genesis: &JsonRpcResponse) -> bool {
        !genesis.has_null_result()
    }
}
