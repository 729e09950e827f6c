//! Predefined calls offered to the operator

use serde::Serialize;
use serde_json::{json, Value};

const SAMPLE_ADDRESS: &str = "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6";
const SAMPLE_TX_HASH: &str = "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b";

/// A predefined method with its suggested params
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetMethod {
    pub method: &'static str,
    pub label: &'static str,
    /// Suggested params; `None` when the call needs operator input
    pub default_params: Option<Value>,
}

/// All presets, in display order
pub fn preset_methods() -> Vec<PresetMethod> {
    vec![
        preset("eth_blockNumber", "Get Block Number", Some(json!([]))),
        preset("eth_chainId", "Get Chain ID", Some(json!([]))),
        preset("eth_gasPrice", "Get Gas Price", Some(json!([]))),
        preset("eth_getBalance", "Get Balance", Some(json!([SAMPLE_ADDRESS, "latest"]))),
        preset(
            "eth_getTransactionCount",
            "Get Transaction Count",
            Some(json!([SAMPLE_ADDRESS, "latest"])),
        ),
        preset("eth_getBlockByNumber", "Get Block By Number", Some(json!(["latest", false]))),
        preset(
            "eth_getTransactionByHash",
            "Get Transaction By Hash",
            Some(json!([SAMPLE_TX_HASH])),
        ),
        preset("eth_call", "Call Contract", None),
        preset("eth_estimateGas", "Estimate Gas", None),
    ]
}

/// Preset for `method`, exact match
pub fn find_preset(method: &str) -> Option<PresetMethod> {
    preset_methods().into_iter().find(|p| p.method == method)
}

fn preset(method: &'static str, label: &'static str, default_params: Option<Value>) -> PresetMethod {
    PresetMethod {
        method,
        label,
        default_params,
    }
}
