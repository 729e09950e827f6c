//! Response formatting - typed, human-readable views of JSON-RPC results
//!
//! A [`ResponseFormatter`] maps a method name to a payload parser. Parsers only
//! ever see the `result` member of a response and never fail: a result that does
//! not have the expected shape yields no payload, and a missing or malformed
//! field inside a block or transaction yields [`NOT_AVAILABLE`].

use crate::domain::rpc::JsonRpcResponse;
use crate::domain::units::{
    has_hex_prefix, hex_to_decimal_string, parse_hex, unix_seconds_to_iso, wei_to_eth, wei_to_gwei,
};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Placeholder for a field the node did not return
pub const NOT_AVAILABLE: &str = "N/A";

pub const GWEI_UNIT: &str = "Gwei";
pub const ETH_UNIT: &str = "ETH";

/// Longest hex string (prefix included) read as a number by the generic parser
const MAX_QUANTITY_LEN: usize = 18;

/// Length of a 32-byte hash with its prefix
const HASH_LEN: usize = 66;

/// Typed view of a result, one variant per method family
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TypedPayload {
    BlockNumber {
        decimal: String,
    },
    TransactionHash {
        human_readable: String,
    },
    Data {
        human_readable: String,
    },
    #[serde(rename = "array")]
    ArrayOfHex {
        values: Vec<ArrayEntry>,
    },
    GasPrice {
        decimal: String,
        unit: &'static str,
    },
    Balance {
        wei: String,
        eth: String,
        unit: &'static str,
    },
    TransactionCount {
        count: String,
        human_readable: String,
    },
    Block {
        number: String,
        hash: String,
        timestamp: String,
        transaction_count: usize,
        gas_used: String,
        gas_limit: String,
    },
    Transaction {
        hash: String,
        from: String,
        to: String,
        value: String,
        gas: String,
        gas_price: String,
        nonce: String,
        block_number: String,
    },
}

/// Element of an array result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArrayEntry {
    Hex { hex: String, decimal: String },
    Passthrough(Value),
}

impl TypedPayload {
    /// Decimal rendering carried by number-like payloads
    pub fn decimal(&self) -> Option<&str> {
        match self {
            TypedPayload::BlockNumber { decimal } | TypedPayload::GasPrice { decimal, .. } => {
                Some(decimal.as_str())
            }
            TypedPayload::TransactionCount { count, .. } => Some(count.as_str()),
            _ => None,
        }
    }

    /// Display unit, if the payload has one
    pub fn unit(&self) -> Option<&'static str> {
        match self {
            TypedPayload::GasPrice { unit, .. } | TypedPayload::Balance { unit, .. } => Some(*unit),
            _ => None,
        }
    }
}

/// A response together with its typed view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedResult {
    /// The response exactly as received
    pub raw: JsonRpcResponse,

    /// Typed view; `None` when the result is absent or unrecognized
    pub formatted: Option<TypedPayload>,
}

impl FormattedResult {
    /// Format `response` with one specific parser, bypassing method dispatch
    pub fn with_parser(response: JsonRpcResponse, parser: fn(&Value) -> Option<TypedPayload>) -> Self {
        let formatted = response.result().and_then(parser);
        Self {
            raw: response,
            formatted,
        }
    }

    /// Decimal rendering of the payload, if any
    pub fn decimal(&self) -> Option<&str> {
        self.formatted.as_ref().and_then(TypedPayload::decimal)
    }
}

/// Parser from a non-null `result` to a payload
pub type PayloadParser = Arc<dyn Fn(&Value) -> Option<TypedPayload> + Send + Sync>;

type BuiltinParser = fn(&Value) -> Option<TypedPayload>;

const BUILTIN_PARSERS: &[(&str, BuiltinParser)] = &[
    ("eth_blockNumber", parse_generic_hex),
    ("eth_chainId", parse_generic_hex),
    ("eth_gasPrice", parse_gas_price),
    ("eth_getBalance", parse_balance),
    ("eth_getTransactionCount", parse_transaction_count),
    ("eth_getBlockByNumber", parse_block),
    ("eth_getBlockByHash", parse_block),
    ("eth_getTransactionByHash", parse_transaction),
    ("eth_getTransactionByBlockHashAndIndex", parse_transaction),
    ("eth_getTransactionByBlockNumberAndIndex", parse_transaction),
];

/// Method-name keyed registry of payload parsers. Lookups are exact and
/// case-sensitive; unregistered methods fall back to [`parse_generic_hex`].
#[derive(Clone)]
pub struct ResponseFormatter {
    parsers: HashMap<String, PayloadParser>,
}

impl Default for ResponseFormatter {
    fn default() -> Self {
        let mut formatter = Self::empty();
        for (method, parser) in BUILTIN_PARSERS {
            formatter.register(*method, *parser);
        }
        formatter
    }
}

impl std::fmt::Debug for ResponseFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut methods: Vec<&str> = self.parsers.keys().map(String::as_str).collect();
        methods.sort_unstable();
        f.debug_struct("ResponseFormatter").field("methods", &methods).finish()
    }
}

impl ResponseFormatter {
    /// A registry with no method-specific parsers
    pub fn empty() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// Add or replace the parser for `method`
    pub fn register<F>(&mut self, method: impl Into<String>, parser: F) -> &mut Self
    where
        F: Fn(&Value) -> Option<TypedPayload> + Send + Sync + 'static,
    {
        self.parsers.insert(method.into(), Arc::new(parser));
        self
    }

    /// Whether `method` has a dedicated parser
    pub fn is_registered(&self, method: &str) -> bool {
        self.parsers.contains_key(method)
    }

    /// Payload for a bare result value
    pub fn parse_result(&self, result: &Value, method: &str) -> Option<TypedPayload> {
        if result.is_null() {
            return None;
        }
        match self.parsers.get(method) {
            Some(parser) => parser(result),
            None => parse_generic_hex(result),
        }
    }

    /// Format a response produced by `method`
    pub fn format(&self, response: JsonRpcResponse, method: &str) -> FormattedResult {
        let formatted = response
            .result()
            .and_then(|result| self.parse_result(result, method));

        FormattedResult {
            raw: response,
            formatted,
        }
    }
}

/// Shared registry holding only the built-in parsers
pub fn default_formatter() -> &'static ResponseFormatter {
    static DEFAULT: OnceLock<ResponseFormatter> = OnceLock::new();
    DEFAULT.get_or_init(ResponseFormatter::default)
}

/// Format `response` with the built-in parsers
pub fn format_by_method(response: JsonRpcResponse, method: &str) -> FormattedResult {
    default_formatter().format(response, method)
}

/// Generic hex heuristic. Short hex strings are numbers, 66-character ones are
/// hashes, anything else is opaque data; arrays convert element-wise.
pub fn parse_generic_hex(result: &Value) -> Option<TypedPayload> {
    match result {
        Value::String(s) if has_hex_prefix(s) => {
            // measured in UTF-16 code units
            let len = s.encode_utf16().count();
            if len <= MAX_QUANTITY_LEN {
                hex_to_decimal_string(s).map(|decimal| TypedPayload::BlockNumber { decimal })
            } else if len == HASH_LEN {
                Some(TypedPayload::TransactionHash {
                    human_readable: format!("Transaction Hash: {}", s),
                })
            } else {
                Some(TypedPayload::Data {
                    human_readable: format!("Data: {}", s),
                })
            }
        }
        Value::Array(items) => Some(TypedPayload::ArrayOfHex {
            values: items.iter().map(array_entry).collect(),
        }),
        _ => None,
    }
}

fn array_entry(item: &Value) -> ArrayEntry {
    if let Some(s) = item.as_str().filter(|s| has_hex_prefix(s)) {
        if let Some(decimal) = hex_to_decimal_string(s) {
            return ArrayEntry::Hex {
                hex: s.to_string(),
                decimal,
            };
        }
    }
    ArrayEntry::Passthrough(item.clone())
}

/// `eth_gasPrice`: wei to Gwei
pub fn parse_gas_price(result: &Value) -> Option<TypedPayload> {
    let wei = result.as_str().and_then(parse_hex)?;
    Some(TypedPayload::GasPrice {
        decimal: wei_to_gwei(&wei),
        unit: GWEI_UNIT,
    })
}

/// `eth_getBalance`: wei and ETH
pub fn parse_balance(result: &Value) -> Option<TypedPayload> {
    let wei = result.as_str().and_then(parse_hex)?;
    Some(TypedPayload::Balance {
        wei: wei.to_str_radix(10),
        eth: wei_to_eth(&wei),
        unit: ETH_UNIT,
    })
}

/// `eth_getTransactionCount`: the account nonce
pub fn parse_transaction_count(result: &Value) -> Option<TypedPayload> {
    let count = result.as_str().and_then(hex_to_decimal_string)?;
    Some(TypedPayload::TransactionCount {
        human_readable: format!("Nonce: {}", count),
        count,
    })
}

/// `eth_getBlockBy*`: block summary
pub fn parse_block(result: &Value) -> Option<TypedPayload> {
    let block = result.as_object()?;

    let timestamp = text_field(block, "timestamp")
        .and_then(parse_hex)
        .and_then(|seconds| unix_seconds_to_iso(&seconds))
        .unwrap_or_else(not_available);

    Some(TypedPayload::Block {
        number: decimal_field(block, "number"),
        hash: passthrough_field(block, "hash"),
        timestamp,
        transaction_count: block
            .get("transactions")
            .and_then(Value::as_array)
            .map_or(0, Vec::len),
        gas_used: decimal_field(block, "gasUsed"),
        gas_limit: decimal_field(block, "gasLimit"),
    })
}

/// `eth_getTransactionBy*`: transaction summary
pub fn parse_transaction(result: &Value) -> Option<TypedPayload> {
    let tx = result.as_object()?;

    Some(TypedPayload::Transaction {
        hash: passthrough_field(tx, "hash"),
        from: passthrough_field(tx, "from"),
        to: passthrough_field(tx, "to"),
        value: wei_field(tx, "value", wei_to_eth),
        gas: decimal_field(tx, "gas"),
        gas_price: wei_field(tx, "gasPrice", wei_to_gwei),
        nonce: decimal_field(tx, "nonce"),
        block_number: decimal_field(tx, "blockNumber"),
    })
}

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

/// Non-empty string member
fn text_field<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn passthrough_field(object: &Map<String, Value>, key: &str) -> String {
    text_field(object, key).map_or_else(not_available, str::to_string)
}

fn decimal_field(object: &Map<String, Value>, key: &str) -> String {
    text_field(object, key)
        .and_then(hex_to_decimal_string)
        .unwrap_or_else(not_available)
}

fn wei_field(
    object: &Map<String, Value>,
    key: &str,
    convert: fn(&num_bigint::BigUint) -> String,
) -> String {
    text_field(object, key)
        .and_then(parse_hex)
        .map_or_else(not_available, |wei| convert(&wei))
}
