//! Shell command equivalent of a JSON-RPC call

use crate::domain::rpc::JsonRpcRequest;

/// Build a `curl` invocation posting `method` with the params text as typed.
/// Blank params text becomes `[]`.
pub fn curl_command(rpc_url: &str, method: &str, params: &str, id: u64) -> String {
    let params = match params.trim() {
        "" => "[]",
        text => text,
    };

    format!(
        r#"curl -X POST -H "Content-Type: application/json" -d '{{"jsonrpc":"2.0","method":"{}","params":{},"id":{}}}' {}"#,
        method, params, id, rpc_url
    )
}

/// Same as [`curl_command`], with a wall-clock request id
pub fn curl_command_now(rpc_url: &str, method: &str, params: &str) -> String {
    curl_command(rpc_url, method, params, JsonRpcRequest::timestamp_id())
}
