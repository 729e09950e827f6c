//! Integration tests for the use cases
//!
//! Use cases run against the scripted transport, and once end to end through
//! the HTTP adapter against a local listener.

use crate::{
    application::{FormatResponseUseCase, HealthCheckUseCase},
    domain::{
        format::{ResponseFormatter, TypedPayload},
        health::HealthStatus,
    },
    infrastructure::adapters::ExternalRpcAdapter,
    shared::error::AppError,
    tests::{
        common::{healthy_node, MockTransport, Reply},
        fixtures,
    },
};
use serde_json::{json, Value};
use std::time::Duration;
use tokio::time::timeout;
use tokio_test::{assert_err, assert_ok};

const URL: &str = "http://node.test:8545";

#[tokio::test]
async fn test_health_check_on_archive_node() {
    let transport = healthy_node(fixtures::genesis_block());
    let before = chrono::Utc::now();
    let record = HealthCheckUseCase::new().execute(&transport, URL).await;

    assert_eq!(record.status, HealthStatus::Healthy);
    assert_eq!(record.block_number.as_ref().and_then(|r| r.decimal()), Some("20586299"));
    assert_eq!(record.chain_id.as_ref().and_then(|r| r.decimal()), Some("137"));
    assert_eq!(record.gas_price.as_ref().and_then(|r| r.decimal()), Some("30.00"));
    assert_eq!(record.is_archive_node, Some(true));
    assert!(record.error.is_none());
    assert!(record.last_checked >= before);

    assert!(transport.calls().iter().all(|(url, _, _)| url == URL));
}

#[tokio::test]
async fn test_health_check_on_pruned_node() {
    let transport = healthy_node(Value::Null);
    let record = HealthCheckUseCase::new().execute(&transport, URL).await;

    assert_eq!(record.status, HealthStatus::Healthy);
    assert_eq!(record.is_archive_node, Some(false));
}

#[tokio::test]
async fn test_genesis_answer_without_result_counts_as_archive() {
    let transport = healthy_node(Value::Null).on(
        "eth_getBlockByNumber",
        Reply::Body(fixtures::method_not_found()),
    );
    let record = HealthCheckUseCase::new().execute(&transport, URL).await;

    assert_eq!(record.status, HealthStatus::Healthy);
    assert_eq!(record.is_archive_node, Some(true));
}

#[tokio::test]
async fn test_nonstandard_error_member_keeps_check_healthy() {
    let transport = healthy_node(fixtures::genesis_block()).on(
        "eth_chainId",
        Reply::Body(json!({"jsonrpc": "2.0", "id": 1, "error": {"code": -32000}})),
    );
    let record = HealthCheckUseCase::new().execute(&transport, URL).await;

    assert_eq!(record.status, HealthStatus::Healthy, "error: {:?}", record.error);
    let chain_id = record.chain_id.unwrap();
    assert!(chain_id.formatted.is_none());
    assert_eq!(chain_id.raw.error(), Some(&json!({"code": -32000})));
}

#[tokio::test]
async fn test_single_call_keeps_raw_body_verbatim() {
    let body = json!({"extra": 1, "id": null, "jsonrpc": "2.0", "result": null});
    let transport = MockTransport::new().on("eth_getTransactionByHash", Reply::Body(body.clone()));
    let result = assert_ok!(
        FormatResponseUseCase::new()
            .execute(&transport, URL, "eth_getTransactionByHash", json!(["0x1"]))
            .await
    );

    assert!(result.formatted.is_none());
    assert_eq!(serde_json::to_value(&result).unwrap()["raw"], body);
}

#[tokio::test]
async fn test_health_probes_run_concurrently() {
    // every call waits until all four are in flight
    let transport = healthy_node(fixtures::genesis_block()).rendezvous(4);
    let record = timeout(
        Duration::from_secs(5),
        HealthCheckUseCase::new().execute(&transport, URL),
    )
    .await
    .expect("probes were not issued concurrently");

    assert!(record.is_healthy());
    assert_eq!(transport.calls().len(), 4);
}

#[tokio::test]
async fn test_first_failure_settles_the_check() {
    let transport = MockTransport::new()
        .on("eth_blockNumber", Reply::Hang)
        .on("eth_chainId", Reply::Hang)
        .on("eth_gasPrice", Reply::Fail(AppError::Http { status: 502 }))
        .on("eth_getBlockByNumber", Reply::Hang);

    let record = timeout(
        Duration::from_secs(5),
        HealthCheckUseCase::new().execute(&transport, URL),
    )
    .await
    .expect("a failed probe must not wait for the others");

    assert_eq!(record.status, HealthStatus::Unhealthy);
    assert_eq!(record.error.as_deref(), Some("HTTP error: 502"));
    assert!(record.block_number.is_none());
    assert!(record.chain_id.is_none());
    assert!(record.gas_price.is_none());
    assert!(record.is_archive_node.is_none());
}

#[tokio::test]
async fn test_malformed_body_makes_check_unhealthy() {
    let transport = healthy_node(Value::Null).on("eth_chainId", Reply::Body(json!("oops")));
    let record = HealthCheckUseCase::new().execute(&transport, URL).await;

    assert_eq!(record.status, HealthStatus::Unhealthy);
    assert!(record.error.unwrap().starts_with("Invalid JSON-RPC response"));
}

#[tokio::test]
async fn test_unhealthy_record_serializes_without_probe_fields() {
    let transport = MockTransport::new();
    let record = HealthCheckUseCase::new().execute(&transport, URL).await;

    let body = serde_json::to_value(&record).unwrap();
    assert_eq!(body["status"], json!("unhealthy"));
    assert!(body.get("blockNumber").is_none());
    assert!(body.get("isArchiveNode").is_none());
    assert!(body["error"].as_str().unwrap().contains("no reply scripted"));
    assert!(body["lastChecked"].is_string());
}

#[tokio::test]
async fn test_single_call_formats_by_method() {
    let transport = MockTransport::new().result("eth_getBlockByNumber", fixtures::recent_block());
    let result = assert_ok!(
        FormatResponseUseCase::new()
            .execute(&transport, URL, "eth_getBlockByNumber", json!(["latest", false]))
            .await
    );

    match result.formatted {
        Some(TypedPayload::Block { number, transaction_count, .. }) => {
            assert_eq!(number, "19531250");
            assert_eq!(transaction_count, 2);
        }
        other => panic!("unexpected payload {:?}", other),
    }
    assert_eq!(
        transport.calls(),
        vec![(URL.to_string(), "eth_getBlockByNumber".to_string(), json!(["latest", false]))]
    );
}

#[tokio::test]
async fn test_single_call_with_protocol_error() {
    let transport = MockTransport::new().on("eth_foo", Reply::Body(fixtures::method_not_found()));
    let result = assert_ok!(
        FormatResponseUseCase::new()
            .execute(&transport, URL, "eth_foo", json!([]))
            .await
    );

    assert!(result.formatted.is_none());
    assert_eq!(result.raw.rpc_error().map(|e| e.code), Some(-32601));
}

#[tokio::test]
async fn test_single_call_surfaces_transport_failure() {
    let transport = MockTransport::new().on(
        "eth_chainId",
        Reply::Fail(AppError::Transport("connection refused".to_string())),
    );
    let error = assert_err!(
        FormatResponseUseCase::new()
            .execute(&transport, URL, "eth_chainId", json!([]))
            .await
    );
    assert!(error.is_transport_failure());
}

#[tokio::test]
async fn test_single_call_rejects_bad_input_before_sending() {
    let transport = MockTransport::new();
    let use_case = FormatResponseUseCase::new();

    assert_err!(use_case.execute(&transport, "ftp://node", "eth_chainId", json!([])).await);
    assert_err!(use_case.execute(&transport, URL, "", json!([])).await);
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_single_call_with_custom_registry() {
    let mut formatter = ResponseFormatter::default();
    formatter.register("web3_clientVersion", |result: &Value| {
        result.as_str().map(|v| TypedPayload::Data {
            human_readable: format!("Client: {}", v),
        })
    });

    let transport = MockTransport::new().result("web3_clientVersion", json!("Geth/v1.13.5"));
    let result = FormatResponseUseCase::with_formatter(formatter)
        .execute(&transport, URL, "web3_clientVersion", json!([]))
        .await
        .unwrap();

    assert_eq!(
        result.formatted,
        Some(TypedPayload::Data {
            human_readable: "Client: Geth/v1.13.5".to_string()
        })
    );
}

/// Minimal JSON-RPC node answering from the request's method name
async fn spawn_node() -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 4096];
                // read until the JSON body has been received
                loop {
                    let n = socket.read(&mut buf).await.unwrap_or(0);
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&buf[..n]);
                    let text = String::from_utf8_lossy(&request);
                    if let Some(split) = text.find("\r\n\r\n") {
                        let body: &str = &text[split + 4..];
                        if serde_json::from_str::<Value>(body).is_ok() {
                            break;
                        }
                    }
                }

                let text = String::from_utf8_lossy(&request).to_string();
                let body = text.split("\r\n\r\n").nth(1).unwrap_or("{}");
                let call: Value = serde_json::from_str(body).unwrap_or(Value::Null);
                let result = match call["method"].as_str() {
                    Some("eth_blockNumber") => json!("0x1"),
                    Some("eth_chainId") => json!("0xaa36a7"),
                    Some("eth_gasPrice") => json!("0x77359400"),
                    _ => Value::Null,
                };
                let reply = json!({"jsonrpc": "2.0", "id": call["id"], "result": result}).to_string();
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    reply.len(),
                    reply
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_health_check_over_http() {
    let url = spawn_node().await;
    let adapter = ExternalRpcAdapter::with_timeout(Duration::from_secs(5)).unwrap();
    let record = HealthCheckUseCase::new().execute(&adapter, &url).await;

    assert_eq!(record.status, HealthStatus::Healthy, "error: {:?}", record.error);
    assert_eq!(record.block_number.as_ref().and_then(|r| r.decimal()), Some("1"));
    assert_eq!(record.chain_id.as_ref().and_then(|r| r.decimal()), Some("11155111"));
    assert_eq!(record.gas_price.as_ref().and_then(|r| r.decimal()), Some("2.00"));
    assert_eq!(record.is_archive_node, Some(false));
}
