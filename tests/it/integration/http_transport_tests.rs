//! HTTP transport tests against a local mock server.

use crate::helpers::{MockServer, double_wire, lhs_body};
use numwire::{
    Argument, CallError, Endpoint, FunctionClient, HttpTransport, NativeValue, ProtocolErrorKind,
};
use std::net::TcpListener;
use std::time::Duration;

#[test]
fn test_round_trip_over_http() {
    let server = MockServer::respond_once(200, &lhs_body(&[double_wire(&[0.0, 1.0, 0.0], 1, 3)]));
    let endpoint = Endpoint::new(server.base_url(), "sinewave", "sine");
    let client = FunctionClient::new(HttpTransport::new().unwrap());

    let outputs = client
        .call(endpoint.as_str(), 1, &[Argument::new(NativeValue::Scalar(2.0))])
        .unwrap();
    assert_eq!(outputs, vec![NativeValue::row_vector(vec![0.0, 1.0, 0.0])]);

    let received: serde_json::Value =
        serde_json::from_str(&server.received_body().unwrap()).unwrap();
    assert_eq!(received["rhs"][0]["mwdata"], serde_json::json!([2]));
}

#[test]
fn test_not_found_over_http() {
    let server = MockServer::respond_once(404, "archive not found");
    let endpoint = Endpoint::new(server.base_url(), "missing", "sine");
    let client = FunctionClient::new(HttpTransport::new().unwrap());

    let err = client.call(endpoint.as_str(), 1, &[]).unwrap_err();
    match err {
        CallError::Protocol { kind, status, diagnostic } => {
            assert_eq!(kind, ProtocolErrorKind::NotFound);
            assert_eq!(status, 404);
            assert_eq!(diagnostic, "archive not found");
        }
        other => panic!("expected Protocol, got {:?}", other),
    }
}

#[test]
fn test_server_fault_over_http() {
    let server = MockServer::respond_once(503, "service unavailable");
    let endpoint = Endpoint::new(server.base_url(), "sinewave", "sine");
    let client = FunctionClient::new(HttpTransport::new().unwrap());

    let err = client.call(endpoint.as_str(), 1, &[]).unwrap_err();
    assert_eq!(err.protocol_kind(), Some(ProtocolErrorKind::ServerFault));
}

#[test]
fn test_slow_server_times_out() {
    let server = MockServer::respond_once_after(200, "{}", Duration::from_secs(2));
    let endpoint = Endpoint::new(server.base_url(), "sinewave", "sine");
    let client = FunctionClient::new(HttpTransport::new().unwrap())
        .with_timeout(Duration::from_millis(200));

    let err = client.call(endpoint.as_str(), 1, &[]).unwrap_err();
    assert!(matches!(err, CallError::Timeout { .. }), "got {:?}", err);
}

#[test]
fn test_refused_connection_is_network_error() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let endpoint = Endpoint::new(&format!("http://127.0.0.1:{}", port), "sinewave", "sine");
    let client = FunctionClient::new(HttpTransport::new().unwrap());

    let err = client.call(endpoint.as_str(), 1, &[]).unwrap_err();
    assert!(matches!(err, CallError::Network { .. }), "got {:?}", err);
}
