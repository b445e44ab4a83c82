//! End-to-end tests against the live mock server.
//!
//! # Design
//! Each test starts the mock server on a random port (axum on a
//! current-thread tokio runtime in a background thread) and exercises the
//! blocking helper over real HTTP: body accumulation, the fixed POST
//! headers, empty bodies in both directions, and transport failure.

use httpc_core::{cleanup, get, init, post, HttpError};
use mock_server::InspectReport;

/// Start the mock server on a random port and return its address.
fn start_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn get_returns_accumulated_body() {
    let addr = start_server();
    let resp = get("127.0.0.1", addr.port(), "/ping").unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, b"pong");
}

#[test]
fn get_strips_leading_slash_run_from_path() {
    let addr = start_server();
    let resp = get("127.0.0.1", addr.port(), "///ping").unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, b"pong");
}

#[test]
fn post_round_trips_body_through_echo() {
    let addr = start_server();
    let body = r#"{"name":"john","build_id":"johnny"}"#;
    let resp = post("127.0.0.1", addr.port(), "/echo", body).unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.text(), body);
}

#[test]
fn post_with_empty_body_succeeds() {
    let addr = start_server();
    let resp = post("127.0.0.1", addr.port(), "/echo", "").unwrap();
    assert_eq!(resp.status, 200);
    assert!(resp.body.is_empty());
}

#[test]
fn post_sends_the_three_fixed_headers() {
    let addr = start_server();
    let body = r#"{"k":"v"}"#;
    let resp = post("127.0.0.1", addr.port(), "/inspect", body).unwrap();
    assert_eq!(resp.status, 200);

    let report: InspectReport = serde_json::from_slice(&resp.body).unwrap();
    assert_eq!(report.accept.as_deref(), Some("application/json"));
    assert_eq!(report.content_type.as_deref(), Some("application/json"));
    assert_eq!(report.charsets.as_deref(), Some("utf-8"));
    assert_eq!(report.body_len, body.len());
}

#[test]
fn post_declares_exact_length_up_front() {
    let addr = start_server();
    let body = r#"{"name":"john"}"#;
    let resp = post("127.0.0.1", addr.port(), "/inspect", body).unwrap();

    let report: InspectReport = serde_json::from_slice(&resp.body).unwrap();
    assert_eq!(
        report.content_length.as_deref(),
        Some(body.len().to_string().as_str())
    );
    assert!(report.transfer_encoding.is_none(), "body must not be chunked");
    assert_eq!(report.body_len, body.len());
}

#[test]
fn empty_post_declares_zero_length() {
    let addr = start_server();
    let resp = post("127.0.0.1", addr.port(), "/inspect", "").unwrap();
    let report: InspectReport = serde_json::from_slice(&resp.body).unwrap();
    assert_eq!(report.content_length.as_deref(), Some("0"));
    assert!(report.transfer_encoding.is_none(), "body must not be chunked");
    assert_eq!(report.body_len, 0);
}

#[test]
fn empty_response_body_is_a_defined_value() {
    let addr = start_server();
    let resp = get("127.0.0.1", addr.port(), "/empty").unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, Vec::<u8>::new());
    assert_eq!(resp.text(), "");
}

#[test]
fn response_bodies_are_independently_owned() {
    let addr = start_server();
    let mut first = get("127.0.0.1", addr.port(), "/ping").unwrap();
    let second = get("127.0.0.1", addr.port(), "/ping").unwrap();

    first.body.extend_from_slice(b" mutated");
    assert_eq!(second.body, b"pong");
}

#[test]
fn non_2xx_status_is_data_not_an_error() {
    let addr = start_server();
    let resp = get("127.0.0.1", addr.port(), "/no-such-route").unwrap();
    assert_eq!(resp.status, 404);
}

#[test]
fn connection_refused_is_a_transport_error() {
    // Bind then drop to get a port with nothing listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let err = get("127.0.0.1", port, "/ping").unwrap_err();
    assert!(matches!(err, HttpError::Transport(_)));
}

#[test]
fn requests_work_across_the_whole_lifecycle() {
    let addr = start_server();

    // Before init: falls back to a per-call agent.
    assert_eq!(get("127.0.0.1", addr.port(), "/ping").unwrap().status, 200);

    init();
    init();
    assert_eq!(get("127.0.0.1", addr.port(), "/ping").unwrap().status, 200);

    cleanup();
    cleanup();
    assert_eq!(get("127.0.0.1", addr.port(), "/ping").unwrap().status, 200);
}
