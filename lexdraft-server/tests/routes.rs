use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use httpmock::prelude::*;
use lexdraft::{BackendConfig, LegalAssistant};
use lexdraft_server::build_router;
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tower::ServiceExt;

fn app_for(backend_url: String) -> axum::Router {
    let config = BackendConfig::new().url(backend_url).model("deepseek-r1");
    let assistant = LegalAssistant::from_config(&config).expect("assistant");
    build_router(Arc::new(assistant))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn read_body(response: axum::response::Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf8")
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app_for("http://127.0.0.1:9/api/generate".to_string());
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&read_body(response).await).expect("json");
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn generate_returns_document_text() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/generate")
            .body_contains("Alice (tenant)")
            .body_contains("\"stream\":false");
        then.status(200).json_body(json!({"response": "LEASE", "done": true}));
    });

    let response = app_for(server.url("/api/generate"))
        .oneshot(post_json(
            "/legal/",
            json!({"doc_type": "lease", "party1": "Alice", "party2": "Bob", "duration": "12"}),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&read_body(response).await).expect("json");
    assert_eq!(body, json!({"response": "LEASE"}));
    mock.assert();
}

#[tokio::test]
async fn invalid_document_type_is_a_client_error() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/generate");
        then.status(200).json_body(json!({"response": "unused"}));
    });

    let app = app_for(server.url("/api/generate"));
    for uri in ["/legal/", "/legal/stream"] {
        let response = app
            .clone()
            .oneshot(post_json(
                uri,
                json!({"doc_type": "invalid-type-xyz", "party1": "A", "party2": "B"}),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body: Value = serde_json::from_str(&read_body(response).await).expect("json");
        assert!(body["detail"]
            .as_str()
            .expect("detail")
            .contains("Invalid document type"));
    }
    mock.assert_hits(0);
}

#[tokio::test]
async fn out_of_range_options_are_client_errors() {
    let app = app_for("http://127.0.0.1:9/api/generate".to_string());
    let response = app
        .oneshot(post_json(
            "/legal/",
            json!({"doc_type": "nda", "party1": "A", "party2": "B", "temperature": 5.0}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_party_names_are_rejected_by_the_endpoints() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/generate");
        then.status(200).json_body(json!({"response": "unused"}));
    });

    let app = app_for(server.url("/api/generate"));
    for uri in ["/legal/", "/legal/stream"] {
        let response = app
            .clone()
            .oneshot(post_json(
                uri,
                json!({"doc_type": "nda", "party1": "", "party2": "Globex"}),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body: Value = serde_json::from_str(&read_body(response).await).expect("json");
        assert!(body["detail"].as_str().expect("detail").contains("party1"));
    }
    mock.assert_hits(0);
}

#[tokio::test]
async fn whitespace_party_names_are_accepted() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/generate");
        then.status(200).json_body(json!({"response": "DRAFT"}));
    });

    let response = app_for(server.url("/api/generate"))
        .oneshot(post_json(
            "/legal/",
            json!({"doc_type": "nda", "party1": " ", "party2": "Globex"}),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    mock.assert();
}

#[tokio::test]
async fn backend_failure_is_a_bad_gateway() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/generate");
        then.status(500).body("model overloaded");
    });

    let response = app_for(server.url("/api/generate"))
        .oneshot(post_json(
            "/legal/",
            json!({"doc_type": "nda", "party1": "Acme", "party2": "Globex"}),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: Value = serde_json::from_str(&read_body(response).await).expect("json");
    let detail = body["detail"].as_str().expect("detail");
    assert!(detail.starts_with("Generation failed:"));
    assert!(detail.contains("500"));
    assert!(detail.contains("model overloaded"));
}

#[tokio::test]
async fn stream_relays_chunks_as_plain_text() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/generate")
            .body_contains("\"stream\":true");
        then.status(200).body(concat!(
            "{\"response\":\"A\"}\n",
            "{not json\n",
            "{\"response\":\"B\"}\n",
            "{\"done\":true}\n"
        ));
    });

    let response = app_for(server.url("/api/generate"))
        .oneshot(post_json(
            "/legal/stream",
            json!({"doc_type": "nda", "party1": "Acme", "party2": "Globex"}),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()["content-type"]
        .to_str()
        .expect("header")
        .starts_with("text/plain"));
    assert_eq!(read_body(response).await, "AB");
}

#[tokio::test]
async fn stream_failure_after_start_is_appended() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut received = Vec::new();
        let mut buf = [0_u8; 4096];
        loop {
            let read = socket.read(&mut buf).await.expect("read");
            if read == 0 {
                break;
            }
            received.extend_from_slice(&buf[..read]);
            if received.windows(4).any(|window| window == b"\r\n\r\n") {
                break;
            }
        }
        let chunk = "{\"response\":\"Partial\"}\n";
        let response = format!(
            "HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\n{:X}\r\n{}\r\n",
            chunk.len(),
            chunk
        );
        socket.write_all(response.as_bytes()).await.expect("write");
        let _ = socket.shutdown().await;
    });

    let response = app_for(format!("http://{addr}/api/generate"))
        .oneshot(post_json(
            "/legal/stream",
            json!({"doc_type": "nda", "party1": "Acme", "party2": "Globex"}),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_body(response).await;
    assert!(body.starts_with("Partial\n[STREAM ERROR] Backend request failed:"), "{body}");
}

#[tokio::test]
async fn stream_backend_status_error_is_reported_in_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/generate");
        then.status(503).body("model overloaded");
    });

    let response = app_for(server.url("/api/generate"))
        .oneshot(post_json(
            "/legal/stream",
            json!({"doc_type": "nda", "party1": "Acme", "party2": "Globex"}),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_body(response).await;
    assert!(body.starts_with("\n[STREAM ERROR]"), "{body}");
    assert!(body.contains("model overloaded"), "{body}");
}
