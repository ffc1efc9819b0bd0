//! Integration tests for the API client.
//!
//! Each test starts a throwaway `tiny_http` server on a loopback port that
//! answers a fixed number of requests with canned responses, then points an
//! [`ApiClient`] at it. This exercises the real request path: URL building,
//! query parameters, request bodies, status handling, and JSON decoding.

use std::io::Read;
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use tiny_http::{Header, Response, Server};

use aqtop_core::api::{ApiClient, ApiError, RagRequest, RecommendationRequest};

/// A request as seen by the mock server.
struct Seen {
    method: String,
    url: String,
    body: String,
}

/// Serves exactly one request with the given status and body, returning the
/// base URL, what the server saw, and the join handle.
fn serve_one(status: u16, body: &'static str) -> (String, thread::JoinHandle<Option<Seen>>) {
    let server = Server::http("127.0.0.1:0").expect("bind mock server");
    let addr = server.server_addr().to_ip().expect("ip listener");
    let base_url = format!("http://{}", addr);

    let handle = thread::spawn(move || {
        let mut request = server.recv().ok()?;
        let mut seen_body = String::new();
        let _ = request.as_reader().read_to_string(&mut seen_body);
        let seen = Seen {
            method: request.method().to_string(),
            url: request.url().to_string(),
            body: seen_body,
        };

        let header = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
            .expect("content-type header");
        let response = Response::from_string(body)
            .with_status_code(status)
            .with_header(header);
        let _ = request.respond(response);
        Some(seen)
    });

    (base_url, handle)
}

fn client(base_url: &str) -> ApiClient {
    ApiClient::new(base_url, Duration::from_secs(5))
}

#[test]
fn health_decodes_a_successful_response() {
    let (url, server) = serve_one(
        200,
        r#"{"status":"ok","environment":"dev","services":{"db":true,"cache":false}}"#,
    );

    let health = client(&url).health().expect("health should decode");
    assert_eq!(health.status, "ok");
    assert_eq!(health.environment, "dev");
    assert_eq!(health.services.get("db"), Some(&true));
    assert_eq!(health.services.get("cache"), Some(&false));

    let seen = server.join().unwrap().unwrap();
    assert_eq!(seen.method, "GET");
    assert_eq!(seen.url, "/health");
}

#[test]
fn non_2xx_with_valid_json_is_a_status_error() {
    // The body decodes fine; the status alone must fail the request.
    let (url, server) = serve_one(503, r#"{"detail":"service unavailable"}"#);

    let err = client(&url).current_status().unwrap_err();
    match err {
        ApiError::Status(code) => assert_eq!(code, 503),
        other => panic!("expected Status, got {:?}", other),
    }
    server.join().unwrap();
}

#[test]
fn malformed_body_is_a_decode_error() {
    let (url, server) = serve_one(200, "<html>definitely not json</html>");

    let err = client(&url).rag_stats().unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "got {:?}", err);
    server.join().unwrap();
}

#[test]
fn missing_required_field_is_a_decode_error() {
    // `document_count` is required for rag stats.
    let (url, server) = serve_one(200, r#"{"initialized":true}"#);

    let err = client(&url).rag_stats().unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "got {:?}", err);
    server.join().unwrap();
}

#[test]
fn unreachable_server_is_a_transport_error() {
    // Bind a port, then free it: connecting is refused.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{}", addr)).liveness().unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "got {:?}", err);
}

#[test]
fn liveness_accepts_any_2xx_body() {
    let (url, server) = serve_one(200, r#"{"message":"Pollution Monitoring API"}"#);
    client(&url).liveness().expect("2xx means online");
    server.join().unwrap();
}

#[test]
fn analyze_sends_the_days_parameter() {
    let (url, server) = serve_one(
        200,
        r#"{"stats":{"average":15.0,"max":42.1,"min":3.2,"trend":"rising"},
            "level_distribution":{"good":12,"moderate":4}}"#,
    );

    let report = client(&url).analyze(30).expect("analysis should decode");
    assert_eq!(report.stats.max, 42.1);
    assert_eq!(report.level_distribution.get("good"), Some(&12));

    let seen = server.join().unwrap().unwrap();
    assert_eq!(seen.url, "/api/pollution/analyze?days=30");
}

#[test]
fn sheets_data_omits_the_limit_when_unset() {
    let (url, server) = serve_one(200, r#"{"count":0,"data":[]}"#);

    let rows = client(&url).sheets_data(None).expect("rows should decode");
    assert_eq!(rows.count, 0);

    let seen = server.join().unwrap().unwrap();
    assert_eq!(seen.url, "/api/data/sheets/data");
}

#[test]
fn recommendations_posts_the_profile() {
    let (url, server) = serve_one(
        200,
        r#"{"recommendations":["reduce emissions"],"industrial_alerts":[
            {"alert_type":"CRITICAL","message":"stop operations"}]}"#,
    );

    let recs = client(&url)
        .recommendations(&RecommendationRequest {
            user_type: "industrial".to_string(),
            industry_type: Some("chemical".to_string()),
        })
        .expect("recommendations should decode");
    assert_eq!(recs.industrial_alerts[0].alert_type, "CRITICAL");

    let seen = server.join().unwrap().unwrap();
    assert_eq!(seen.method, "POST");
    assert_eq!(seen.url, "/api/pollution/recommendations");
    let body: serde_json::Value = serde_json::from_str(&seen.body).unwrap();
    assert_eq!(body["user_type"], "industrial");
    assert_eq!(body["industry_type"], "chemical");
}

#[test]
fn rag_query_posts_query_and_k() {
    let (url, server) = serve_one(200, r#"{"answer":"air was clean","sources":["row 1"]}"#);

    let answer = client(&url)
        .rag_query(&RagRequest {
            query: "how was last week?".to_string(),
            k: 5,
        })
        .expect("rag answer should decode");
    assert_eq!(answer.answer, "air was clean");
    assert_eq!(answer.sources, vec!["row 1"]);

    let seen = server.join().unwrap().unwrap();
    assert_eq!(seen.url, "/api/ai/rag/query");
    let body: serde_json::Value = serde_json::from_str(&seen.body).unwrap();
    assert_eq!(body["query"], "how was last week?");
    assert_eq!(body["k"], 5);
}

#[test]
fn reindex_posts_an_empty_body() {
    let (url, server) = serve_one(
        200,
        r#"{"status":"success","document_count":128,"message":"Reindexed from sheets"}"#,
    );

    let report = client(&url).rag_reindex().expect("report should decode");
    assert_eq!(report.status, "success");
    assert_eq!(report.document_count, 128);

    let seen = server.join().unwrap().unwrap();
    assert_eq!(seen.method, "POST");
    assert_eq!(seen.url, "/api/ai/rag/reindex");
    assert!(seen.body.is_empty());
}

#[test]
fn sheets_query_forwards_the_filter_verbatim() {
    let (url, server) = serve_one(200, r#"{"count":1,"data":[{"Status":"Bahaya"}]}"#);

    let filter = serde_json::json!({"Status": "Bahaya"});
    let result = client(&url)
        .sheets_query(&filter)
        .expect("query result should decode");
    assert_eq!(result["count"], 1);

    let seen = server.join().unwrap().unwrap();
    assert_eq!(seen.url, "/api/data/sheets/query");
    let body: serde_json::Value = serde_json::from_str(&seen.body).unwrap();
    assert_eq!(body, filter);
}
