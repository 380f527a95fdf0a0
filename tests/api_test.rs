//! HTTP API tests driving the router in-process.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use uptime_core::http::build_router;
use uptime_core::{Checker, CheckerConfig};

mod common;

fn router() -> (Arc<Checker>, Router) {
    let checker = Arc::new(Checker::new(CheckerConfig::default().with_workers(2)).unwrap());
    (checker.clone(), build_router(checker))
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_add_site() {
    let (checker, router) = router();

    let (status, body) = send(
        &router,
        post_json("/sites", json!({"url": "http://127.0.0.1:1/", "name": "local"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Site added successfully");
    assert_eq!(body["site"]["name"], "local");
    assert_eq!(body["site"]["expected_status"], 200);
    assert_eq!(body["site"]["interval_ms"], 30_000);
    assert!(!body["site"]["id"].as_str().unwrap().is_empty());
    assert_eq!(checker.list_endpoints().len(), 1);
}

#[tokio::test]
async fn test_add_site_rejects_bad_body() {
    let (checker, router) = router();

    let (status, body) = send(&router, post_json("/sites", json!({"name": "no url"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = send(
        &router,
        post_json("/sites", json!({"url": "http://127.0.0.1:1/", "name": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "field 'name' is required");

    assert!(checker.list_endpoints().is_empty());
}

#[tokio::test]
async fn test_add_sites_batch() {
    let (checker, router) = router();

    let (status, body) = send(
        &router,
        post_json(
            "/sites/batch",
            json!([
                {"url": "http://127.0.0.1:1/a", "name": "a", "check_interval": 5},
                {"url": "http://127.0.0.1:1/b", "name": "b", "expected_status": 204},
            ]),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["count"], 2);
    assert_eq!(body["sites"][0]["interval_ms"], 5_000);
    assert_eq!(body["sites"][1]["expected_status"], 204);
    assert_eq!(checker.list_endpoints().len(), 2);

    let (status, body) = send(
        &router,
        post_json("/sites/batch", json!([{"url": "", "name": "c"}])),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "site 0: field 'url' is required");
    assert_eq!(checker.list_endpoints().len(), 2);
}

#[tokio::test]
async fn test_list_sites() {
    let (_checker, router) = router();

    let (status, body) = send(&router, get("/sites")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    send(
        &router,
        post_json("/sites", json!({"url": "http://127.0.0.1:1/", "name": "one"})),
    )
    .await;

    let (_, body) = send(&router, get("/sites")).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "one");
}

#[tokio::test]
async fn test_logs_not_found() {
    let (_checker, router) = router();

    let (status, body) = send(&router, get("/sites/missing/logs")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No logs found for site");
}

#[tokio::test]
async fn test_logs_for_checked_site() {
    let addr = common::start_mock_backend(200).await;
    let (checker, router) = router();
    checker.start();

    let (_, body) = send(
        &router,
        post_json(
            "/sites",
            json!({"url": format!("http://{addr}/"), "name": "live", "check_interval": 1}),
        ),
    )
    .await;
    let id = body["site"]["id"].as_str().unwrap().to_string();

    common::next_result(&checker.result_stream(), Duration::from_secs(3)).await;

    let (status, body) = send(&router, get(&format!("/sites/{id}/logs?limit=5"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["site"]["id"], id.as_str());
    let logs = body["logs"].as_array().unwrap();
    assert!(!logs.is_empty() && logs.len() <= 5);
    assert_eq!(logs[0]["status"], "UP");
    assert_eq!(logs[0]["status_code"], 200);

    checker.stop().await;
}

#[tokio::test]
async fn test_health() {
    let (_checker, router) = router();

    let (status, body) = send(&router, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_bind_failure_still_allows_clean_stop() {
    let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = taken.local_addr().unwrap();

    let (checker, _router) = router();
    checker.start();

    let served = uptime_core::http::ApiServer::new(checker.clone())
        .serve(&addr.to_string(), std::future::pending())
        .await;
    assert!(served.is_err());

    tokio::time::timeout(Duration::from_secs(5), checker.stop())
        .await
        .expect("stop did not complete");
    assert_eq!(checker.state(), uptime_core::LifecycleState::Stopped);
    assert!(checker.result_stream().recv().await.is_none());
}
