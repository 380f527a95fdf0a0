//! End-to-end checker tests against local mock backends.

use std::io::Write;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::Arc;
use std::time::Duration;

use uptime_core::{Checker, CheckerConfig, Endpoint, LifecycleState};

mod common;

fn fast_endpoint(id: &str, url: String, interval_ms: u64) -> Endpoint {
    Endpoint::new(id, id, url).with_interval(Duration::from_millis(interval_ms))
}

#[tokio::test]
async fn test_successful_check_reaches_stream() {
    let addr = common::start_mock_backend(200).await;

    let checker = Checker::new(CheckerConfig::default().with_workers(4)).unwrap();
    checker.register_endpoint(fast_endpoint("up", format!("http://{addr}/"), 15));
    checker.start();

    let stream = checker.result_stream();
    let result = common::next_result(&stream, Duration::from_secs(2)).await;

    assert_eq!(result.endpoint_id(), "up");
    assert_eq!(result.status_code, 200);
    assert!(result.success);
    assert!(result.error.is_none());

    checker.stop().await;
}

#[tokio::test]
async fn test_unexpected_status_is_failure() {
    let addr = common::start_mock_backend(503).await;

    let checker = Checker::new(CheckerConfig::default().with_workers(1)).unwrap();
    checker.register_endpoint(fast_endpoint("down", format!("http://{addr}/"), 15));
    checker.start();

    let result = common::next_result(&checker.result_stream(), Duration::from_secs(2)).await;
    assert_eq!(result.status_code, 503);
    assert!(!result.success);
    assert!(result.error.is_none());

    checker.stop().await;
}

#[tokio::test]
async fn test_unreachable_endpoint_reports_error() {
    let addr = common::unused_addr().await;

    let checker = Checker::new(
        CheckerConfig::default()
            .with_workers(1)
            .with_timeout(Duration::from_secs(1)),
    )
    .unwrap();
    checker.register_endpoint(fast_endpoint("gone", format!("http://{addr}/"), 20));
    checker.start();

    let result = common::next_result(&checker.result_stream(), Duration::from_secs(3)).await;
    assert_eq!(result.endpoint_id(), "gone");
    assert_eq!(result.status_code, 0);
    assert!(!result.success);
    assert!(result.error.as_deref().is_some_and(|e| !e.is_empty()));

    checker.stop().await;
}

#[tokio::test]
async fn test_history_is_bounded_by_retention() {
    let addr = common::start_mock_backend(200).await;

    let checker = Checker::new(
        CheckerConfig::default()
            .with_workers(1)
            .with_log_retention(10),
    )
    .unwrap();
    checker.register_endpoint(fast_endpoint("busy", format!("http://{addr}/"), 10));
    checker.start();

    let stream = checker.result_stream();
    for _ in 0..15 {
        common::next_result(&stream, Duration::from_secs(2)).await;
    }

    checker.stop().await;
    let mut last = None;
    while let Some(result) = stream.recv().await {
        last = Some(result);
    }

    let logs = checker.query_logs("busy", 100);
    assert_eq!(logs.len(), 10);
    assert!(logs.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    if let Some(last) = last {
        assert_eq!(logs.last(), Some(&last));
    }

    assert_eq!(checker.query_logs("busy", 3).len(), 3);
    assert_eq!(checker.query_logs("busy", 3)[2], logs[9]);
    assert!(checker.query_logs("unknown", 10).is_empty());
}

#[tokio::test]
async fn test_status_change_is_observed() {
    let status = Arc::new(AtomicU16::new(200));
    let addr = common::start_programmable_backend(status.clone()).await;

    let checker = Checker::new(CheckerConfig::default().with_workers(1)).unwrap();
    checker.register_endpoint(fast_endpoint("flappy", format!("http://{addr}/"), 10));
    checker.start();

    let stream = checker.result_stream();
    let first = common::next_result(&stream, Duration::from_secs(2)).await;
    assert!(first.success);

    status.store(500, Ordering::SeqCst);
    let mut saw_failure = false;
    for _ in 0..50 {
        let result = common::next_result(&stream, Duration::from_secs(2)).await;
        if result.status_code == 500 {
            assert!(!result.success);
            saw_failure = true;
            break;
        }
    }
    assert!(saw_failure);

    checker.stop().await;
}

#[tokio::test]
async fn test_register_while_running_schedules_endpoint() {
    let addr = common::start_mock_backend(200).await;

    let checker = Checker::new(CheckerConfig::default().with_workers(2)).unwrap();
    checker.start();
    assert_eq!(checker.state(), LifecycleState::Running);

    checker.register_endpoint(fast_endpoint("late", format!("http://{addr}/"), 15));

    let result = common::next_result(&checker.result_stream(), Duration::from_secs(2)).await;
    assert_eq!(result.endpoint_id(), "late");

    checker.stop().await;
}

#[tokio::test]
async fn test_stop_ends_stream() {
    let addr = common::start_mock_backend(200).await;

    let checker = Checker::new(CheckerConfig::default().with_workers(4)).unwrap();
    for i in 0..5 {
        checker.register_endpoint(fast_endpoint(&format!("ep-{i}"), format!("http://{addr}/"), 10));
    }
    checker.start();

    let stream = checker.result_stream();
    common::next_result(&stream, Duration::from_secs(2)).await;

    tokio::time::timeout(Duration::from_secs(5), checker.stop())
        .await
        .expect("stop did not complete");
    assert_eq!(checker.state(), LifecycleState::Stopped);

    // Buffered results drain, then the stream ends for good.
    let drained = tokio::time::timeout(Duration::from_secs(2), async {
        while stream.recv().await.is_some() {}
    })
    .await;
    assert!(drained.is_ok());
    assert!(stream.recv().await.is_none());

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(stream.try_recv().is_none());
}

#[tokio::test]
async fn test_restart_is_ignored() {
    let checker = Checker::new(CheckerConfig::default()).unwrap();
    checker.start();
    checker.stop().await;

    checker.start();
    assert_eq!(checker.state(), LifecycleState::Stopped);
}

#[tokio::test]
async fn test_defaults_applied_on_registration() {
    let checker = Checker::new(CheckerConfig::default()).unwrap();
    let endpoint = checker.register_endpoint(Endpoint::new("a", "A", "http://127.0.0.1:1/"));

    assert_eq!(endpoint.method, "GET");
    assert_eq!(endpoint.interval, Duration::from_secs(30));
    assert_eq!(endpoint.expected_status, 200);
    assert_eq!(checker.list_endpoints(), vec![endpoint]);
}

#[tokio::test]
async fn test_load_endpoints_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"name": "one", "url": "http://127.0.0.1:1/", "interval": 1}},
            {{"id": "fixed", "name": "two", "url": "http://127.0.0.1:1/", "method": "HEAD", "frequency": 5, "expected_status": 204}}
        ]"#
    )
    .unwrap();

    let checker = Checker::new(CheckerConfig::default()).unwrap();
    let count = checker.load_endpoints_file(file.path()).unwrap();
    assert_eq!(count, 2);

    let endpoints = checker.list_endpoints();
    let one = &endpoints[0];
    assert!(!one.id.is_empty());
    assert_eq!(one.interval, Duration::from_secs(1));
    assert_eq!(one.expected_status, 200);
    assert_eq!(one.method, "GET");

    let two = &endpoints[1];
    assert_eq!(two.id, "fixed");
    assert_eq!(two.method, "HEAD");
    assert_eq!(two.interval, Duration::from_secs(5));
    assert_eq!(two.expected_status, 204);
}

#[tokio::test]
async fn test_load_malformed_file_registers_nothing() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[{{\"name\": \"broken\"").unwrap();

    let checker = Checker::new(CheckerConfig::default()).unwrap();
    assert!(checker.load_endpoints_file(file.path()).is_err());
    assert!(checker.load_endpoints_file("/nonexistent/sites.json").is_err());
    assert!(checker.list_endpoints().is_empty());
}

#[tokio::test]
async fn test_oversized_interval_does_not_stall_others() {
    let addr = common::start_mock_backend(200).await;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"id": "slow", "url": "http://{addr}/", "interval": 18446744073709551615}}]"#
    )
    .unwrap();

    let checker = Checker::new(CheckerConfig::default().with_workers(2)).unwrap();
    assert_eq!(checker.load_endpoints_file(file.path()).unwrap(), 1);
    assert_eq!(checker.list_endpoints()[0].interval, Duration::from_secs(u64::MAX));
    checker.register_endpoint(fast_endpoint("fast", format!("http://{addr}/"), 15));
    checker.start();

    let result = common::next_result(&checker.result_stream(), Duration::from_secs(2)).await;
    assert_eq!(result.endpoint_id(), "fast");
    assert!(checker.query_logs("slow", 10).is_empty());

    tokio::time::timeout(Duration::from_secs(5), checker.stop())
        .await
        .expect("stop did not complete");
    assert_eq!(checker.state(), LifecycleState::Stopped);
}
