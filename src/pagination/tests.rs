//! Tests for pagination module

use super::*;
use crate::http::{HttpRequest, HttpResponse};
use crate::query::{keys, Direction};
use crate::request::GetRequest;
use crate::testing::{query_value, StubTransport};
use crate::Error;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

const ENDPOINT: &str = "https://data.ct.gov/resource/y6p2-px98";

fn is_count_query(request: &HttpRequest) -> bool {
    query_value(request, keys::SELECT).as_deref() == Some(crate::request::COUNT_COLUMN)
}

/// Stub answering count queries with `total` and page queries with
/// `"<offset>:<limit>"`
fn counting_stub(total: u64) -> Arc<StubTransport> {
    StubTransport::new(move |request| {
        if is_count_query(request) {
            return Ok(HttpResponse::from_bytes(
                200,
                format!(r#"[{{"count":"{total}"}}]"#),
            ));
        }
        let offset = query_value(request, keys::OFFSET).unwrap_or_else(|| "0".to_string());
        let limit = query_value(request, keys::LIMIT).unwrap_or_default();
        Ok(HttpResponse::from_bytes(200, format!("{offset}:{limit}")))
    })
}

fn ordered_request(stub: &Arc<StubTransport>) -> GetRequest {
    let mut request = GetRequest::with_transport(ENDPOINT, "", stub.clone()).unwrap();
    request.query.add_order("farm_name", Direction::Ascending);
    request
}

fn page_calls(stub: &StubTransport) -> usize {
    stub.requests().iter().filter(|r| !is_count_query(r)).count()
}

// ============================================================================
// Window / Batch Tests
// ============================================================================

#[test]
fn test_window_bounds() {
    let window = Window::new(20, 10);
    assert_eq!(window.end(), 30);
    assert_eq!(window.range(), 20..30);
}

#[test]
fn test_batch_done() {
    assert!(Batch::Done.is_done());
    assert!(Batch::Done.into_page().is_none());
}

// ============================================================================
// OffsetFetcher Tests
// ============================================================================

#[tokio::test]
async fn test_fetcher_counts_once() {
    let stub = counting_stub(25);
    let fetcher = OffsetFetcher::new(ordered_request(&stub)).await.unwrap();

    assert_eq!(fetcher.total(), 25);
    assert_eq!(fetcher.offset(), 0);
    assert_eq!(fetcher.remaining(), 25);
    assert!(!fetcher.is_exhausted());
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn test_fetcher_sequential_windows() {
    let stub = counting_stub(25);
    let fetcher = OffsetFetcher::new(ordered_request(&stub)).await.unwrap();

    let mut windows = Vec::new();
    let mut bodies = Vec::new();
    while let Some((window, response)) = fetcher.next(10).await.unwrap().into_page() {
        windows.push(window);
        bodies.push(response.text().await.unwrap());
    }

    assert_eq!(
        windows,
        vec![Window::new(0, 10), Window::new(10, 10), Window::new(20, 5)]
    );
    assert_eq!(bodies, vec!["0:10", "10:10", "20:5"]);
    assert!(fetcher.is_exhausted());
    assert_eq!(fetcher.remaining(), 0);
}

#[tokio::test]
async fn test_fetcher_clamps_oversized_batch() {
    let stub = counting_stub(7);
    let fetcher = OffsetFetcher::new(ordered_request(&stub)).await.unwrap();

    let (window, _) = fetcher.next(1000).await.unwrap().into_page().unwrap();
    assert_eq!(window, Window::new(0, 7));
    assert!(fetcher.next(1000).await.unwrap().is_done());
}

#[tokio::test]
async fn test_fetcher_zero_total_is_done_without_requests() {
    let stub = counting_stub(0);
    let fetcher = OffsetFetcher::new(ordered_request(&stub)).await.unwrap();

    assert!(fetcher.is_exhausted());
    assert!(fetcher.next(10).await.unwrap().is_done());
    assert_eq!(page_calls(&stub), 0);
}

#[tokio::test]
async fn test_fetcher_done_is_idempotent() {
    let stub = counting_stub(3);
    let fetcher = OffsetFetcher::new(ordered_request(&stub)).await.unwrap();

    fetcher.next(3).await.unwrap();
    for _ in 0..3 {
        assert!(fetcher.next(3).await.unwrap().is_done());
    }
    assert!(fetcher.next(0).await.unwrap().is_done());
    assert_eq!(page_calls(&stub), 1);
}

#[tokio::test]
async fn test_fetcher_requires_order() {
    let stub = counting_stub(10);
    let request = GetRequest::with_transport(ENDPOINT, "", stub.clone()).unwrap();
    let fetcher = OffsetFetcher::new(request).await.unwrap();

    let err = fetcher.next(5).await.unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(fetcher.offset(), 0);
    assert_eq!(page_calls(&stub), 0);
}

#[tokio::test]
async fn test_fetcher_rejects_zero_batch() {
    let stub = counting_stub(10);
    let fetcher = OffsetFetcher::new(ordered_request(&stub)).await.unwrap();

    let err = fetcher.next(0).await.unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(fetcher.offset(), 0);
}

#[tokio::test]
async fn test_fetcher_count_failure() {
    let stub = StubTransport::respond(500, "count failed");
    let err = OffsetFetcher::new(ordered_request(&stub)).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_fetcher_failed_window_is_consumed() {
    let pages = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&pages);
    let stub = StubTransport::new(move |request| {
        if is_count_query(request) {
            return Ok(HttpResponse::from_bytes(200, r#"[{"count":"20"}]"#));
        }
        if seen.fetch_add(1, Ordering::SeqCst) == 0 {
            Ok(HttpResponse::from_bytes(503, "unavailable"))
        } else {
            Ok(HttpResponse::from_bytes(200, "[]"))
        }
    });
    let fetcher = OffsetFetcher::new(ordered_request(&stub)).await.unwrap();

    let err = fetcher.next(10).await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(fetcher.offset(), 10);

    let (window, _) = fetcher.next(10).await.unwrap().into_page().unwrap();
    assert_eq!(window, Window::new(10, 10));
    assert!(fetcher.next(10).await.unwrap().is_done());
}

#[tokio::test]
async fn test_fetcher_keeps_filters_and_clauses() {
    let stub = counting_stub(4);
    let mut request = ordered_request(&stub);
    request.filters.insert("item", "Radishes");
    request.query.select = vec!["farm_name".to_string()];
    let fetcher = OffsetFetcher::new(request).await.unwrap();

    fetcher.next(2).await.unwrap();
    fetcher.next(2).await.unwrap();

    let pages: Vec<_> = stub
        .requests()
        .into_iter()
        .filter(|r| !is_count_query(r))
        .collect();
    assert_eq!(pages.len(), 2);
    assert_eq!(query_value(&pages[1], "item").as_deref(), Some("Radishes"));
    assert_eq!(
        query_value(&pages[1], keys::SELECT).as_deref(),
        Some("farm_name")
    );
    assert_eq!(query_value(&pages[1], keys::OFFSET).as_deref(), Some("2"));
    assert_eq!(query_value(&pages[1], keys::LIMIT).as_deref(), Some("2"));

    let request = fetcher.into_inner();
    assert_eq!(request.query.select, vec!["farm_name".to_string()]);
}

// ============================================================================
// Concurrency Tests
// ============================================================================

fn assert_exact_cover(windows: &[Window], total: u64) {
    let mut covered = HashSet::new();
    for window in windows {
        for record in window.range() {
            assert!(covered.insert(record), "record {record} fetched twice");
        }
    }
    assert_eq!(covered.len() as u64, total);
    assert!(covered.iter().all(|r| *r < total));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_workers_cover_range_exactly_once() {
    for (total, batch, workers) in [(1000, 7, 8), (999, 100, 3), (5, 10, 6), (64, 1, 16)] {
        let stub = counting_stub(total);
        let fetcher = Arc::new(OffsetFetcher::new(ordered_request(&stub)).await.unwrap());
        let windows = Arc::new(Mutex::new(Vec::new()));

        let mut handles = Vec::new();
        for _ in 0..workers {
            let fetcher = Arc::clone(&fetcher);
            let windows = Arc::clone(&windows);
            handles.push(tokio::spawn(async move {
                while let Some((window, response)) = fetcher.next(batch).await.unwrap().into_page()
                {
                    let body = response.text().await.unwrap();
                    assert_eq!(body, format!("{}:{}", window.offset, window.len));
                    windows.lock().unwrap().push(window);
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let windows = windows.lock().unwrap();
        assert_exact_cover(&windows, total);
        assert!(fetcher.is_exhausted());
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_fetch_concurrently_handles_every_page() {
    let stub = counting_stub(95);
    let fetcher = Arc::new(OffsetFetcher::new(ordered_request(&stub)).await.unwrap());
    let windows = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&windows);
    let pages = fetcher
        .fetch_concurrently(4, 10, move |window, response| {
            let sink = Arc::clone(&sink);
            async move {
                response.text().await?;
                sink.lock().unwrap().push(window);
                Ok::<(), Error>(())
            }
        })
        .await
        .unwrap();

    assert_eq!(pages, 10);
    assert_exact_cover(&windows.lock().unwrap(), 95);
}

#[tokio::test]
async fn test_fetch_concurrently_stops_on_handler_error() {
    let stub = counting_stub(100);
    let fetcher = Arc::new(OffsetFetcher::new(ordered_request(&stub)).await.unwrap());

    let err = fetcher
        .fetch_concurrently(2, 10, |window, _response| async move {
            if window.offset >= 30 {
                Err(Error::decode("bad page"))
            } else {
                Ok(())
            }
        })
        .await
        .unwrap_err();

    assert!(err.is_decode());
    assert!(page_calls(&stub) < 10);
}

#[tokio::test]
async fn test_fetch_concurrently_propagates_config_error() {
    let stub = counting_stub(10);
    let request = GetRequest::with_transport(ENDPOINT, "", stub).unwrap();
    let fetcher = Arc::new(OffsetFetcher::new(request).await.unwrap());

    let err = fetcher
        .fetch_concurrently(3, 5, |_, _| async { Ok(()) })
        .await
        .unwrap_err();
    assert!(err.is_configuration());
}
