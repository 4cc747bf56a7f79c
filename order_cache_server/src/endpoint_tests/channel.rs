use std::{sync::Arc, time::Duration};

use actix_web::http::StatusCode;
use order_cache_engine::{
    db_types::OrderId,
    message_channel,
    test_utils::fixtures::sample_order_json,
    IdFormat,
    IngestionApi,
    IngestionWorker,
    MemoryStore,
    MessageStream,
    OrderCache,
};

use super::helpers::{configure, get_request, post_request};

#[actix_web::test]
async fn published_order_becomes_queryable() {
    let _ = env_logger::try_init().ok();
    let store = Arc::new(MemoryStore::new());
    let cache = OrderCache::new();
    let (publisher, stream) = message_channel(4);
    let worker = IngestionWorker::new(IngestionApi::new(cache.clone(), Arc::clone(&store)), stream).start();

    let cfg = configure(cache.clone(), IdFormat::Numeric, publisher.clone());
    let (status, body) = post_request("/channel/orders", sample_order_json("1001"), cfg).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body, r#"{"success":true,"message":"Payload queued for ingestion"}"#);

    let id = OrderId::from("1001");
    tokio::time::timeout(Duration::from_secs(5), async {
        while !cache.contains(&id) {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("published order should be ingested");

    let cfg = configure(cache.clone(), IdFormat::Numeric, publisher.clone());
    let (status, body) = get_request("/data?id=1001", cfg).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#""order_uid":"1001""#));

    drop(publisher);
    worker.stop().await;
    assert_eq!(store.len(), 1);
}

#[actix_web::test]
async fn undecodable_payload_is_accepted_but_dropped() {
    let store = Arc::new(MemoryStore::new());
    let cache = OrderCache::new();
    let (publisher, stream) = message_channel(4);
    let worker = IngestionWorker::new(IngestionApi::new(cache.clone(), Arc::clone(&store)), stream).start();

    let cfg = configure(cache.clone(), IdFormat::Numeric, publisher.clone());
    let (status, _) = post_request("/channel/orders", "{not json", cfg).await;
    assert_eq!(status, StatusCode::ACCEPTED);

    drop(publisher);
    worker.join().await;
    assert!(cache.is_empty());
    assert!(store.is_empty());
}

#[actix_web::test]
async fn unknown_channel_is_not_found() {
    let (publisher, mut stream) = message_channel(4);
    let cfg = configure(OrderCache::new(), IdFormat::Numeric, publisher);
    let (status, _) = post_request("/channel/payments", sample_order_json("1"), cfg).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    // Nothing was queued, and the only publisher is gone
    assert!(stream.next_message().await.is_none());
}

#[actix_web::test]
async fn empty_payload_is_a_bad_request() {
    let (publisher, _stream) = message_channel(4);
    let cfg = configure(OrderCache::new(), IdFormat::Numeric, publisher);
    let (status, body) = post_request("/channel/orders", "", cfg).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Could not read request body: The payload is empty"}"#);
}

#[actix_web::test]
async fn closed_channel_is_unavailable() {
    let (publisher, stream) = message_channel(4);
    drop(stream);
    let cfg = configure(OrderCache::new(), IdFormat::Numeric, publisher);
    let (status, _) = post_request("/channel/orders", sample_order_json("1"), cfg).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
