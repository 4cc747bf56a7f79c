use actix_web::http::StatusCode;
use order_cache_engine::{message_channel, IdFormat};
use serde_json::Value;

use super::helpers::{cache_with_orders, configure, get_request};

#[actix_web::test]
async fn health_check() {
    let (publisher, _stream) = message_channel(1);
    let (status, body) = get_request("/health", configure(cache_with_orders(&[]), IdFormat::Numeric, publisher)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "👍️\n");
}

#[actix_web::test]
async fn fetch_cached_order() {
    let _ = env_logger::try_init().ok();
    let (publisher, _stream) = message_channel(1);
    let cache = cache_with_orders(&["42", "43"]);
    let (status, body) = get_request("/data?id=42", configure(cache, IdFormat::Numeric, publisher)).await;
    assert_eq!(status, StatusCode::OK);
    let order: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(order["order_uid"], "42");
    assert_eq!(order["delivery"]["city"], "Kiryat Mozkin");
    assert_eq!(order["payment"]["transaction"], "42");
    assert_eq!(order["items"].as_array().map(Vec::len), Some(2));
}

#[actix_web::test]
async fn leading_zeros_refer_to_the_same_order() {
    let (publisher, _stream) = message_channel(1);
    let cache = cache_with_orders(&["7"]);
    let (status, body) = get_request("/data?id=007", configure(cache, IdFormat::Numeric, publisher)).await;
    assert_eq!(status, StatusCode::OK);
    let order: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(order["order_uid"], "7");
}

#[actix_web::test]
async fn unknown_order_is_not_found() {
    let (publisher, _stream) = message_channel(1);
    let cache = cache_with_orders(&["42"]);
    let (status, body) = get_request("/data?id=99", configure(cache, IdFormat::Numeric, publisher)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"error":"The data was not found. Order #99 is not cached"}"#);
}

#[actix_web::test]
async fn missing_id_is_a_bad_request() {
    let (publisher, _stream) = message_channel(1);
    let cfg = configure(cache_with_orders(&["42"]), IdFormat::Numeric, publisher);
    let (status, body) = get_request("/data", cfg).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Invalid request. No order id was supplied"}"#);
}

#[actix_web::test]
async fn non_numeric_id_is_a_bad_request() {
    let (publisher, _stream) = message_channel(1);
    let cache = cache_with_orders(&["abc123"]);
    let (status, _) = get_request("/data?id=abc123", configure(cache, IdFormat::Numeric, publisher)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn any_id_format_accepts_tokens() {
    let (publisher, _stream) = message_channel(1);
    let cache = cache_with_orders(&["abc123"]);
    let (status, body) = get_request("/data?id=abc123", configure(cache, IdFormat::Any, publisher)).await;
    assert_eq!(status, StatusCode::OK);
    let order: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(order["order_uid"], "abc123");
}

#[actix_web::test]
async fn empty_id_is_a_bad_request() {
    let (publisher, _stream) = message_channel(1);
    let (status, _) = get_request("/data?id=", configure(cache_with_orders(&[]), IdFormat::Any, publisher)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
