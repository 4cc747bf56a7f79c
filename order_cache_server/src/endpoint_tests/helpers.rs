use actix_web::{body::MessageBody, http::StatusCode, test, test::TestRequest, web, web::ServiceConfig, App};
use log::debug;
use order_cache_engine::{
    db_types::Order,
    test_utils::fixtures::sample_order_json,
    IdFormat,
    MessagePublisher,
    OrderCache,
    QueryApi,
};

use crate::{
    data_objects::InboundChannel,
    routes::{health, order_by_id, publish_order},
};

pub const TEST_CHANNEL: &str = "orders";

/// Builds a cache holding one sample order for each of the given ids.
pub fn cache_with_orders(ids: &[&str]) -> OrderCache {
    let cache = OrderCache::new();
    for id in ids {
        let order = Order::from_payload(sample_order_json(id).as_bytes()).expect("fixture should decode");
        cache.put(order);
    }
    cache
}

pub fn configure(
    cache: OrderCache,
    id_format: IdFormat,
    publisher: MessagePublisher,
) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg: &mut ServiceConfig| {
        cfg.app_data(web::Data::new(QueryApi::new(cache).with_id_format(id_format)))
            .app_data(web::Data::new(InboundChannel::new(TEST_CHANNEL, publisher)))
            .service(health)
            .service(order_by_id)
            .service(publish_order);
    }
}

pub async fn send_request<F>(req: TestRequest, configure: F) -> (StatusCode, String)
where F: FnOnce(&mut ServiceConfig) {
    let app = App::new().configure(configure);
    let service = test::init_service(app).await;
    debug!("Making request");
    let res = test::call_service(&service, req.to_request()).await;
    let status = res.status();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    (status, body)
}

pub async fn get_request<F>(path: &str, configure: F) -> (StatusCode, String)
where F: FnOnce(&mut ServiceConfig) {
    send_request(TestRequest::get().uri(path), configure).await
}

pub async fn post_request<F>(path: &str, body: impl Into<String>, configure: F) -> (StatusCode, String)
where F: FnOnce(&mut ServiceConfig) {
    let req = TestRequest::post().uri(path).set_payload(body.into());
    send_request(req, configure).await
}
