//! Request handler definitions
//!
//! Define each route and it handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! A note about performance:
//! Since each worker thread processes its requests sequentially, handlers which block the current thread will cause the
//! current worker to stop processing new requests. Cache lookups only hold a read lock for the duration of a map
//! lookup, so `/data` is safe to serve synchronously. Anything that may wait (e.g. publishing into a full channel)
//! must be awaited.
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use bytes::Bytes;
use log::*;
use order_cache_engine::QueryApi;

use crate::{
    data_objects::{IdQuery, InboundChannel, JsonResponse},
    errors::ServerError,
};

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------   Orders  ----------------------------------------------------
/// `GET /data?id={order_id}` returns the cached order as JSON.
///
/// * `400` if `id` is missing or not a valid order id for the configured id format;
/// * `404` if no order with that id is cached.
///
/// Only the cache is consulted. Orders that were ingested but failed to persist are still served.
#[get("/data")]
pub async fn order_by_id(req: HttpRequest, api: web::Data<QueryApi>) -> Result<HttpResponse, ServerError> {
    let query = web::Query::<IdQuery>::from_query(req.query_string()).map_err(|e| {
        debug!("💻️ Could not parse query string '{}'. {e}", req.query_string());
        ServerError::InvalidIdentifier(e.to_string())
    })?;
    debug!("💻️ GET order_by_id({:?})", query.id);
    let order = api.lookup(query.id.as_deref())?;
    Ok(HttpResponse::Ok().json(order.as_ref()))
}

/// `POST /channel/{name}` queues the request body for ingestion.
///
/// The body is not validated here; undecodable payloads are dropped by the ingestion pipeline, exactly as they would
/// be if they had come off the message bus. A `202` therefore only means the payload was queued.
#[post("/channel/{name}")]
pub async fn publish_order(
    path: web::Path<String>,
    body: Bytes,
    channel: web::Data<InboundChannel>,
) -> Result<HttpResponse, ServerError> {
    let name = path.into_inner();
    if name != channel.name {
        debug!("💻️ Rejected payload for unknown channel '{name}'");
        return Err(ServerError::UnknownChannel(name));
    }
    if body.is_empty() {
        return Err(ServerError::InvalidRequestBody("The payload is empty".into()));
    }
    trace!("💻️ Queuing {} byte payload on '{name}'", body.len());
    channel.publisher.publish(body).await?;
    Ok(HttpResponse::Accepted().json(JsonResponse::success("Payload queued for ingestion")))
}
