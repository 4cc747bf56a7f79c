use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use log::*;
use order_cache_engine::{
    message_channel,
    IngestionApi,
    IngestionWorker,
    MessagePublisher,
    OrderCache,
    QueryApi,
    RecoveryApi,
    SqliteDatabase,
};

use crate::{
    config::ServerConfig,
    data_objects::InboundChannel,
    errors::ServerError,
    routes::{health, order_by_id, publish_order},
};

/// Runs the service until the HTTP server exits.
///
/// Startup is strictly ordered:
/// 1. Connect to the durable store and apply migrations. Failure here is fatal.
/// 2. Rebuild the cache from the store. This is best effort; an unreadable store leaves the cache empty.
/// 3. Start the ingestion worker.
/// 4. Start serving HTTP requests.
///
/// When the HTTP server stops, the ingestion worker is stopped and in-flight messages are allowed to finish.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let db = SqliteDatabase::new_with_url(config.database_url.reveal(), config.db_max_connections)
        .await
        .map_err(|e| ServerError::InitializeError(format!("Could not connect to the durable store. {e}")))?;
    db.migrate().await?;
    info!("🚀️ Durable store ready");

    let cache = OrderCache::new();
    let report = RecoveryApi::new(cache.clone(), db.clone()).restore().await;
    if !report.store_reachable {
        warn!("🚀️ Serving from an empty cache, since the durable store could not be read.");
    }

    let (publisher, stream) = message_channel(config.channel.buffer_size);
    let worker = IngestionWorker::new(IngestionApi::new(cache.clone(), db.clone()), stream).start();
    info!("🚀️ Consuming orders from channel '{}'", config.channel.name);

    let srv = create_server_instance(config, cache, publisher)?;
    let result = srv.await;
    info!("🚀️ HTTP server has stopped. Shutting down ingestion.");
    worker.stop().await;
    db.close().await;
    result.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(
    config: ServerConfig,
    cache: OrderCache,
    publisher: MessagePublisher,
) -> Result<Server, ServerError> {
    let id_format = config.id_format;
    let channel_name = config.channel.name.clone();
    let srv = HttpServer::new(move || {
        let query_api = QueryApi::new(cache.clone()).with_id_format(id_format);
        let channel = InboundChannel::new(channel_name.clone(), publisher.clone());
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("ocs::access_log"))
            .app_data(web::Data::new(query_api))
            .app_data(web::Data::new(channel))
            .service(health)
            .service(order_by_id)
            .service(publish_order)
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
