//! # Order cache server
//! This crate hosts the process around the order cache engine. It is responsible for:
//! Rebuilding the cache from the durable store on startup.
//! Running the ingestion worker that consumes inbound order payloads.
//! Serving cached orders over HTTP.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `/data?id={order_id}`: Fetches a cached order.
//! * `/channel/{name}`: Publishes a raw order payload onto the inbound channel.

pub mod cli;
pub mod config;
pub mod errors;

pub mod data_objects;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
