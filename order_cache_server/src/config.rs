use std::env;

use log::*;
use ocs_common::{env_or_default, Secret};
use order_cache_engine::{sqlite::db::SQLITE_DB_URL, IdFormat};

const DEFAULT_OCS_HOST: &str = "127.0.0.1";
const DEFAULT_OCS_PORT: u16 = 8080;
const DEFAULT_OCS_CHANNEL: &str = "orders";
const DEFAULT_CHANNEL_BUFFER: usize = 1024;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// The durable store. The URL may carry credentials, so it is never logged.
    pub database_url: Secret<String>,
    pub db_max_connections: u32,
    pub channel: ChannelConfig,
    /// Which identifiers `/data` accepts.
    pub id_format: IdFormat,
}

#[derive(Clone, Debug)]
pub struct ChannelConfig {
    /// Payloads are accepted on `/channel/{name}` only for this name.
    pub name: String,
    /// Number of payloads that may be queued before publishers have to wait.
    pub buffer_size: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self { name: DEFAULT_OCS_CHANNEL.to_string(), buffer_size: DEFAULT_CHANNEL_BUFFER }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_OCS_HOST.to_string(),
            port: DEFAULT_OCS_PORT,
            database_url: Secret::new(SQLITE_DB_URL.to_string()),
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            channel: ChannelConfig::default(),
            id_format: IdFormat::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("OCS_HOST").ok().unwrap_or_else(|| DEFAULT_OCS_HOST.into());
        let port = env_or_default("OCS_PORT", DEFAULT_OCS_PORT);
        let database_url = env::var("OCS_DATABASE_URL").ok().unwrap_or_else(|| {
            warn!("🪛️ OCS_DATABASE_URL is not set. Using the default local database, {SQLITE_DB_URL}.");
            SQLITE_DB_URL.to_string()
        });
        let db_max_connections = env_or_default("OCS_DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS).max(1);
        let channel = ChannelConfig::from_env_or_default();
        let id_format = env_or_default("OCS_ID_FORMAT", IdFormat::default());
        info!("🪛️ Order ids on /data must be {id_format}");
        Self {
            host,
            port,
            database_url: Secret::new(database_url),
            db_max_connections,
            channel,
            id_format,
        }
    }
}

impl ChannelConfig {
    pub fn from_env_or_default() -> Self {
        let name = match env::var("OCS_CHANNEL").map(|s| s.trim().to_string()) {
            Ok(s) if !s.is_empty() && !s.contains('/') => s,
            Ok(s) => {
                warn!("🪛️ '{s}' is not a usable channel name. Using '{DEFAULT_OCS_CHANNEL}' instead.");
                DEFAULT_OCS_CHANNEL.to_string()
            },
            Err(_) => {
                info!("🪛️ OCS_CHANNEL is not set. Using '{DEFAULT_OCS_CHANNEL}'.");
                DEFAULT_OCS_CHANNEL.to_string()
            },
        };
        // A zero-capacity channel would panic in tokio
        let buffer_size = env_or_default("OCS_CHANNEL_BUFFER", DEFAULT_CHANNEL_BUFFER).max(1);
        info!("🪛️ Accepting orders on channel '{name}' (buffer of {buffer_size})");
        Self { name, buffer_size }
    }
}
