use std::fmt::Display;

use order_cache_engine::MessagePublisher;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse {
    pub success: bool,
    pub message: String,
}

impl JsonResponse {
    pub fn success<S: Display>(message: S) -> Self {
        Self { success: true, message: message.to_string() }
    }
}

/// Query string for `/data`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

/// The inbound channel, as seen by the publish route.
#[derive(Clone)]
pub struct InboundChannel {
    pub name: String,
    pub publisher: MessagePublisher,
}

impl InboundChannel {
    pub fn new<S: Into<String>>(name: S, publisher: MessagePublisher) -> Self {
        Self { name: name.into(), publisher }
    }
}
