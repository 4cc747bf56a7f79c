//! Inbound message stream and the worker that drains it.
mod channel;
mod worker;

pub use channel::{message_channel, ChannelStream, MessagePublisher, MessageStream, PublishError};
pub use worker::{IngestionWorker, WorkerHandle};
