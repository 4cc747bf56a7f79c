//! Inbound order messages
//!
//! The message bus itself lives outside this crate. All the engine needs from it is a sequence of raw payloads, which
//! is what [`MessageStream`] describes. Delivery is at-least-once, so the same payload may turn up more than once.
//!
//! [`message_channel`] provides an in-process implementation backed by a bounded tokio channel. Any number of
//! [`MessagePublisher`]s feed one [`ChannelStream`]; once the last publisher is dropped, the stream ends.
use async_trait::async_trait;
use bytes::Bytes;
use log::*;
use thiserror::Error;
use tokio::sync::mpsc;

#[async_trait]
pub trait MessageStream: Send {
    /// Waits for the next payload. `None` means the stream has closed and no more messages will arrive.
    async fn next_message(&mut self) -> Option<Bytes>;

    /// Stops accepting new payloads. Payloads that were already accepted are still returned by
    /// [`MessageStream::next_message`], after which it returns `None`.
    fn close(&mut self);
}

#[derive(Debug, Clone, Error)]
pub enum PublishError {
    #[error("The inbound message channel has been closed")]
    ChannelClosed,
}

pub fn message_channel(buffer_size: usize) -> (MessagePublisher, ChannelStream) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (MessagePublisher { sender }, ChannelStream { listener: receiver })
}

pub struct ChannelStream {
    listener: mpsc::Receiver<Bytes>,
}

#[async_trait]
impl MessageStream for ChannelStream {
    async fn next_message(&mut self) -> Option<Bytes> {
        self.listener.recv().await
    }

    fn close(&mut self) {
        self.listener.close();
    }
}

#[derive(Clone)]
pub struct MessagePublisher {
    sender: mpsc::Sender<Bytes>,
}

impl MessagePublisher {
    /// Queues a payload for ingestion. Waits for capacity if the channel is full.
    pub async fn publish<B: Into<Bytes>>(&self, payload: B) -> Result<(), PublishError> {
        self.sender.send(payload.into()).await.map_err(|e| {
            error!("📬️ Failed to publish message: {e}");
            PublishError::ChannelClosed
        })
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
