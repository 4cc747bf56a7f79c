//! Supervised ingestion worker
//!
//! [`IngestionWorker`] owns the long-lived task that drains a [`MessageStream`]. Every payload is handed to the
//! [`IngestionApi`] in its own task, so a slow store write for one order never holds up the next message.
//!
//! Lifecycle: [`IngestionWorker::start`] spawns the consumer and returns a [`WorkerHandle`]. The consumer runs until
//! the stream closes or the handle's cancellation token fires. On cancellation the stream is closed to new payloads,
//! and payloads it had already accepted are still ingested. [`WorkerHandle::stop`] cancels the consumer and waits for
//! every in-flight message to finish.
use bytes::Bytes;
use log::*;
use tokio::task::JoinHandle;
use tokio_util::{sync::CancellationToken, task::TaskTracker};

use crate::{oc_api::ingestion_api::IngestionApi, stream::MessageStream, traits::OrderStore};

pub struct IngestionWorker<S, M> {
    api: IngestionApi<S>,
    stream: M,
    shutdown: CancellationToken,
}

impl<S, M> IngestionWorker<S, M>
where
    S: OrderStore + Clone + 'static,
    M: MessageStream + 'static,
{
    pub fn new(api: IngestionApi<S>, stream: M) -> Self {
        Self { api, stream, shutdown: CancellationToken::new() }
    }

    /// Ties the worker to an external shutdown signal, e.g. a process-wide token.
    pub fn with_shutdown(mut self, shutdown: CancellationToken) -> Self {
        self.shutdown = shutdown;
        self
    }

    /// Starts consuming messages. Do not drop the returned handle if you want a graceful shutdown.
    pub fn start(self) -> WorkerHandle {
        let shutdown = self.shutdown.clone();
        let tracker = TaskTracker::new();
        let consumer = tokio::spawn(self.run(tracker.clone()));
        WorkerHandle { shutdown, tracker, consumer: Some(consumer) }
    }

    async fn run(mut self, tracker: TaskTracker) {
        info!("📬️ Ingestion worker started");
        let mut received = 0u64;
        loop {
            tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => {
                    info!("📬️ Ingestion worker cancelled");
                    self.stream.close();
                    let before = received;
                    while let Some(payload) = self.stream.next_message().await {
                        received += 1;
                        self.dispatch(&tracker, payload, received);
                    }
                    if received > before {
                        info!("📬️ Dispatched {} messages that were queued before cancellation", received - before);
                    }
                    break;
                }
                next = self.stream.next_message() => match next {
                    Some(payload) => {
                        received += 1;
                        self.dispatch(&tracker, payload, received);
                    },
                    None => {
                        info!("📬️ Message stream closed");
                        break;
                    },
                },
            }
        }
        tracker.close();
        debug!("📬️ Ingestion worker received {received} messages. {} still in flight.", tracker.len());
    }

    fn dispatch(&self, tracker: &TaskTracker, payload: Bytes, seq: u64) {
        trace!("📬️ Handling message #{seq} ({} bytes)", payload.len());
        let api = self.api.clone();
        tracker.spawn(async move {
            let outcome = api.process(&payload).await;
            trace!("📬️ Message handled: {outcome:?}");
        });
    }
}

/// Control handle for a running [`IngestionWorker`].
pub struct WorkerHandle {
    shutdown: CancellationToken,
    tracker: TaskTracker,
    consumer: Option<JoinHandle<()>>,
}

impl WorkerHandle {
    pub fn cancellation_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// True once the consumer has stopped taking new messages and every message it took has been handled.
    pub fn is_finished(&self) -> bool {
        let consumer_done = self.consumer.as_ref().map_or(true, |c| c.is_finished());
        consumer_done && self.tracker.is_closed() && self.tracker.is_empty()
    }

    /// Waits for the stream to close on its own, then for in-flight messages to finish.
    pub async fn join(mut self) {
        self.wait_for_consumer().await;
        self.drain().await;
    }

    /// Cancels the consumer and waits for in-flight messages to finish.
    pub async fn stop(mut self) {
        debug!("📬️ Stopping ingestion worker");
        self.shutdown.cancel();
        self.wait_for_consumer().await;
        self.drain().await;
    }

    async fn wait_for_consumer(&mut self) {
        if let Some(consumer) = self.consumer.take() {
            if let Err(e) = consumer.await {
                warn!("📬️ Ingestion worker did not exit cleanly. {e}");
            }
        }
    }

    async fn drain(&self) {
        // The consumer closes the tracker itself, unless it panicked
        self.tracker.close();
        if !self.tracker.is_empty() {
            debug!("📬️ Waiting for {} in-flight messages", self.tracker.len());
        }
        self.tracker.wait().await;
        info!("📬️ Ingestion worker has shut down");
    }
}
