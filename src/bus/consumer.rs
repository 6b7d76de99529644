//! Background consumer for a single named queue.
//!
//! `consume` spawns a thread that listens on one queue and hands every
//! delivery to a `MessageHandler`, one message at a time. Settlement rules:
//!
//! - handler succeeds: ack, remember the message id
//! - message id already handled: ack without calling the handler again
//! - handler fails with attempts left: nack, the queue redelivers
//! - handler fails on the last allowed attempt: dead-letter
//!
//! There is no delay between redeliveries.

use std::collections::{HashSet, VecDeque};
use std::fmt::Display;
use std::sync::mpsc::{channel, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, error, warn};

use super::{Listener, Message};

/// Something that can process a delivered message.
pub trait MessageHandler: Send + Sync {
    type Error: Display;

    fn on_message(&self, message: &Message) -> Result<(), Self::Error>;
}

impl<H: MessageHandler + ?Sized> MessageHandler for Arc<H> {
    type Error = H::Error;

    fn on_message(&self, message: &Message) -> Result<(), Self::Error> {
        (**self).on_message(message)
    }
}

/// Tuning for a consumer thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumerOptions {
    /// How long a single `listen` call may block.
    pub poll_interval: Duration,
    /// Total delivery attempts per message, the first one included.
    pub max_deliveries: u32,
    /// How many handled message ids are remembered for deduplication.
    pub dedup_capacity: usize,
}

impl Default for ConsumerOptions {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(50),
            max_deliveries: 3,
            dedup_capacity: 10_000,
        }
    }
}

/// Statistics from a consumer thread.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConsumerStats {
    /// Messages handled successfully.
    pub handled: usize,
    /// Failed handler invocations (one per failed attempt).
    pub failed: usize,
    /// Redeliveries of already handled messages that were skipped.
    pub duplicates: usize,
    /// Messages moved to the dead-letter queue.
    pub dead_lettered: usize,
    /// Number of poll cycles completed.
    pub polls: usize,
}

/// Handle to a background consumer thread. Drop or call `stop()` to shut down.
pub struct ConsumerHandle {
    stop_tx: Sender<()>,
    handle: Option<JoinHandle<ConsumerStats>>,
}

impl ConsumerHandle {
    /// Stop the consumer and wait for it to finish. Returns stats.
    pub fn stop(mut self) -> ConsumerStats {
        let _ = self.stop_tx.send(());
        match self.handle.take() {
            Some(handle) => handle.join().unwrap_or_default(),
            None => ConsumerStats::default(),
        }
    }
}

impl Drop for ConsumerHandle {
    fn drop(&mut self) {
        let _ = self.stop_tx.send(());
    }
}

/// Bounded memory of handled message ids, oldest evicted first.
struct ProcessedIds {
    order: VecDeque<String>,
    seen: HashSet<String>,
    capacity: usize,
}

impl ProcessedIds {
    fn new(capacity: usize) -> Self {
        Self {
            order: VecDeque::new(),
            seen: HashSet::new(),
            capacity,
        }
    }

    fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    fn insert(&mut self, id: &str) {
        if self.capacity == 0 || !self.seen.insert(id.to_string()) {
            return;
        }
        self.order.push_back(id.to_string());
        if self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.seen.remove(&oldest);
            }
        }
    }
}

/// Start consuming a named queue on a background thread.
///
/// ## Example
///
/// ```ignore
/// use std::sync::Arc;
/// use catalog_admin::bus::{consume, ConsumerOptions, InMemoryQueue};
///
/// let queue = InMemoryQueue::new();
/// let handle = consume(
///     Arc::new(listener),
///     "video.encoded.queue",
///     queue.clone(),
///     ConsumerOptions::default(),
/// );
///
/// // ... send messages ...
///
/// let stats = handle.stop();
/// ```
pub fn consume<H, L>(
    handler: H,
    queue_name: &str,
    listener: L,
    options: ConsumerOptions,
) -> ConsumerHandle
where
    H: MessageHandler + 'static,
    L: Listener + 'static,
{
    let queue = queue_name.to_string();
    let (stop_tx, stop_rx) = channel();

    let handle = thread::spawn(move || {
        let mut stats = ConsumerStats::default();
        let mut processed = ProcessedIds::new(options.dedup_capacity);
        let timeout_ms = options.poll_interval.as_millis() as u64;

        loop {
            match stop_rx.try_recv() {
                Ok(()) | Err(TryRecvError::Disconnected) => break,
                Err(TryRecvError::Empty) => {}
            }

            stats.polls += 1;

            let message = match listener.listen(&queue, timeout_ms) {
                Ok(Some(message)) => message,
                Ok(None) => continue,
                Err(e) => {
                    warn!(queue = %queue, error = %e, "listen failed");
                    thread::sleep(options.poll_interval);
                    continue;
                }
            };

            if processed.contains(&message.id) {
                debug!(queue = %queue, message_id = %message.id, "skipping already handled message");
                if let Err(e) = listener.ack(&queue, &message.id) {
                    warn!(queue = %queue, message_id = %message.id, error = %e, "ack failed");
                }
                stats.duplicates += 1;
                continue;
            }

            match handler.on_message(&message) {
                Ok(()) => {
                    if let Err(e) = listener.ack(&queue, &message.id) {
                        warn!(queue = %queue, message_id = %message.id, error = %e, "ack failed");
                    }
                    processed.insert(&message.id);
                    stats.handled += 1;
                }
                Err(e) => {
                    stats.failed += 1;
                    let reason = e.to_string();

                    if message.attempt >= options.max_deliveries {
                        error!(
                            queue = %queue,
                            message_id = %message.id,
                            attempt = message.attempt,
                            error = %reason,
                            "retry budget exhausted, dead-lettering message"
                        );
                        match listener.dead_letter(&queue, &message.id, &reason) {
                            Ok(()) => stats.dead_lettered += 1,
                            Err(e) => {
                                warn!(queue = %queue, message_id = %message.id, error = %e, "dead-letter failed")
                            }
                        }
                    } else {
                        warn!(
                            queue = %queue,
                            message_id = %message.id,
                            attempt = message.attempt,
                            max_deliveries = options.max_deliveries,
                            error = %reason,
                            "message handling failed, requesting redelivery"
                        );
                        if let Err(e) = listener.nack(&queue, &message.id, &reason) {
                            warn!(queue = %queue, message_id = %message.id, error = %e, "nack failed");
                        }
                    }
                }
            }
        }

        stats
    });

    ConsumerHandle {
        stop_tx,
        handle: Some(handle),
    }
}
