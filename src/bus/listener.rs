//! Listener trait for point-to-point messaging.

use super::message::{BusError, Message};

/// Name of the dead-letter queue paired with `queue`.
pub fn dead_letter_queue(queue: &str) -> String {
    format!("{}.dlq", queue)
}

/// Header set on dead-lettered messages.
pub const DEAD_LETTER_REASON: &str = "x-dead-letter-reason";

/// Trait for listening on a named queue (point-to-point).
///
/// A delivered message stays in flight until it is acknowledged, handed
/// back for redelivery with `nack`, or moved to the dead-letter queue.
pub trait Listener: Send + Sync {
    /// Listen for the next message on a named queue, blocking until one
    /// is available or the timeout expires.
    fn listen(&self, queue: &str, timeout_ms: u64) -> Result<Option<Message>, BusError>;

    /// Acknowledge that an in-flight message has been processed.
    fn ack(&self, queue: &str, message_id: &str) -> Result<(), BusError>;

    /// Reject an in-flight message; the queue redelivers it.
    fn nack(&self, queue: &str, message_id: &str, reason: &str) -> Result<(), BusError>;

    /// Move an in-flight message to the queue's dead-letter queue.
    fn dead_letter(&self, queue: &str, message_id: &str, reason: &str) -> Result<(), BusError>;
}
