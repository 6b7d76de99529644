//! Messages carried by the bus and the errors raised while moving them.

use thiserror::Error;

/// A message delivered through a named queue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// Broker-assigned identifier. Doubles as the idempotency key on the
    /// consuming side.
    pub id: String,
    /// Message type (e.g., "video.encoded")
    pub message_type: String,
    /// Raw body, UTF-8 JSON for every queue this service reads.
    pub payload: Vec<u8>,
    /// Optional headers (correlation ids, dead-letter reasons, ...)
    pub metadata: Option<Vec<(String, String)>>,
    /// Delivery attempt, starting at 1 once the queue hands the message out.
    pub attempt: u32,
}

impl Message {
    /// Create a new message with the given type and payload.
    pub fn new(id: impl Into<String>, message_type: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            message_type: message_type.into(),
            payload,
            metadata: None,
            attempt: 0,
        }
    }

    /// Create a message with a string payload.
    pub fn with_string_payload(
        id: impl Into<String>,
        message_type: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self::new(id, message_type, payload.into().into_bytes())
    }

    /// Add a header to the message.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.into()));
        self
    }

    /// Look up a header by key.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.metadata
            .as_ref()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get the payload as a string (if valid UTF-8).
    pub fn payload_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.payload).ok()
    }
}

/// Error type for queue operations.
#[derive(Debug, Error)]
pub enum BusError {
    /// Ack/nack for a message that is not in flight on that queue
    #[error("message {id} is not in flight on queue {queue}")]
    UnknownDelivery { queue: String, id: String },
    /// Internal queue state lock was poisoned
    #[error("queue lock poisoned during {0}")]
    LockPoisoned(&'static str),
}
