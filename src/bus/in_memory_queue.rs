//! In-memory queue for testing and single-process scenarios.
//!
//! This module provides a thread-safe set of named queues that implements
//! both `Sender` and `Listener`, useful for:
//! - Unit and integration testing without a broker
//! - Single-process deployments
//! - Development and prototyping

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use super::listener::{dead_letter_queue, DEAD_LETTER_REASON};
use super::{BusError, Listener, Message, Sender};

/// How many acknowledged ids are kept for inspection.
const ACK_LOG_CAPACITY: usize = 1024;

#[derive(Default)]
struct QueueState {
    /// Messages waiting for delivery, per queue
    ready: HashMap<String, VecDeque<Message>>,
    /// Delivered but not yet settled, keyed by (queue, message id)
    in_flight: HashMap<(String, String), Message>,
    /// Most recently acknowledged message ids, oldest first
    acked: VecDeque<String>,
}

/// In-memory named queues for testing and single-process scenarios.
///
/// Features:
/// - Thread-safe (clones share the same queues)
/// - FIFO delivery per queue name
/// - Nacked messages go back to the head of their queue with the attempt
///   counter preserved
/// - Dead-lettered messages land on `"{queue}.dlq"`
///
/// ## Example
///
/// ```
/// use catalog_admin::bus::{InMemoryQueue, Listener, Message, Sender};
///
/// let queue = InMemoryQueue::new();
/// queue
///     .send("video.encoded", Message::with_string_payload("msg-1", "video.encoded", "{}"))
///     .unwrap();
///
/// let message = queue.listen("video.encoded", 100).unwrap().unwrap();
/// assert_eq!(message.attempt, 1);
/// queue.ack("video.encoded", &message.id).unwrap();
/// assert_eq!(queue.acknowledged(), vec!["msg-1".to_string()]);
/// ```
#[derive(Clone, Default)]
pub struct InMemoryQueue {
    state: Arc<Mutex<QueueState>>,
}

impl InMemoryQueue {
    /// Create an empty set of queues.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self, operation: &'static str) -> Result<MutexGuard<'_, QueueState>, BusError> {
        self.state
            .lock()
            .map_err(|_| BusError::LockPoisoned(operation))
    }

    fn inspect(&self) -> MutexGuard<'_, QueueState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Messages waiting for delivery on a queue.
    pub fn messages(&self, queue: &str) -> Vec<Message> {
        self.inspect()
            .ready
            .get(queue)
            .map(|q| q.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of messages waiting for delivery on a queue.
    pub fn pending(&self, queue: &str) -> usize {
        self.inspect().ready.get(queue).map_or(0, VecDeque::len)
    }

    /// Number of delivered but unsettled messages on a queue.
    pub fn in_flight(&self, queue: &str) -> usize {
        self.inspect()
            .in_flight
            .keys()
            .filter(|(q, _)| q == queue)
            .count()
    }

    /// Messages parked on the dead-letter queue of `queue`.
    pub fn dead_letters(&self, queue: &str) -> Vec<Message> {
        self.messages(&dead_letter_queue(queue))
    }

    /// The last acknowledged message ids, in order of acknowledgement.
    pub fn acknowledged(&self) -> Vec<String> {
        self.inspect().acked.iter().cloned().collect()
    }

    /// Drop every queue and all bookkeeping (useful for test cleanup).
    pub fn clear(&self) {
        *self.inspect() = QueueState::default();
    }

    fn settle(
        state: &mut QueueState,
        queue: &str,
        message_id: &str,
    ) -> Result<Message, BusError> {
        state
            .in_flight
            .remove(&(queue.to_string(), message_id.to_string()))
            .ok_or_else(|| BusError::UnknownDelivery {
                queue: queue.to_string(),
                id: message_id.to_string(),
            })
    }
}

impl Sender for InMemoryQueue {
    fn send(&self, queue: &str, message: Message) -> Result<(), BusError> {
        self.state("send")?
            .ready
            .entry(queue.to_string())
            .or_default()
            .push_back(message);
        Ok(())
    }
}

impl Listener for InMemoryQueue {
    fn listen(&self, queue: &str, timeout_ms: u64) -> Result<Option<Message>, BusError> {
        let deadline = Instant::now() + Duration::from_millis(timeout_ms);

        loop {
            {
                let mut state = self.state("listen")?;
                let next = state.ready.get_mut(queue).and_then(VecDeque::pop_front);

                if let Some(mut message) = next {
                    message.attempt += 1;
                    state.in_flight.insert(
                        (queue.to_string(), message.id.clone()),
                        message.clone(),
                    );
                    return Ok(Some(message));
                }
            }

            if Instant::now() >= deadline {
                return Ok(None);
            }

            // Small sleep to avoid busy-waiting
            std::thread::sleep(Duration::from_millis(1));
        }
    }

    fn ack(&self, queue: &str, message_id: &str) -> Result<(), BusError> {
        let mut state = self.state("ack")?;
        Self::settle(&mut state, queue, message_id)?;
        if state.acked.len() == ACK_LOG_CAPACITY {
            state.acked.pop_front();
        }
        state.acked.push_back(message_id.to_string());
        Ok(())
    }

    fn nack(&self, queue: &str, message_id: &str, _reason: &str) -> Result<(), BusError> {
        let mut state = self.state("nack")?;
        let message = Self::settle(&mut state, queue, message_id)?;
        state
            .ready
            .entry(queue.to_string())
            .or_default()
            .push_front(message);
        Ok(())
    }

    fn dead_letter(&self, queue: &str, message_id: &str, reason: &str) -> Result<(), BusError> {
        let mut state = self.state("dead_letter")?;
        let message = Self::settle(&mut state, queue, message_id)?
            .with_metadata(DEAD_LETTER_REASON, reason);
        state
            .ready
            .entry(dead_letter_queue(queue))
            .or_default()
            .push_back(message);
        Ok(())
    }
}
