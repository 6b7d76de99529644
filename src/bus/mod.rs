//! Queue plumbing - point-to-point messaging abstractions.
//!
//! This module provides the traits the service consumes messages through,
//! an in-memory implementation, and the background consumer loop.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 consume() (per queue name)                   │
//! │  listen → MessageHandler → ack | nack | dead_letter          │
//! │  idempotency by message id, bounded delivery attempts        │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Sender + Listener Traits                     │
//! │  Sender: send(queue, message)                                │
//! │  Listener: listen(queue, timeout) / ack / nack / dead_letter │
//! └─────────────────────────────────────────────────────────────┘
//!          │                            │
//!          ▼                            ▼
//! ┌─────────────────┐        ┌─────────────────────────┐
//! │  InMemoryQueue  │        │  RabbitMQ / Kafka / ... │
//! │   (included)    │        │       (external)        │
//! └─────────────────┘        └─────────────────────────┘
//! ```

mod consumer;
mod in_memory_queue;
mod listener;
mod message;
mod sender;

pub use consumer::{consume, ConsumerHandle, ConsumerOptions, ConsumerStats, MessageHandler};
pub use in_memory_queue::InMemoryQueue;
pub use listener::{dead_letter_queue, Listener, DEAD_LETTER_REASON};
pub use message::{BusError, Message};
pub use sender::Sender;
