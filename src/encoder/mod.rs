//! Encoder integration: result payloads, their mapping to a media status
//! command, and the queue listener that ties both to the use case.

mod listener;
mod mapper;
pub mod message;

pub use listener::{ListenerError, VideoEncoderListener, LISTENER_ID};
pub use message::{
    VideoEncoderCompleted, VideoEncoderError, VideoEncoderResult, VideoMessage, VideoMetadata,
};
