//! Queue listener for encoder results.
//!
//! ```text
//! LISTENING → DECODING → DISPATCHING → ACK | NACK
//! ```
//!
//! Decode and use-case failures are returned to the transport, which decides
//! whether the delivery is retried or dead-lettered.

use thiserror::Error;
use tracing::{error, info, warn};

use super::message::VideoEncoderResult;
use crate::application::media_status::{MediaStatusError, UpdateMediaStatus, UpdateMediaStatusCommand};
use crate::bus::{Message, MessageHandler};
use crate::codec::{CodecError, JsonCodec, MessageCodec};

/// Identifier of the encoder result consumer.
pub const LISTENER_ID: &str = "videoEncodedListener";

#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("failed to decode encoder result: {0}")]
    Decoding(#[from] CodecError),
    #[error(transparent)]
    UseCase(#[from] MediaStatusError),
}

pub struct VideoEncoderListener<U, C = JsonCodec> {
    use_case: U,
    codec: C,
}

impl<U: UpdateMediaStatus> VideoEncoderListener<U> {
    pub fn new(use_case: U) -> Self {
        Self::with_codec(use_case, JsonCodec)
    }
}

impl<U: UpdateMediaStatus, C: MessageCodec> VideoEncoderListener<U, C> {
    pub fn with_codec(use_case: U, codec: C) -> Self {
        Self { use_case, codec }
    }

    /// Decode one encoder result and apply it. Exactly one use-case call per
    /// decoded message.
    pub fn on_video_encoded_message(&self, body: &[u8]) -> Result<(), ListenerError> {
        let result: VideoEncoderResult = self.codec.decode(body).inspect_err(|e| {
            warn!(listener = LISTENER_ID, error = %e, "undecodable encoder result");
        })?;

        match &result {
            VideoEncoderResult::Completed(completed) => info!(
                listener = LISTENER_ID,
                video_id = %completed.id,
                resource_id = %completed.video.resource_id,
                output_bucket = %completed.output_bucket,
                "video encoding completed"
            ),
            VideoEncoderResult::Error(failure) => error!(
                listener = LISTENER_ID,
                resource_id = %failure.message.resource_id,
                file_path = %failure.message.file_path,
                cause = %failure.error,
                "video encoding failed"
            ),
        }

        let command = UpdateMediaStatusCommand::from(&result);
        self.use_case.execute(command)?;
        Ok(())
    }
}

impl<U: UpdateMediaStatus, C: MessageCodec> MessageHandler for VideoEncoderListener<U, C> {
    type Error = ListenerError;

    fn on_message(&self, message: &Message) -> Result<(), Self::Error> {
        self.on_video_encoded_message(&message.payload)
    }
}
