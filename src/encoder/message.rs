//! Payloads published by the external video encoder.
//!
//! The encoder queue carries two untagged shapes:
//!
//! ```text
//! completed: {"id", "outputBucket", "video": {"encoderVideoFolder", "resourceId", "filePath"}}
//! error:     {"message": {"resourceId", "filePath"}, "error"}
//! ```

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Source asset that was submitted for encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMessage {
    pub resource_id: String,
    pub file_path: String,
}

/// Where the encoded output was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetadata {
    pub encoder_video_folder: String,
    pub resource_id: String,
    pub file_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEncoderCompleted {
    /// Id of the video that owns the encoded media.
    pub id: String,
    pub output_bucket: String,
    pub video: VideoMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoEncoderError {
    pub message: VideoMessage,
    /// Description of the failure.
    pub error: String,
}

/// Outcome reported by the encoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum VideoEncoderResult {
    Completed(VideoEncoderCompleted),
    Error(VideoEncoderError),
}

impl VideoEncoderResult {
    pub fn resource_id(&self) -> &str {
        match self {
            VideoEncoderResult::Completed(completed) => &completed.video.resource_id,
            VideoEncoderResult::Error(error) => &error.message.resource_id,
        }
    }
}

// One discriminator check on the parsed value, then a typed conversion, so a
// malformed variant reports its own field errors instead of a generic
// "did not match any variant".
impl<'de> Deserialize<'de> for VideoEncoderResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        let Some(object) = value.as_object() else {
            return Err(de::Error::custom("encoder result must be a JSON object"));
        };

        if object.contains_key("error") {
            serde_json::from_value(value)
                .map(VideoEncoderResult::Error)
                .map_err(de::Error::custom)
        } else if object.contains_key("video") {
            serde_json::from_value(value)
                .map(VideoEncoderResult::Completed)
                .map_err(de::Error::custom)
        } else {
            Err(de::Error::custom(
                "encoder result has neither an `error` nor a `video` field",
            ))
        }
    }
}
