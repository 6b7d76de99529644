//! Message body codecs.
//!
//! Consumers take the codec as a type parameter so tests and alternative
//! wire formats can swap it without touching the listener.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::error::Category;
use thiserror::Error;

/// Failure to turn bytes into a typed message or back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The body is not well-formed (truncated, not JSON, bad encoding).
    #[error("malformed message body: {0}")]
    Syntax(String),
    /// The body parsed but does not have a recognized shape.
    #[error("unrecognized message shape: {0}")]
    Shape(String),
    #[error("failed to encode message: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => CodecError::Shape(err.to_string()),
            Category::Io | Category::Syntax | Category::Eof => CodecError::Syntax(err.to_string()),
        }
    }
}

/// Serialization strategy for message payloads.
pub trait MessageCodec: Send + Sync {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError>;

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError>;
}

/// JSON codec backed by serde_json.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl MessageCodec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(value).map_err(|e| CodecError::Encode(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
