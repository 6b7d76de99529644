//! Error types for command handlers.

use serde_json::{json, Value};
use thiserror::Error;

use crate::application::CatalogError;
use crate::domain::validation::ValidationError;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum HandlerError {
    /// No handler registered for this command name.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    /// Payload decode / deserialization failed.
    #[error("decode failed: {0}")]
    DecodeFailed(String),
    /// Guard rejected the command (input validation failed).
    #[error("guard rejected command: {0}")]
    GuardRejected(String),
    /// The aggregate rejected its input.
    #[error("{message}")]
    Invalid {
        message: String,
        errors: Vec<ValidationError>,
    },
    #[error("{0}")]
    NotFound(String),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl From<CatalogError> for HandlerError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation { message, errors } => HandlerError::Invalid { message, errors },
            CatalogError::NotFound(message) => HandlerError::NotFound(message),
            CatalogError::Store(e) => HandlerError::Store(e),
        }
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::DecodeFailed(err.to_string())
    }
}

impl HandlerError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::UnknownCommand(_) => 404,
            HandlerError::DecodeFailed(_) => 400,
            HandlerError::GuardRejected(_) => 400,
            HandlerError::Invalid { .. } => 422,
            HandlerError::NotFound(_) => 404,
            HandlerError::Store(_) => 500,
        }
    }

    /// Response body: `{"message", "errors": [{"message"}]}`.
    pub fn body(&self) -> Value {
        let errors: Vec<Value> = match self {
            HandlerError::Invalid { errors, .. } => {
                errors.iter().map(|e| json!({ "message": e.message })).collect()
            }
            other => vec![json!({ "message": other.to_string() })],
        };
        json!({ "message": self.to_string(), "errors": errors })
    }
}
