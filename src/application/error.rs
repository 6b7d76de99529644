//! Errors surfaced by the catalog use cases.

use thiserror::Error;

use crate::domain::validation::{Notification, ValidationError};
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The aggregate rejected its input.
    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<ValidationError>,
    },
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CatalogError {
    pub fn validation(message: impl Into<String>) -> Self {
        let message = message.into();
        CatalogError::Validation {
            errors: vec![ValidationError::new(message.clone())],
            message,
        }
    }

    pub fn not_found(aggregate: &str, id: &str) -> Self {
        CatalogError::NotFound(format!("{} with ID {} was not found", aggregate, id))
    }
}

impl From<Notification> for CatalogError {
    fn from(notification: Notification) -> Self {
        CatalogError::Validation {
            message: notification.first_message().to_string(),
            errors: notification.errors().to_vec(),
        }
    }
}
