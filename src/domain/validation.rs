//! Notification-style validation: collect every error instead of failing fast.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Accumulates validation errors for one aggregate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, error: ValidationError) -> &mut Self {
        self.errors.push(error);
        self
    }

    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The first collected message, or an empty string.
    pub fn first_message(&self) -> &str {
        self.errors.first().map(|e| e.message.as_str()).unwrap_or("")
    }

    /// `Ok(())` when nothing was collected.
    pub fn into_result(self) -> Result<(), Notification> {
        if self.has_error() {
            Err(self)
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join(", "))
    }
}

impl std::error::Error for Notification {}

/// Validate a required `name` field with a length window in characters.
pub(crate) fn check_name(name: Option<&str>, min: usize, max: usize, notification: &mut Notification) {
    let Some(name) = name else {
        notification.append(ValidationError::new("'name' should not be null"));
        return;
    };

    let trimmed = name.trim();
    if trimmed.is_empty() {
        notification.append(ValidationError::new("'name' should not be empty"));
        return;
    }

    let length = trimmed.chars().count();
    if length < min || length > max {
        notification.append(ValidationError::new(format!(
            "'name' must be between {} and {} characters",
            min, max
        )));
    }
}
