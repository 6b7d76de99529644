//! Context passed to command handlers.
//!
//! Carries the parsed input and a reference to the store. Handlers access
//! everything they need through the context.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::HandlerError;

/// The context passed to every command handler.
///
/// Generic over `R` (the store type) so handlers can work against
/// whatever store the service is configured with.
///
/// ## Example
///
/// ```ignore
/// pub fn handle<S: ModelStore>(ctx: &Context<S>) -> Result<Value, HandlerError> {
///     let input = ctx.input::<CreateCategoryCommand>()?;
///     let category = category::create(ctx.repo(), input)?;
///     Ok(json!({ "id": category.id }))
/// }
/// ```
pub struct Context<'a, R> {
    input: Value,
    repo: &'a R,
}

impl<'a, R> Context<'a, R> {
    pub(crate) fn new(input: Value, repo: &'a R) -> Self {
        Self { input, repo }
    }

    /// Deserialize the input payload into a typed struct.
    pub fn input<T: DeserializeOwned>(&self) -> Result<T, HandlerError> {
        serde_json::from_value(self.input.clone()).map_err(|e| HandlerError::DecodeFailed(e.to_string()))
    }

    pub fn raw_input(&self) -> &Value {
        &self.input
    }

    pub fn repo(&self) -> &R {
        self.repo
    }

    /// Check if the raw input contains a non-null field.
    pub fn has_field(&self, field: &str) -> bool {
        self.input.get(field).is_some_and(|v| !v.is_null())
    }

    /// Check if the raw input contains all specified fields.
    pub fn has_fields(&self, fields: &[&str]) -> bool {
        fields.iter().all(|f| self.has_field(f))
    }

    /// Read a string field from the raw input.
    pub fn str_field(&self, field: &str) -> Option<&str> {
        self.input.get(field).and_then(Value::as_str)
    }
}
