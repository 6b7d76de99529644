//! Handler: genre.delete
//!
//! Deleting an id that does not exist succeeds.

use serde_json::{json, Value};

use crate::application::genre;
use crate::handlers::{has_id, IdInput};
use crate::microsvc::{Context, HandlerError};
use crate::store::ModelStore;

pub const COMMAND: &str = "genre.delete";

pub fn guard<S>(ctx: &Context<S>) -> bool {
    has_id(ctx)
}

pub fn handle<S: ModelStore>(ctx: &Context<S>) -> Result<Value, HandlerError> {
    let input = ctx.input::<IdInput>()?;
    genre::delete(ctx.repo(), &input.id)?;
    Ok(json!({}))
}
