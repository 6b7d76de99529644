//! Handler: cast_member.delete
//!
//! Deleting an id that does not exist succeeds.

use serde_json::{json, Value};

use crate::application::cast_member;
use crate::handlers::{has_id, IdInput};
use crate::microsvc::{Context, HandlerError};
use crate::store::ModelStore;

pub const COMMAND: &str = "cast_member.delete";

pub fn guard<S>(ctx: &Context<S>) -> bool {
    has_id(ctx)
}

pub fn handle<S: ModelStore>(ctx: &Context<S>) -> Result<Value, HandlerError> {
    let input = ctx.input::<IdInput>()?;
    cast_member::delete(ctx.repo(), &input.id)?;
    Ok(json!({}))
}
