//! Handler: cast_member.get

use serde_json::Value;

use crate::application::cast_member;
use crate::handlers::{has_id, IdInput};
use crate::microsvc::{Context, HandlerError};
use crate::store::ModelStore;

pub const COMMAND: &str = "cast_member.get";

pub fn guard<S>(ctx: &Context<S>) -> bool {
    has_id(ctx)
}

pub fn handle<S: ModelStore>(ctx: &Context<S>) -> Result<Value, HandlerError> {
    let input = ctx.input::<IdInput>()?;
    let found = cast_member::get(ctx.repo(), &input.id)?;
    Ok(serde_json::to_value(found)?)
}
