//! Handler: genre.get

use serde_json::Value;

use crate::application::genre;
use crate::handlers::{has_id, IdInput};
use crate::microsvc::{Context, HandlerError};
use crate::store::ModelStore;

pub const COMMAND: &str = "genre.get";

pub fn guard<S>(ctx: &Context<S>) -> bool {
    has_id(ctx)
}

pub fn handle<S: ModelStore>(ctx: &Context<S>) -> Result<Value, HandlerError> {
    let input = ctx.input::<IdInput>()?;
    let found = genre::get(ctx.repo(), &input.id)?;
    Ok(serde_json::to_value(found)?)
}
