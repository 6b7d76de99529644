//! Handler: genre.create
//!
//! Every referenced category must already exist.

use serde_json::{json, Value};

use crate::application::genre::{self, CreateGenreCommand};
use crate::handlers::is_object;
use crate::microsvc::{Context, HandlerError};
use crate::store::ModelStore;

pub const COMMAND: &str = "genre.create";

pub fn guard<S>(ctx: &Context<S>) -> bool {
    is_object(ctx)
}

pub fn handle<S: ModelStore>(ctx: &Context<S>) -> Result<Value, HandlerError> {
    let input = ctx.input::<CreateGenreCommand>()?;
    let created = genre::create(ctx.repo(), input)?;
    Ok(json!({ "id": created.id }))
}
