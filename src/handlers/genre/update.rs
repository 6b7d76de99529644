//! Handler: genre.update

use serde_json::{json, Value};

use crate::application::genre::{self, UpdateGenreCommand};
use crate::handlers::has_id;
use crate::microsvc::{Context, HandlerError};
use crate::store::ModelStore;

pub const COMMAND: &str = "genre.update";

pub fn guard<S>(ctx: &Context<S>) -> bool {
    has_id(ctx)
}

pub fn handle<S: ModelStore>(ctx: &Context<S>) -> Result<Value, HandlerError> {
    let input = ctx.input::<UpdateGenreCommand>()?;
    let updated = genre::update(ctx.repo(), input)?;
    Ok(json!({ "id": updated.id }))
}
