//! Handler: cast_member.update

use serde_json::{json, Value};

use crate::application::cast_member::{self, UpdateCastMemberCommand};
use crate::handlers::has_id;
use crate::microsvc::{Context, HandlerError};
use crate::store::ModelStore;

pub const COMMAND: &str = "cast_member.update";

pub fn guard<S>(ctx: &Context<S>) -> bool {
    has_id(ctx)
}

pub fn handle<S: ModelStore>(ctx: &Context<S>) -> Result<Value, HandlerError> {
    let input = ctx.input::<UpdateCastMemberCommand>()?;
    let updated = cast_member::update(ctx.repo(), input)?;
    Ok(json!({ "id": updated.id }))
}
