//! Handler: cast_member.create

use serde_json::{json, Value};

use crate::application::cast_member::{self, CreateCastMemberCommand};
use crate::handlers::is_object;
use crate::microsvc::{Context, HandlerError};
use crate::store::ModelStore;

pub const COMMAND: &str = "cast_member.create";

pub fn guard<S>(ctx: &Context<S>) -> bool {
    is_object(ctx)
}

pub fn handle<S: ModelStore>(ctx: &Context<S>) -> Result<Value, HandlerError> {
    let input = ctx.input::<CreateCastMemberCommand>()?;
    let created = cast_member::create(ctx.repo(), input)?;
    Ok(json!({ "id": created.id }))
}
