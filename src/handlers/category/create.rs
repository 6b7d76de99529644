//! Handler: category.create
//!
//! Follows the microsvc handler convention:
//! - `COMMAND`, the command name this handler responds to
//! - `guard`, input shape check
//! - `handle`, the command handler

use serde_json::{json, Value};

use crate::application::category::{self, CreateCategoryCommand};
use crate::handlers::is_object;
use crate::microsvc::{Context, HandlerError};
use crate::store::ModelStore;

pub const COMMAND: &str = "category.create";

pub fn guard<S>(ctx: &Context<S>) -> bool {
    is_object(ctx)
}

pub fn handle<S: ModelStore>(ctx: &Context<S>) -> Result<Value, HandlerError> {
    let input = ctx.input::<CreateCategoryCommand>()?;
    let created = category::create(ctx.repo(), input)?;
    Ok(json!({ "id": created.id }))
}
