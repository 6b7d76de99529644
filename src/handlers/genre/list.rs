//! Handler: genre.list

use serde_json::Value;

use crate::application::genre;
use crate::domain::pagination::SearchQuery;
use crate::handlers::{is_object, ListInput};
use crate::microsvc::{Context, HandlerError};
use crate::store::ModelStore;

pub const COMMAND: &str = "genre.list";

pub fn guard<S>(ctx: &Context<S>) -> bool {
    is_object(ctx)
}

pub fn handle<S: ModelStore>(ctx: &Context<S>) -> Result<Value, HandlerError> {
    let query = SearchQuery::from(ctx.input::<ListInput>()?);
    let page = genre::list(ctx.repo(), &query)?;
    Ok(serde_json::to_value(page)?)
}
