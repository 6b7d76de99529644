//! Command handlers, one module per command, following the microsvc
//! `COMMAND` / `guard` / `handle` convention.

pub mod cast_member;
pub mod category;
pub mod genre;

use serde::Deserialize;

use crate::domain::pagination::{Direction, SearchQuery};
use crate::microsvc::{Context, Service};
use crate::store::ModelStore;

/// Input for commands addressed to one aggregate.
#[derive(Debug, Deserialize)]
pub struct IdInput {
    pub id: String,
}

fn default_per_page() -> usize {
    SearchQuery::default().per_page
}

fn default_sort() -> String {
    SearchQuery::default().sort
}

/// Listing parameters as they arrive from the query string.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListInput {
    #[serde(default)]
    pub page: usize,
    #[serde(default = "default_per_page")]
    pub per_page: usize,
    #[serde(default)]
    pub search: String,
    #[serde(default = "default_sort")]
    pub sort: String,
    #[serde(default)]
    pub dir: String,
}

impl From<ListInput> for SearchQuery {
    fn from(input: ListInput) -> Self {
        SearchQuery {
            page: input.page,
            per_page: input.per_page,
            terms: input.search,
            sort: input.sort,
            direction: Direction::from_param(&input.dir),
        }
    }
}

/// Guard shared by commands that take a string `id`.
pub(crate) fn has_id<S>(ctx: &Context<S>) -> bool {
    ctx.str_field("id").is_some_and(|id| !id.trim().is_empty())
}

/// Guard shared by commands whose input is a JSON object.
pub(crate) fn is_object<S>(ctx: &Context<S>) -> bool {
    ctx.raw_input().is_object()
}

/// Build a service with every catalog command registered.
pub fn service<S: ModelStore + 'static>(store: S) -> Service<S> {
    crate::register_handlers!(
        Service::new(store),
        category::create,
        category::get,
        category::list,
        category::update,
        category::delete,
        genre::create,
        genre::get,
        genre::list,
        genre::update,
        genre::delete,
        cast_member::create,
        cast_member::get,
        cast_member::list,
        cast_member::update,
        cast_member::delete,
    )
}
