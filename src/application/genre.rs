//! Genre use cases. Referenced categories must exist.

use serde::{Deserialize, Serialize};

use super::category::missing_ids;
use super::error::CatalogError;
use crate::domain::genre::Genre;
use crate::domain::pagination::{paginate, Pagination, SearchQuery};
use crate::store::{ModelStore, ModelsExt};

const AGGREGATE: &str = "Genre";

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateGenreCommand {
    pub name: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateGenreCommand {
    pub id: String,
    pub name: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub categories: Vec<String>,
}

fn check_categories<S: ModelStore>(store: &S, ids: &[String]) -> Result<(), CatalogError> {
    let missing = missing_ids(store, ids)?;
    if missing.is_empty() {
        return Ok(());
    }
    Err(CatalogError::validation(format!(
        "Some categories could not be found: {}",
        missing.join(", ")
    )))
}

pub fn create<S: ModelStore>(store: &S, command: CreateGenreCommand) -> Result<Genre, CatalogError> {
    let genre = Genre::new(command.name, command.is_active, command.categories)?;
    check_categories(store, &genre.categories)?;
    store.models::<Genre>().insert(&genre)?;
    Ok(genre)
}

pub fn get<S: ModelStore>(store: &S, id: &str) -> Result<Genre, CatalogError> {
    store
        .models::<Genre>()
        .get(id)?
        .map(|v| v.data)
        .ok_or_else(|| CatalogError::not_found(AGGREGATE, id))
}

pub fn update<S: ModelStore>(store: &S, command: UpdateGenreCommand) -> Result<Genre, CatalogError> {
    let repo = store.models::<Genre>();
    let mut current = repo
        .get(&command.id)?
        .ok_or_else(|| CatalogError::not_found(AGGREGATE, &command.id))?;

    current
        .data
        .update(command.name, command.is_active, command.categories)?;
    check_categories(store, &current.data.categories)?;
    repo.update(&current.data, current.version)?;
    Ok(current.data)
}

pub fn delete<S: ModelStore>(store: &S, id: &str) -> Result<(), CatalogError> {
    store.models::<Genre>().delete(id)?;
    Ok(())
}

pub fn list<S: ModelStore>(store: &S, query: &SearchQuery) -> Result<Pagination<Genre>, CatalogError> {
    let all = store.models::<Genre>().all()?;
    Ok(paginate(all, query))
}
