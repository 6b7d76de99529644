//! Category use cases.

use serde::{Deserialize, Serialize};

use super::error::CatalogError;
use crate::domain::category::Category;
use crate::domain::pagination::{paginate, Pagination, SearchQuery};
use crate::store::{ModelStore, ModelsExt};

const AGGREGATE: &str = "Category";

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCategoryCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCategoryCommand {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

pub fn create<S: ModelStore>(store: &S, command: CreateCategoryCommand) -> Result<Category, CatalogError> {
    let category = Category::new(command.name, command.description, command.is_active)?;
    store.models::<Category>().insert(&category)?;
    Ok(category)
}

pub fn get<S: ModelStore>(store: &S, id: &str) -> Result<Category, CatalogError> {
    store
        .models::<Category>()
        .get(id)?
        .map(|v| v.data)
        .ok_or_else(|| CatalogError::not_found(AGGREGATE, id))
}

pub fn update<S: ModelStore>(store: &S, command: UpdateCategoryCommand) -> Result<Category, CatalogError> {
    let repo = store.models::<Category>();
    let mut current = repo
        .get(&command.id)?
        .ok_or_else(|| CatalogError::not_found(AGGREGATE, &command.id))?;

    current
        .data
        .update(command.name, command.description, command.is_active)?;
    repo.update(&current.data, current.version)?;
    Ok(current.data)
}

/// Deleting an unknown id is not an error.
pub fn delete<S: ModelStore>(store: &S, id: &str) -> Result<(), CatalogError> {
    store.models::<Category>().delete(id)?;
    Ok(())
}

pub fn list<S: ModelStore>(store: &S, query: &SearchQuery) -> Result<Pagination<Category>, CatalogError> {
    let all = store.models::<Category>().all()?;
    Ok(paginate(all, query))
}

/// Ids from `ids` that have no stored category, in input order.
pub fn missing_ids<S: ModelStore>(store: &S, ids: &[String]) -> Result<Vec<String>, CatalogError> {
    let repo = store.models::<Category>();
    let mut missing = Vec::new();
    for id in ids {
        if repo.get(id)?.is_none() {
            missing.push(id.clone());
        }
    }
    Ok(missing)
}
