//! Cast member use cases.

use serde::{Deserialize, Serialize};

use super::error::CatalogError;
use crate::domain::cast_member::{CastMember, CastMemberType};
use crate::domain::pagination::{paginate, Pagination, SearchQuery};
use crate::store::{ModelStore, ModelsExt};

const AGGREGATE: &str = "CastMember";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCastMemberCommand {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub member_type: Option<CastMemberType>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCastMemberCommand {
    pub id: String,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub member_type: Option<CastMemberType>,
}

pub fn create<S: ModelStore>(store: &S, command: CreateCastMemberCommand) -> Result<CastMember, CatalogError> {
    let member = CastMember::new(command.name, command.member_type)?;
    store.models::<CastMember>().insert(&member)?;
    Ok(member)
}

pub fn get<S: ModelStore>(store: &S, id: &str) -> Result<CastMember, CatalogError> {
    store
        .models::<CastMember>()
        .get(id)?
        .map(|v| v.data)
        .ok_or_else(|| CatalogError::not_found(AGGREGATE, id))
}

pub fn update<S: ModelStore>(store: &S, command: UpdateCastMemberCommand) -> Result<CastMember, CatalogError> {
    let repo = store.models::<CastMember>();
    let mut current = repo
        .get(&command.id)?
        .ok_or_else(|| CatalogError::not_found(AGGREGATE, &command.id))?;

    current.data.update(command.name, command.member_type)?;
    repo.update(&current.data, current.version)?;
    Ok(current.data)
}

pub fn delete<S: ModelStore>(store: &S, id: &str) -> Result<(), CatalogError> {
    store.models::<CastMember>().delete(id)?;
    Ok(())
}

pub fn list<S: ModelStore>(store: &S, query: &SearchQuery) -> Result<Pagination<CastMember>, CatalogError> {
    let all = store.models::<CastMember>().all()?;
    Ok(paginate(all, query))
}
