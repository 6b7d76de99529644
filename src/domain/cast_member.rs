//! Cast member aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::pagination::Searchable;
use super::validation::{check_name, Notification, ValidationError};
use crate::store::Model;

const NAME_MIN_LENGTH: usize = 3;
const NAME_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CastMemberType {
    Actor,
    Director,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub member_type: CastMemberType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CastMember {
    pub fn new(
        name: Option<String>,
        member_type: Option<CastMemberType>,
    ) -> Result<Self, Notification> {
        let member_type = validate(name.as_deref(), member_type)?;

        let now = Utc::now();
        Ok(Self {
            id: super::new_id(),
            name: name.unwrap_or_default(),
            member_type,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn update(
        &mut self,
        name: Option<String>,
        member_type: Option<CastMemberType>,
    ) -> Result<(), Notification> {
        let member_type = validate(name.as_deref(), member_type)?;

        self.name = name.unwrap_or_default();
        self.member_type = member_type;
        self.updated_at = Utc::now();
        Ok(())
    }
}

fn validate(
    name: Option<&str>,
    member_type: Option<CastMemberType>,
) -> Result<CastMemberType, Notification> {
    let mut notification = Notification::new();
    check_name(name, NAME_MIN_LENGTH, NAME_MAX_LENGTH, &mut notification);

    match member_type {
        Some(member_type) if !notification.has_error() => Ok(member_type),
        Some(_) => Err(notification),
        None => {
            notification.append(ValidationError::new("'type' should not be null"));
            Err(notification)
        }
    }
}

impl Model for CastMember {
    const COLLECTION: &'static str = "cast_members";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for CastMember {
    fn search_id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
