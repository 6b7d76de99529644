//! Category aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::pagination::Searchable;
use super::validation::{check_name, Notification};
use crate::store::Model;

const NAME_MIN_LENGTH: usize = 3;
const NAME_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Create a validated category with a fresh id.
    pub fn new(
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
    ) -> Result<Self, Notification> {
        validate(name.as_deref())?;

        let now = Utc::now();
        Ok(Self {
            id: super::new_id(),
            name: name.unwrap_or_default(),
            description,
            is_active,
            created_at: now,
            updated_at: now,
            deleted_at: if is_active { None } else { Some(now) },
        })
    }

    /// Replace the mutable fields. Nothing changes when validation fails.
    pub fn update(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
    ) -> Result<(), Notification> {
        validate(name.as_deref())?;

        self.name = name.unwrap_or_default();
        self.description = description;
        if is_active {
            self.activate();
        } else {
            self.deactivate();
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn activate(&mut self) {
        self.deleted_at = None;
        self.is_active = true;
        self.updated_at = Utc::now();
    }

    pub fn deactivate(&mut self) {
        if self.deleted_at.is_none() {
            self.deleted_at = Some(Utc::now());
        }
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}

fn validate(name: Option<&str>) -> Result<(), Notification> {
    let mut notification = Notification::new();
    check_name(name, NAME_MIN_LENGTH, NAME_MAX_LENGTH, &mut notification);
    notification.into_result()
}

impl Model for Category {
    const COLLECTION: &'static str = "categories";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Category {
    fn search_id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn matches(&self, terms: &str) -> bool {
        self.name.to_lowercase().contains(terms)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(terms))
    }
}
