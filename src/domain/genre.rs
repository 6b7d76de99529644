//! Genre aggregate. References categories by id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::pagination::Searchable;
use super::validation::{check_name, Notification};
use crate::store::Model;

const NAME_MIN_LENGTH: usize = 1;
const NAME_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub categories: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Genre {
    pub fn new(
        name: Option<String>,
        is_active: bool,
        categories: Vec<String>,
    ) -> Result<Self, Notification> {
        validate(name.as_deref())?;

        let now = Utc::now();
        let mut genre = Self {
            id: super::new_id(),
            name: name.unwrap_or_default(),
            is_active,
            categories: Vec::new(),
            created_at: now,
            updated_at: now,
            deleted_at: if is_active { None } else { Some(now) },
        };
        genre.add_categories(categories);
        Ok(genre)
    }

    /// Replace name, activity and the full category list.
    pub fn update(
        &mut self,
        name: Option<String>,
        is_active: bool,
        categories: Vec<String>,
    ) -> Result<(), Notification> {
        validate(name.as_deref())?;

        self.name = name.unwrap_or_default();
        if is_active {
            self.activate();
        } else {
            self.deactivate();
        }
        self.categories.clear();
        self.add_categories(categories);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Add a category id. Blank and duplicate ids are ignored.
    pub fn add_category(&mut self, category_id: impl Into<String>) {
        let category_id = category_id.into();
        if category_id.trim().is_empty() || self.categories.contains(&category_id) {
            return;
        }
        self.categories.push(category_id);
        self.updated_at = Utc::now();
    }

    pub fn add_categories(&mut self, category_ids: impl IntoIterator<Item = String>) {
        for id in category_ids {
            self.add_category(id);
        }
    }

    pub fn remove_category(&mut self, category_id: &str) {
        self.categories.retain(|id| id != category_id);
        self.updated_at = Utc::now();
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

impl Model for Genre {
    const COLLECTION: &'static str = "genres";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Genre {
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
