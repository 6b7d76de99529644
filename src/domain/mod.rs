//! Catalog aggregates and the value types shared between them.

pub mod cast_member;
pub mod category;
pub mod genre;
pub mod pagination;
pub mod validation;
pub mod video;

pub use pagination::{Direction, Pagination, SearchQuery, Searchable};
pub use validation::{Notification, ValidationError};

/// Generate a new aggregate identifier (hyphenless UUID v4).
pub fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
