//! Search queries and paged results over in-memory collections.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sort direction for listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// Parse a query-string value. Anything other than `desc` sorts ascending.
    pub fn from_param(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") {
            Direction::Desc
        } else {
            Direction::Asc
        }
    }
}

/// Parameters for a paged search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Zero-based page index.
    pub page: usize,
    pub per_page: usize,
    /// Case-insensitive filter; empty matches everything.
    pub terms: String,
    pub sort: String,
    pub direction: Direction,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: 10,
            terms: String::new(),
            sort: "name".to_string(),
            direction: Direction::Asc,
        }
    }
}

/// One page of results plus the total number of matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination<T> {
    pub current_page: usize,
    pub per_page: usize,
    pub total: usize,
    pub items: Vec<T>,
}

impl<T> Pagination<T> {
    /// Convert the items, keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Pagination<U> {
        Pagination {
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

/// Aggregates that can be filtered and sorted by a `SearchQuery`.
pub trait Searchable {
    fn search_id(&self) -> &str;
    fn name(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;

    /// `terms` is already lower-cased and trimmed.
    fn matches(&self, terms: &str) -> bool {
        self.name().to_lowercase().contains(terms)
    }
}

fn compare<T: Searchable>(a: &T, b: &T, sort: &str) -> Ordering {
    let primary = match sort {
        "createdAt" | "created_at" => a.created_at().cmp(&b.created_at()),
        _ => a
            .name()
            .to_lowercase()
            .cmp(&b.name().to_lowercase())
            .then_with(|| a.name().cmp(b.name())),
    };
    primary.then_with(|| a.search_id().cmp(b.search_id()))
}

/// Filter, sort and slice `items` according to `query`.
pub fn paginate<T: Searchable>(items: Vec<T>, query: &SearchQuery) -> Pagination<T> {
    let terms = query.terms.trim().to_lowercase();

    let mut matched: Vec<T> = if terms.is_empty() {
        items
    } else {
        items.into_iter().filter(|item| item.matches(&terms)).collect()
    };

    matched.sort_by(|a, b| {
        let ordering = compare(a, b, &query.sort);
        match query.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    });

    let total = matched.len();
    let items = matched
        .into_iter()
        .skip(query.page.saturating_mul(query.per_page))
        .take(query.per_page)
        .collect();

    Pagination {
        current_page: query.page,
        per_page: query.per_page,
        total,
        items,
    }
}
