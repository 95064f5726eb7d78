//! Pure filtering and paging over store snapshots.
//!
//! Every supplied filter must match. Archived records are dropped first,
//! then free-text search, then the equality filters. Results keep the
//! collection's insertion order.

pub mod filters;
pub mod pagination;

pub use filters::{AssessmentFilter, CandidateFilter, JobFilter};
pub use pagination::{paginate, Page};

use crate::models::{EntityId, Record};

/// Value that disables an equality filter.
pub const ALL: &str = "all";

pub trait Filter<T> {
    fn matches(&self, record: &T) -> bool;
}

/// Runs `filter` over a default listing: archived records never appear.
pub fn select<T, F>(records: &[T], filter: &F) -> Vec<T>
where
    T: Record,
    F: Filter<T>,
{
    records
        .iter()
        .filter(|record| !record.is_archived() && filter.matches(record))
        .cloned()
        .collect()
}

fn is_unset(raw: Option<&str>) -> bool {
    match raw {
        None => true,
        Some(value) => value.is_empty() || value == ALL,
    }
}

/// Case-insensitive substring search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        raw.filter(|value| !value.is_empty())
            .map(|value| SearchTerm(value.to_lowercase()))
    }

    /// True when the needle occurs in any of `fields`.
    pub fn matches_any(&self, fields: &[&str]) -> bool {
        fields
            .iter()
            .any(|field| field.to_lowercase().contains(&self.0))
    }
}

/// Exact string equality, switched off by omission, `""` or `"all"`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldFilter {
    #[default]
    Any,
    Equals(String),
}

impl FieldFilter {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            value if is_unset(value) => FieldFilter::Any,
            Some(value) => FieldFilter::Equals(value.to_string()),
            None => FieldFilter::Any,
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            FieldFilter::Any => true,
            FieldFilter::Equals(expected) => expected == value,
        }
    }
}

/// Job reference filter. A value that isn't a number matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdFilter {
    #[default]
    Any,
    Id(EntityId),
    Unmatchable,
}

impl IdFilter {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            value if is_unset(value) => IdFilter::Any,
            Some(value) => value
                .trim()
                .parse()
                .map(IdFilter::Id)
                .unwrap_or(IdFilter::Unmatchable),
            None => IdFilter::Any,
        }
    }

    pub fn matches(&self, id: EntityId) -> bool {
        match self {
            IdFilter::Any => true,
            IdFilter::Id(expected) => *expected == id,
            IdFilter::Unmatchable => false,
        }
    }

    pub fn matches_any(&self, ids: &[EntityId]) -> bool {
        match self {
            IdFilter::Any => true,
            _ => ids.iter().any(|id| self.matches(*id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sentinel_and_empty_disable_filters() {
        assert_eq!(FieldFilter::parse(Some("all")), FieldFilter::Any);
        assert_eq!(FieldFilter::parse(Some("")), FieldFilter::Any);
        assert_eq!(FieldFilter::parse(None), FieldFilter::Any);
        assert_eq!(
            FieldFilter::parse(Some("Design")),
            FieldFilter::Equals("Design".into())
        );
        assert_eq!(IdFilter::parse(Some("all")), IdFilter::Any);
    }

    #[test]
    fn non_numeric_job_id_matches_nothing() {
        let filter = IdFilter::parse(Some("abc"));
        assert_eq!(filter, IdFilter::Unmatchable);
        assert!(!filter.matches_any(&[1, 2, 3]));
    }

    #[test]
    fn search_ignores_case() {
        let term = SearchTerm::parse(Some("REACT")).unwrap();
        assert!(term.matches_any(&["Frontend", "Looking for a React developer"]));
        assert!(!term.matches_any(&["Backend", "Node.js"]));
        assert_eq!(SearchTerm::parse(Some("")), None);
    }
}
