//! Person store contracts and backend implementations.
//!
//! # Responsibility
//! - Define the paginated, filtered query contract over person records.
//! - Keep backend details (SQLite key-value vs. REST) behind one trait.
//!
//! # Invariants
//! - Listing order is stable: ascending creation order (ascending id).
//! - Every mutation persists the full record set before returning.
//! - Stores return semantic errors (`NotFound`) distinct from transport
//!   failures.

use crate::db::DbError;
use crate::model::person::{Person, PersonDraft, PersonId, PersonPatch};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod local;
pub mod remote;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for person persistence and query operations.
#[derive(Debug)]
pub enum StoreError {
    /// Update targeted an id no record carries.
    NotFound(PersonId),
    /// Storage or network failure outside this process's control.
    Transport(String),
    /// Persisted payload failed to deserialize.
    InvalidData(String),
    /// Local SQLite open or migration failure.
    Db(DbError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "person not found: {id}"),
            Self::Transport(message) => write!(f, "transport failure: {message}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidData(value.to_string())
    }
}

/// Query options for one page of the person list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    /// 1-based page index.
    pub page: u32,
    pub page_size: u32,
    /// Case-insensitive substring matched against name OR email; blank
    /// (after trimming) means no filter.
    pub search: String,
}

impl PageQuery {
    pub fn new(page: u32, page_size: u32, search: impl Into<String>) -> Self {
        Self {
            page: page.max(1),
            page_size,
            search: search.into(),
        }
    }
}

/// One page of filtered results plus the filtered-set cardinality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub data: Vec<Person>,
    /// Size of the filtered set before slicing, not of this page.
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
}

impl PageResult {
    /// Number of pages covering the filtered set; at least 1.
    pub fn page_count(&self) -> u32 {
        if self.page_size == 0 {
            return 1;
        }
        let pages = self.total_count.div_ceil(u64::from(self.page_size));
        u32::try_from(pages.max(1)).unwrap_or(u32::MAX)
    }
}

/// Backend-agnostic person store.
///
/// Implementations are single-threaded by contract; embedders that share a
/// store across threads must add their own synchronization.
pub trait PersonStore {
    /// Returns one page of records matching `query.search`.
    fn list(&self, query: &PageQuery) -> StoreResult<PageResult>;

    /// Persists a new record and returns it with id and creation time set.
    fn create(&self, draft: &PersonDraft) -> StoreResult<Person>;

    /// Merges `Some` patch fields into the record with `id`.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no record carries `id`; the store is
    ///   left unchanged.
    fn update(&self, id: PersonId, patch: &PersonPatch) -> StoreResult<Person>;
}

/// Whether a record matches a pre-lowercased search needle.
pub(crate) fn matches_search(person: &Person, needle_lower: &str) -> bool {
    person.name.to_lowercase().contains(needle_lower)
        || person.email.to_lowercase().contains(needle_lower)
}

/// Filters and slices an in-memory record list the way `list` promises.
pub(crate) fn paginate(records: &[Person], query: &PageQuery) -> PageResult {
    let needle = query.search.trim().to_lowercase();
    let filtered: Vec<&Person> = if needle.is_empty() {
        records.iter().collect()
    } else {
        records
            .iter()
            .filter(|person| matches_search(person, &needle))
            .collect()
    };

    let total_count = filtered.len() as u64;
    let start = (query.page.saturating_sub(1) as usize).saturating_mul(query.page_size as usize);
    let data = filtered
        .into_iter()
        .skip(start)
        .take(query.page_size as usize)
        .cloned()
        .collect();

    PageResult {
        data,
        total_count,
        page: query.page,
        page_size: query.page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::{paginate, PageQuery, PageResult};
    use crate::model::person::Person;

    fn person(id: i64, name: &str, email: &str) -> Person {
        Person {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: "+1 (555) 000-0000".to_string(),
            age: 30,
            created_at: id,
            updated_at: None,
        }
    }

    #[test]
    fn search_matches_name_or_email_case_insensitively() {
        let records = vec![
            person(1, "Sarah", "sarah.j@email.com"),
            person(2, "Mik", "mik.chen@email.com"),
        ];

        let by_name = paginate(&records, &PageQuery::new(1, 5, "SAR"));
        assert_eq!(by_name.total_count, 1);
        assert_eq!(by_name.data[0].name, "Sarah");

        let by_email = paginate(&records, &PageQuery::new(1, 5, "chen"));
        assert_eq!(by_email.total_count, 1);
        assert_eq!(by_email.data[0].name, "Mik");
    }

    #[test]
    fn blank_search_returns_everything() {
        let records = vec![person(1, "Sarah", "s@e.com"), person(2, "Mik", "m@e.com")];
        let page = paginate(&records, &PageQuery::new(1, 5, "   "));
        assert_eq!(page.total_count, 2);
        assert_eq!(page.data.len(), 2);
    }

    #[test]
    fn slicing_respects_page_bounds() {
        let records: Vec<Person> = (1..=7)
            .map(|i| person(i, &format!("P{i}"), &format!("p{i}@e.com")))
            .collect();

        let second = paginate(&records, &PageQuery::new(2, 3, ""));
        assert_eq!(second.total_count, 7);
        assert_eq!(
            second.data.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![4, 5, 6]
        );

        let past_end = paginate(&records, &PageQuery::new(4, 3, ""));
        assert!(past_end.data.is_empty());
        assert_eq!(past_end.total_count, 7);
    }

    #[test]
    fn page_count_rounds_up_and_never_drops_to_zero() {
        let empty = PageResult {
            data: vec![],
            total_count: 0,
            page: 1,
            page_size: 5,
        };
        assert_eq!(empty.page_count(), 1);

        let seven = PageResult {
            data: vec![],
            total_count: 7,
            page: 1,
            page_size: 5,
        };
        assert_eq!(seven.page_count(), 2);
    }
}
