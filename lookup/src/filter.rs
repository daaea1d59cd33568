//! Result set computation
//!
//! Matching is a case-insensitive substring test on the record name.
//! Results keep list order; there is no ranking.

use std::ops::Deref;

use crate::record::Record;

/// Number of results shown when no limit is configured
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Case-insensitive substring matcher with the needle lowered once
#[derive(Debug, Clone)]
pub struct NameMatcher {
    needle: String,
}

impl NameMatcher {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// An empty query matches everything
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.is_empty() || record.name().to_lowercase().contains(&self.needle)
    }
}

/// The truncated, ordered view of records shown to the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet(Vec<Record>);

impl ResultSet {
    /// First `limit` records matching `query`, in list order.
    pub fn search(records: &[Record], query: &str, limit: usize) -> Self {
        let matcher = NameMatcher::new(query);
        Self(
            records
                .iter()
                .filter(|record| matcher.matches(record))
                .take(limit)
                .cloned()
                .collect(),
        )
    }

    /// First `limit` records, unfiltered.
    pub fn head(records: &[Record], limit: usize) -> Self {
        Self(records.iter().take(limit).cloned().collect())
    }

    pub fn find(&self, id: &str) -> Option<&Record> {
        self.0.iter().find(|record| record.id() == id)
    }

    /// Swap in `record` wherever an entry with the same id is shown.
    pub(crate) fn refresh(&mut self, record: &Record) {
        for shown in self.0.iter_mut().filter(|shown| shown.id() == record.id()) {
            *shown = record.clone();
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(Record::id)
    }

    pub fn into_inner(self) -> Vec<Record> {
        self.0
    }
}

impl Deref for ResultSet {
    type Target = [Record];

    fn deref(&self) -> &[Record] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
