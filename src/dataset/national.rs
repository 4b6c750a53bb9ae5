//! Query collection for national US/Mexico records.

use itertools::Itertools;

use crate::models::NationalRecord;

/// A collection of national records that can be queried by entity, cause,
/// and year.
///
/// Every method is total: absent data yields `None`, an empty vector, or a
/// zero count, never an error. Records keep their input order, which makes
/// first-match lookups deterministic.
#[derive(Debug, Clone, Default)]
pub struct NationalCollection {
    records: Vec<NationalRecord>,
}

impl NationalCollection {
    /// Create a collection from already-deserialized records, preserving
    /// input order
    #[must_use]
    pub fn from_records(records: Vec<NationalRecord>) -> Self {
        Self { records }
    }

    /// Number of records in the collection
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in input order
    #[must_use]
    pub fn records(&self) -> &[NationalRecord] {
        &self.records
    }

    /// First record matching entity, cause, and year exactly
    #[must_use]
    pub fn find(&self, entity: &str, cause: &str, year: i32) -> Option<&NationalRecord> {
        self.records
            .iter()
            .find(|r| r.entity == entity && r.cause == cause && r.year == year)
    }

    /// All records for a cause, in input order
    #[must_use]
    pub fn filter_by_cause(&self, cause: &str) -> Vec<&NationalRecord> {
        self.records.iter().filter(|r| r.cause == cause).collect()
    }

    /// One entity's time series for a cause, sorted ascending by year.
    ///
    /// The sort is stable: records with duplicate years keep their input
    /// order.
    #[must_use]
    pub fn series_for_entity(&self, entity: &str, cause: &str) -> Vec<&NationalRecord> {
        let mut series: Vec<&NationalRecord> = self
            .records
            .iter()
            .filter(|r| r.entity == entity && r.cause == cause)
            .collect();
        series.sort_by_key(|r| r.year);
        series
    }

    /// Death count for an exact lookup, or 0 when no record exists
    #[must_use]
    pub fn deaths_for(&self, entity: &str, cause: &str, year: i32) -> f64 {
        self.find(entity, cause, year).map_or(0.0, |r| r.deaths)
    }

    /// Unique cause labels, lexicographically sorted
    #[must_use]
    pub fn causes(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.cause.as_str())
            .unique()
            .sorted()
            .map(String::from)
            .collect()
    }

    /// Cause preselected for a fresh session: `preferred` when the data
    /// carries it, otherwise the first cause in sorted order, or `None`
    /// when the collection is empty
    #[must_use]
    pub fn default_cause(&self, preferred: &str) -> Option<String> {
        let causes = self.causes();
        if causes.iter().any(|c| c == preferred) {
            return Some(preferred.to_string());
        }
        causes.into_iter().next()
    }
}
