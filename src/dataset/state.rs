//! Query collection for US state-level records.

use crate::models::StateRecord;

/// A collection of state records that can be queried by cause and year.
///
/// Like the national collection, every method is total and input order is
/// preserved, so stable sorts give deterministic rankings.
#[derive(Debug, Clone, Default)]
pub struct StateCollection {
    records: Vec<StateRecord>,
}

impl StateCollection {
    /// Create a collection from already-deserialized records, preserving
    /// input order
    #[must_use]
    pub fn from_records(records: Vec<StateRecord>) -> Self {
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
    pub fn records(&self) -> &[StateRecord] {
        &self.records
    }

    /// Whether any record carries the cause, independent of year.
    ///
    /// This drives view availability: a cause with no state rows disables
    /// the state bar and bubble views.
    #[must_use]
    pub fn has_data_for_cause(&self, cause: &str) -> bool {
        self.records.iter().any(|r| r.cause == cause)
    }

    /// Rows matching an exact cause and year, sorted descending by deaths.
    ///
    /// The sort is stable: equal counts keep their input order.
    #[must_use]
    pub fn rows_for(&self, cause: &str, year: i32) -> Vec<&StateRecord> {
        let mut rows: Vec<&StateRecord> = self
            .records
            .iter()
            .filter(|r| r.cause == cause && r.year == year)
            .collect();
        rows.sort_by(|a, b| b.deaths.total_cmp(&a.deaths));
        rows
    }

    /// All rows for a cause across years, in input order
    #[must_use]
    pub fn rows_for_cause(&self, cause: &str) -> Vec<&StateRecord> {
        self.records.iter().filter(|r| r.cause == cause).collect()
    }
}

/// First `n` rows of an already deaths-descending slice.
///
/// Callers rank via [`StateCollection::rows_for`]; this takes the ordering
/// as given and never re-sorts.
#[must_use]
pub fn top_n<'a>(rows: &[&'a StateRecord], n: usize) -> Vec<&'a StateRecord> {
    rows.iter().copied().take(n).collect()
}
