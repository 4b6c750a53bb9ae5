//! Read-only query layer over the loaded datasets.
//!
//! Both collections load once, are never mutated afterwards, and are
//! injected as a single [`MortalityDataset`] context object wherever
//! queries or insights are computed. Nothing in this module can fail:
//! every query is total and pure, so repeated calls with the same
//! selection produce identical results.

// Per-dataset collections
pub mod national;
pub mod state;

// Re-export commonly used types
pub use self::national::NationalCollection;
pub use self::state::{StateCollection, top_n};

use crate::models::{NationalRecord, StateRecord};

/// Both mortality collections behind one read-only handle
#[derive(Debug, Clone, Default)]
pub struct MortalityDataset {
    national: NationalCollection,
    states: StateCollection,
}

impl MortalityDataset {
    /// Build a dataset from already-deserialized records
    #[must_use]
    pub fn from_records(national: Vec<NationalRecord>, states: Vec<StateRecord>) -> Self {
        Self {
            national: NationalCollection::from_records(national),
            states: StateCollection::from_records(states),
        }
    }

    /// National US/Mexico collection
    #[must_use]
    pub fn national(&self) -> &NationalCollection {
        &self.national
    }

    /// US state-level collection
    #[must_use]
    pub fn states(&self) -> &StateCollection {
        &self.states
    }
}
