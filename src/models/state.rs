//! State-level mortality record model
//!
//! One row of the US state dataset: a death count for a single
//! (state, cause, year) combination. The export is inconsistent about the
//! cause column key ("Cause Name" in newer files, "Cause" in older ones),
//! so deserialization goes through [`RawStateRecord`], which carries both
//! keys, and normalizes to the single canonical `cause` field here. Query
//! code never sees the dual key.

use serde::{Deserialize, Serialize};

use super::serde::{deserialize_deaths, deserialize_year};

/// One state-level observation with the cause key normalized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawStateRecord")]
pub struct StateRecord {
    /// Full state name as it appears in the data (e.g. "New York")
    #[serde(rename = "State")]
    pub state: String,
    /// Calendar year of the observation
    #[serde(rename = "Year")]
    pub year: i32,
    /// Canonical cause-of-death label
    #[serde(rename = "Cause Name")]
    pub cause: String,
    /// Death count, coerced to a finite number at ingestion
    #[serde(rename = "Deaths")]
    pub deaths: f64,
}

impl StateRecord {
    /// Create a new state record
    #[must_use]
    pub fn new(state: &str, year: i32, cause: &str, deaths: f64) -> Self {
        Self {
            state: state.to_string(),
            year,
            cause: cause.to_string(),
            deaths,
        }
    }
}

/// State row as it appears on disk, before cause-key normalization
#[derive(Debug, Clone, Deserialize)]
pub struct RawStateRecord {
    /// Full state name
    #[serde(rename = "State", default)]
    pub state: String,
    /// Calendar year
    #[serde(rename = "Year", deserialize_with = "deserialize_year", default)]
    pub year: i32,
    /// Preferred cause column key
    #[serde(rename = "Cause Name", default)]
    pub cause_name: Option<String>,
    /// Legacy cause column key
    #[serde(rename = "Cause", default)]
    pub cause: Option<String>,
    /// Raw death count
    #[serde(rename = "Deaths", deserialize_with = "deserialize_deaths", default)]
    pub deaths: f64,
}

impl From<RawStateRecord> for StateRecord {
    fn from(raw: RawStateRecord) -> Self {
        // An empty "Cause Name" defers to "Cause"; rows carrying neither get
        // an empty label that no real cause selection matches.
        let cause = match raw.cause_name {
            Some(name) if !name.is_empty() => name,
            _ => raw.cause.unwrap_or_default(),
        };

        Self {
            state: raw.state,
            year: raw.year,
            cause,
            deaths: raw.deaths,
        }
    }
}
