//! National mortality record model
//!
//! One row of the US/Mexico national dataset: a death count for a single
//! (entity, cause, year) combination. Field names mirror the JSON export
//! (`Entity`, `Year`, `Cause`, `Deaths`).

use serde::{Deserialize, Serialize};

use super::serde::{deserialize_deaths, deserialize_year};

/// One national-level observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NationalRecord {
    /// Reporting country ("United States" or "Mexico")
    #[serde(rename = "Entity", default)]
    pub entity: String,
    /// Calendar year of the observation
    #[serde(rename = "Year", deserialize_with = "deserialize_year", default)]
    pub year: i32,
    /// Cause-of-death label, shared vocabulary with the state dataset
    #[serde(rename = "Cause", default)]
    pub cause: String,
    /// Death count, coerced to a finite number at ingestion
    #[serde(rename = "Deaths", deserialize_with = "deserialize_deaths", default)]
    pub deaths: f64,
}

impl NationalRecord {
    /// Create a new national record
    #[must_use]
    pub fn new(entity: &str, year: i32, cause: &str, deaths: f64) -> Self {
        Self {
            entity: entity.to_string(),
            year,
            cause: cause.to_string(),
            deaths,
        }
    }
}
