//! Relationship insights: a selected cause against mental-health deaths.

use serde::Serialize;

use crate::dataset::MortalityDataset;
use crate::models::{MENTAL_HEALTH_CAUSE, MEXICO, UNITED_STATES};

/// One snapshot point: deaths from the selected cause paired with
/// mental-health deaths for an entity and year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationshipPoint {
    /// Reporting country
    pub entity: String,
    /// Snapshot year
    pub year: i32,
    /// Deaths from the selected cause (0 when no record exists)
    pub disease_deaths: f64,
    /// Deaths from the reserved mental-health cause (0 when no record exists)
    pub mental_deaths: f64,
}

/// Outcome of the relationship computation.
///
/// Rejection is a regular value, not an error: the caller renders the note
/// and guidance in place of the chart.
#[derive(Debug, Clone, PartialEq)]
pub enum RelationshipOutcome {
    /// The reserved cause was selected as primary; the view cannot compare
    /// a cause against itself
    Rejected {
        /// User-facing explanation for the note area
        note: String,
        /// Guidance sentences
        insights: Vec<String>,
    },
    /// Snapshot points for both entities plus reading guidance
    Compared {
        /// One point per entity and snapshot year, zero-filled where data
        /// is missing
        points: Vec<RelationshipPoint>,
        /// Fixed reading-guidance sentences
        insights: Vec<String>,
    },
}

/// Build the relationship data for a cause.
///
/// Rejects the reserved mental-health cause unconditionally, regardless of
/// what the dataset holds. Otherwise produces one point per entity and
/// snapshot year via two independent lookups; a year missing from the data
/// still yields a zero-valued point rather than being skipped.
#[must_use]
pub fn relationship_insight(
    dataset: &MortalityDataset,
    cause: &str,
    snapshot_years: &[i32],
) -> RelationshipOutcome {
    if cause == MENTAL_HEALTH_CAUSE {
        return RelationshipOutcome::Rejected {
            note: format!(
                "Pick a cause other than '{MENTAL_HEALTH_CAUSE}' for this relationship view."
            ),
            insights: vec![
                "This plot compares a selected cause against Mental health/suicide deaths."
                    .to_string(),
                "Choose Heart disease, Cancer, Stroke, etc.".to_string(),
            ],
        };
    }

    let national = dataset.national();
    let mut points = Vec::with_capacity(2 * snapshot_years.len());
    for entity in [UNITED_STATES, MEXICO] {
        for &year in snapshot_years {
            points.push(RelationshipPoint {
                entity: entity.to_string(),
                year,
                disease_deaths: national.deaths_for(entity, cause, year),
                mental_deaths: national.deaths_for(entity, MENTAL_HEALTH_CAUSE, year),
            });
        }
    }

    RelationshipOutcome::Compared {
        points,
        insights: vec![
            "Each point is a 5-year snapshot (year labels on points).".to_string(),
            "If points move up/right over time, both the cause and mental health burden are increasing together."
                .to_string(),
            "Compare the US vs Mexico point clouds to see whether the relationship looks similar across countries."
                .to_string(),
        ],
    }
}
