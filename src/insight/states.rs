//! Insight sentences for the US state views.

use itertools::Itertools;

use crate::dataset::top_n;
use crate::models::StateRecord;
use crate::utils::format_count;

/// Marker size for one bubble-map state.
///
/// Floor-clamped square-root scale, so counts spanning orders of magnitude
/// compress into a legible marker range. Referenced by the bubble insight
/// text, which makes it part of the data contract rather than a rendering
/// detail.
#[must_use]
pub fn bubble_size(deaths: f64) -> f64 {
    (deaths.sqrt() / 2.0).max(4.0)
}

/// Insight sentences for the state bar view.
///
/// `rows` must already be deaths-descending for the selected cause and
/// year. An empty slice yields the fixed no-data guidance instead of a
/// ranking sentence.
#[must_use]
pub fn state_bar_insight(rows: &[&StateRecord], year: i32) -> Vec<String> {
    if rows.is_empty() {
        return vec![
            "Try a different year (2000/2005/2010/2015).".to_string(),
            "Or switch to a different cause.".to_string(),
        ];
    }

    vec![
        format!("Top 3 states in {year}: {}.", top_three(rows)),
        "This view shows the full distribution across states (not just the top few).".to_string(),
        "Use the bubble map to spot geographic clustering patterns.".to_string(),
    ]
}

/// Insight sentences for the bubble map view.
///
/// Same top-3 ranking shape as the state bar plus fixed sentences about
/// bubble sizing and geographic reading. The ranking sentence renders even
/// when the year slice is empty; the cause-missing-entirely case is decided
/// upstream with [`missing_cause_insights`] before rows are ranked.
#[must_use]
pub fn bubble_insight(rows: &[&StateRecord], year: i32) -> Vec<String> {
    vec![
        format!("Top US states in {year}: {}.", top_three(rows)),
        "Bubble size indicates magnitude of deaths (larger = more deaths).".to_string(),
        "This supports geographic pattern identification for leading causes and mental health context."
            .to_string(),
    ]
}

/// Guidance shown when the selected cause has no rows anywhere in the
/// state dataset.
#[must_use]
pub fn missing_cause_insights() -> Vec<String> {
    vec![
        "Check that your US state JSON includes this cause.".to_string(),
        "Make sure the key is 'Cause Name' (or 'Cause').".to_string(),
        "Try another cause.".to_string(),
    ]
}

/// Top-3 ranking fragment: `Name (count), Name (count), Name (count)`.
fn top_three(rows: &[&StateRecord]) -> String {
    top_n(rows, 3)
        .iter()
        .map(|r| format!("{} ({})", r.state, format_count(r.deaths)))
        .join(", ")
}
