//! Per-view model builders.
//!
//! One builder per chart view, mirroring one synchronous recomputation
//! pass: query the dataset, generate the insight sentences, and shape the
//! chart series. Builders are total; a selection with no matching data
//! produces a model with `chart: None` and guidance text, never an error.

use itertools::Itertools;
use log::warn;

use crate::dataset::MortalityDataset;
use crate::insight::{
    RelationshipOutcome, bubble_insight, bubble_size, gap_insight, missing_cause_insights,
    relationship_insight, state_bar_insight, trend_insight,
};
use crate::models::{MENTAL_HEALTH_CAUSE, MEXICO, NationalRecord, UNITED_STATES, abbreviation_for};
use crate::utils::format_count;

use super::model::{
    BubblePoint, ChartData, RelationshipSeries, SnapshotPoint, TrendSeries, ViewModel,
};
use super::policy::ViewId;

/// Build the model for one view and selection.
///
/// Dispatches to the per-view builders below; the year is ignored by the
/// trend view and the snapshot years are only used by the relationship
/// view, matching what each chart actually plots.
#[must_use]
pub fn build_view(
    dataset: &MortalityDataset,
    view: ViewId,
    cause: &str,
    year: i32,
    snapshot_years: &[i32],
) -> ViewModel {
    match view {
        ViewId::Bar => build_bar(dataset, cause, year),
        ViewId::Trend => build_trend(dataset, cause),
        ViewId::UsStateBar => build_state_bar(dataset, cause, year),
        ViewId::UsBubble => build_bubble(dataset, cause, year),
        ViewId::MhCompare => build_relationship(dataset, cause, snapshot_years),
    }
}

/// National bar view: US vs Mexico totals for one year.
///
/// Missing records chart as zero-height bars rather than clearing the
/// surface, so the two categories always render.
#[must_use]
pub fn build_bar(dataset: &MortalityDataset, cause: &str, year: i32) -> ViewModel {
    let national = dataset.national();
    let us = national.deaths_for(UNITED_STATES, cause, year);
    let mx = national.deaths_for(MEXICO, cause, year);

    ViewModel {
        view: ViewId::Bar,
        title: format!("{cause} deaths (US vs Mexico) — {year}"),
        note: String::new(),
        insights: gap_insight(us, mx, year, cause),
        chart: Some(ChartData::Bar {
            categories: vec![UNITED_STATES.to_string(), MEXICO.to_string()],
            values: vec![us, mx],
        }),
    }
}

/// Trend view: both entities' full time series for the cause.
#[must_use]
pub fn build_trend(dataset: &MortalityDataset, cause: &str) -> ViewModel {
    let national = dataset.national();
    let us = national.series_for_entity(UNITED_STATES, cause);
    let mx = national.series_for_entity(MEXICO, cause);

    ViewModel {
        view: ViewId::Trend,
        title: format!("{cause}: US vs Mexico (Scatter by Year)"),
        note: String::new(),
        insights: trend_insight(&us, &mx, cause),
        chart: Some(ChartData::Trend {
            series: vec![
                trend_series(UNITED_STATES, &us),
                trend_series(MEXICO, &mx),
            ],
        }),
    }
}

/// State bar view: the full deaths-descending distribution for one year.
#[must_use]
pub fn build_state_bar(dataset: &MortalityDataset, cause: &str, year: i32) -> ViewModel {
    let rows = dataset.states().rows_for(cause, year);
    let title = format!("US States: {cause} deaths — {year}");
    let insights = state_bar_insight(&rows, year);

    if rows.is_empty() {
        return ViewModel {
            view: ViewId::UsStateBar,
            title,
            note: "No US state rows found for this cause/year.".to_string(),
            insights,
            chart: None,
        };
    }

    ViewModel {
        view: ViewId::UsStateBar,
        title,
        note: String::new(),
        insights,
        chart: Some(ChartData::StateBar {
            states: rows.iter().map(|r| r.state.clone()).collect(),
            values: rows.iter().map(|r| r.deaths).collect(),
        }),
    }
}

/// Bubble map view: one sized marker per state with a known abbreviation.
///
/// A cause entirely absent from the state dataset clears the chart with
/// ingestion guidance; a cause present in other years only still renders
/// (as an empty map for the selected year). States without a postal
/// abbreviation are excluded from the points and logged.
#[must_use]
pub fn build_bubble(dataset: &MortalityDataset, cause: &str, year: i32) -> ViewModel {
    let states = dataset.states();
    let title = format!("US “Heat” Bubble Map: {cause} — {year}");

    if states.rows_for_cause(cause).is_empty() {
        return ViewModel {
            view: ViewId::UsBubble,
            title,
            note: "No US state rows found for this cause in the state dataset.".to_string(),
            insights: missing_cause_insights(),
            chart: None,
        };
    }

    let rows = states.rows_for(cause, year);
    let points = rows
        .iter()
        .filter_map(|r| match abbreviation_for(&r.state) {
            Some(abbreviation) => Some(BubblePoint {
                abbreviation,
                size: bubble_size(r.deaths),
                label: format!("{}: {} deaths", r.state, format_count(r.deaths)),
            }),
            None => {
                warn!(
                    "No postal abbreviation for state '{}'; excluding it from the bubble map",
                    r.state
                );
                None
            }
        })
        .collect();

    ViewModel {
        view: ViewId::UsBubble,
        title,
        note: String::new(),
        insights: bubble_insight(&rows, year),
        chart: Some(ChartData::BubbleMap { points }),
    }
}

/// Relationship view: selected cause vs mental-health snapshots.
#[must_use]
pub fn build_relationship(
    dataset: &MortalityDataset,
    cause: &str,
    snapshot_years: &[i32],
) -> ViewModel {
    let years_label = snapshot_years.iter().map(ToString::to_string).join("/");
    let title = format!("{cause} deaths vs {MENTAL_HEALTH_CAUSE} deaths ({years_label})");

    match relationship_insight(dataset, cause, snapshot_years) {
        RelationshipOutcome::Rejected { note, insights } => ViewModel {
            view: ViewId::MhCompare,
            title,
            note,
            insights,
            chart: None,
        },
        RelationshipOutcome::Compared { points, insights } => {
            let series = [UNITED_STATES, MEXICO]
                .iter()
                .map(|entity| RelationshipSeries {
                    name: (*entity).to_string(),
                    points: points
                        .iter()
                        .filter(|p| p.entity == *entity)
                        .map(|p| SnapshotPoint {
                            year: p.year,
                            disease: p.disease_deaths,
                            mental: p.mental_deaths,
                        })
                        .collect(),
                })
                .collect();

            ViewModel {
                view: ViewId::MhCompare,
                title,
                note: String::new(),
                insights,
                chart: Some(ChartData::Relationship { series }),
            }
        }
    }
}

/// One entity's chart series from its year-sorted records.
fn trend_series(name: &str, records: &[&NationalRecord]) -> TrendSeries {
    TrendSeries {
        name: name.to_string(),
        years: records.iter().map(|r| r.year).collect(),
        values: records.iter().map(|r| r.deaths).collect(),
    }
}
