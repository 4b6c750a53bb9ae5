//! Chart-ready view models handed to the external renderer.
//!
//! These are plain serializable structures: axis values, labels, titles,
//! the note line, and the insight sentences. The renderer decides how to
//! draw them; nothing here knows about any charting library.

use serde::Serialize;

use super::policy::ViewId;

/// Everything the renderer needs for one recomputation pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    /// View this model was built for (post-fallback)
    pub view: ViewId,
    /// Chart title
    pub title: String,
    /// Transient status message for the note area; empty when none
    pub note: String,
    /// Ordered insight sentences for the list area
    pub insights: Vec<String>,
    /// Chart series, or `None` when the chart surface should be cleared
    pub chart: Option<ChartData>,
}

/// Per-view chart series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ChartData {
    /// National US vs Mexico totals for one year
    Bar {
        /// Entity labels, US first
        categories: Vec<String>,
        /// Death counts aligned with `categories`
        values: Vec<f64>,
    },
    /// National time series, one per entity
    Trend {
        /// Year-ascending series, US first
        series: Vec<TrendSeries>,
    },
    /// Full deaths-descending distribution across states
    StateBar {
        /// State names, highest count first
        states: Vec<String>,
        /// Death counts aligned with `states`
        values: Vec<f64>,
    },
    /// Geographic bubble map over US states
    BubbleMap {
        /// One point per state with a known postal abbreviation
        points: Vec<BubblePoint>,
    },
    /// Selected cause vs mental-health snapshots, one series per entity
    Relationship {
        /// Snapshot point series, US first
        series: Vec<RelationshipSeries>,
    },
}

/// One entity's year-ascending series for the trend view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSeries {
    /// Entity label
    pub name: String,
    /// Observation years, ascending
    pub years: Vec<i32>,
    /// Death counts aligned with `years`
    pub values: Vec<f64>,
}

/// One state marker on the bubble map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubblePoint {
    /// Two-letter postal abbreviation the map plots by
    pub abbreviation: &'static str,
    /// Marker size on the floor-clamped square-root scale
    pub size: f64,
    /// Hover label, e.g. `California: 55,003 deaths`
    pub label: String,
}

/// One entity's snapshot points for the relationship view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationshipSeries {
    /// Entity label
    pub name: String,
    /// One point per snapshot year
    pub points: Vec<SnapshotPoint>,
}

/// Paired death counts for one entity and snapshot year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotPoint {
    /// Snapshot year (also the point label)
    pub year: i32,
    /// Deaths from the selected cause
    pub disease: f64,
    /// Deaths from the reserved mental-health cause
    pub mental: f64,
}
