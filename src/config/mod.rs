//! Configuration for the dashboard core.

use std::path::PathBuf;

use crate::views::ViewId;

/// Configuration for loading the datasets and seeding a fresh session
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Path to the national US/Mexico JSON dataset
    pub national_path: PathBuf,
    /// Path to the US state-level JSON dataset
    pub states_path: PathBuf,
    /// Cause preselected when a session starts, when the data carries it
    pub default_cause: String,
    /// View preselected when a session starts
    pub default_view: ViewId,
    /// Year preselected for the single-year views
    pub default_year: i32,
    /// Years sampled by the mental-health comparison view
    pub snapshot_years: Vec<i32>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            national_path: PathBuf::from("data/clean/us_mexico_national.json"),
            states_path: PathBuf::from("data/clean/us_states_top10.json"),
            default_cause: "Heart disease".to_string(),
            default_view: ViewId::Bar,
            default_year: 2015,
            snapshot_years: vec![2000, 2005, 2010, 2015],
        }
    }
}
