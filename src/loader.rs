//! Dataset loading from the cleaned JSON files.
//!
//! Both files are read and deserialized concurrently. Load errors keep the
//! offending path so a misconfigured deployment is diagnosable from the
//! message alone; rows inside a file that parses are never silently
//! dropped.

use std::path::{Path, PathBuf};
use std::time::Instant;

use log::info;
use serde::de::DeserializeOwned;
use tokio::fs;

use crate::config::DashboardConfig;
use crate::dataset::MortalityDataset;
use crate::error::{DashboardError, Result};
use crate::models::{NationalRecord, StateRecord};

/// Load both datasets from the configured paths.
///
/// # Errors
/// Returns an error if either file cannot be read or is not valid JSON
/// for its record type.
pub async fn load_dataset(config: &DashboardConfig) -> Result<MortalityDataset> {
    let start = Instant::now();

    let (national, states) = tokio::try_join!(
        read_records::<NationalRecord>(&config.national_path),
        read_records::<StateRecord>(&config.states_path),
    )?;

    info!(
        "Loaded {} national and {} state records in {:?}",
        national.len(),
        states.len(),
        start.elapsed()
    );

    Ok(MortalityDataset::from_records(national, states))
}

/// Blocking wrapper around [`load_dataset`] for synchronous callers
pub fn load_dataset_blocking(config: &DashboardConfig) -> Result<MortalityDataset> {
    // Check if we're already in a tokio runtime
    if tokio::runtime::Handle::try_current().is_ok() {
        // We're already in a tokio runtime, use futures executor
        futures::executor::block_on(load_dataset(config))
    } else {
        // Create a blocking runtime to run the async code
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(load_dataset(config))
    }
}

/// Build a dataset from JSON already in memory.
///
/// For callers that fetched the files themselves (embedded fixtures, a web
/// frontend handing bytes across). Parse errors are labeled with a
/// placeholder name instead of a filesystem path.
pub fn from_json_slices(national: &[u8], states: &[u8]) -> Result<MortalityDataset> {
    let national: Vec<NationalRecord> =
        serde_json::from_slice(national).map_err(|source| DashboardError::Parse {
            path: PathBuf::from("<national json>"),
            source,
        })?;
    let states: Vec<StateRecord> =
        serde_json::from_slice(states).map_err(|source| DashboardError::Parse {
            path: PathBuf::from("<states json>"),
            source,
        })?;

    Ok(MortalityDataset::from_records(national, states))
}

/// Read one JSON file into typed records
async fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let bytes = fs::read(path).await.map_err(|source| DashboardError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| DashboardError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
