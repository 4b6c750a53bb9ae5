//! A Rust library for exploring US and Mexico cause-of-death data:
//! dataset loading, queries, insight sentences, and chart-ready view
//! models for a mortality dashboard.

pub mod config;
pub mod dataset;
pub mod error;
pub mod insight;
pub mod loader;
pub mod models;
pub mod session;
pub mod utils;
pub mod views;

// Re-export the most common types for easier use
// Core types
pub use config::DashboardConfig;
pub use dataset::{MortalityDataset, NationalCollection, StateCollection};
pub use error::{DashboardError, Result};
pub use models::{NationalRecord, StateRecord};

// Loading
pub use loader::{from_json_slices, load_dataset, load_dataset_blocking};

// Session state
pub use session::{DashboardSession, Selection};

// View construction
pub use views::{
    ChartData, ViewAvailability, ViewId, ViewModel, build_view, resolve_available_views,
};
