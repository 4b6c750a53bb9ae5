//! View layer: availability policy, chart-ready view models, and the
//! per-view builders that produce them.
//!
//! A view model is a complete render description (title, note, insight
//! sentences, chart series) computed in one pass from the dataset and the
//! current selection. Rendering state never feeds back into the dataset.

// View construction and types
pub mod build;
pub mod model;
pub mod policy;

// Re-export commonly used functions and types
pub use self::build::build_view;
pub use self::model::{
    BubblePoint, ChartData, RelationshipSeries, SnapshotPoint, TrendSeries, ViewModel,
};
pub use self::policy::{ViewAvailability, ViewId, resolve_available_views};
