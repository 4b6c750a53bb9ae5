//! Record models for the two mortality datasets.
//!
//! The national dataset carries US/Mexico cause-of-death time series and the
//! state dataset carries the US state-level top-10 causes. Both are flat,
//! ordered, and immutable after load; field-level cleanup (numeric coercion,
//! the dual cause-field key) happens here at deserialization so that the
//! query layer only ever sees canonical records.

// Record models
pub mod geo;
pub mod national;
pub mod state;

// Field-level deserializers shared by both record types
pub mod serde;

// Re-export commonly used types
pub use self::geo::abbreviation_for;
pub use self::national::NationalRecord;
pub use self::state::{RawStateRecord, StateRecord};

/// Entity label for United States rows
pub const UNITED_STATES: &str = "United States";

/// Entity label for Mexico rows
pub const MEXICO: &str = "Mexico";

/// Cause label reserved for the mental-health relationship view.
///
/// Selecting it as the primary cause rejects the relationship view (which
/// plots other causes against it), and it has no state-level rows in the
/// source data, so the state views disable alongside it.
pub const MENTAL_HEALTH_CAUSE: &str = "Mental health/suicide";
