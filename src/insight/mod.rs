//! Insight generation: pure functions turning query results into ordered
//! sentence lists, one set per view.
//!
//! Sentence order is part of the contract (most quantitative first,
//! guidance last). Every function here is total and idempotent; identical
//! inputs produce byte-identical sentences, so the UI can re-render freely.

// Per-view insight builders
pub mod national;
pub mod relationship;
pub mod states;

// Re-export commonly used functions and types
pub use self::national::{gap_insight, trend_insight};
pub use self::relationship::{RelationshipOutcome, RelationshipPoint, relationship_insight};
pub use self::states::{bubble_insight, bubble_size, missing_cause_insights, state_bar_insight};
