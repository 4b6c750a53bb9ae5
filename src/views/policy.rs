//! View-selection policy: which chart views a selection may use.
//!
//! Two independent rules drive availability: the state-level views need at
//! least one state record for the selected cause, and the relationship view
//! cannot take the reserved mental-health cause as its primary cause. The
//! policy is re-resolved on every cause change, and a selection that lands
//! on a disabled view falls back to the national bar view, the only view
//! that is always enabled.

use serde::{Deserialize, Serialize};

use crate::models::MENTAL_HEALTH_CAUSE;

/// One of the five renderable chart views.
///
/// Serialized with the wire names the UI layer exchanges (`bar`, `trend`,
/// `usStateBar`, `usBubble`, `mhCompare`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewId {
    /// National US vs Mexico bar chart for one year
    #[serde(rename = "bar")]
    Bar,
    /// National scatter-by-year trend for both countries
    #[serde(rename = "trend")]
    Trend,
    /// US state bar chart for one cause and year
    #[serde(rename = "usStateBar")]
    UsStateBar,
    /// US bubble map for one cause and year
    #[serde(rename = "usBubble")]
    UsBubble,
    /// Selected cause vs mental-health relationship plot
    #[serde(rename = "mhCompare")]
    MhCompare,
}

impl ViewId {
    /// All views in UI display order
    pub const ALL: [Self; 5] = [
        Self::Bar,
        Self::Trend,
        Self::UsStateBar,
        Self::UsBubble,
        Self::MhCompare,
    ];

    /// Wire name of the view
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Trend => "trend",
            Self::UsStateBar => "usStateBar",
            Self::UsBubble => "usBubble",
            Self::MhCompare => "mhCompare",
        }
    }

    /// Parse a wire name back into a view
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bar" => Some(Self::Bar),
            "trend" => Some(Self::Trend),
            "usStateBar" => Some(Self::UsStateBar),
            "usBubble" => Some(Self::UsBubble),
            "mhCompare" => Some(Self::MhCompare),
            _ => None,
        }
    }
}

/// Resolved view availability for one cause selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewAvailability {
    disabled: Vec<ViewId>,
}

impl ViewAvailability {
    /// Views disabled for the current selection
    #[must_use]
    pub fn disabled_views(&self) -> &[ViewId] {
        &self.disabled
    }

    /// Whether a view may be selected
    #[must_use]
    pub fn is_enabled(&self, view: ViewId) -> bool {
        !self.disabled.contains(&view)
    }

    /// The view that should actually render: `current` when enabled,
    /// otherwise the bar view
    #[must_use]
    pub fn effective_view(&self, current: ViewId) -> ViewId {
        if self.is_enabled(current) {
            current
        } else {
            ViewId::Bar
        }
    }
}

/// Resolve which views the current cause selection may use.
///
/// Both rules apply independently: missing state data disables the two
/// state-level views, and the reserved cause disables the relationship
/// view. The bar and trend views are never disabled.
#[must_use]
pub fn resolve_available_views(cause: &str, state_data_available: bool) -> ViewAvailability {
    let mut disabled = Vec::new();
    if !state_data_available {
        disabled.push(ViewId::UsStateBar);
        disabled.push(ViewId::UsBubble);
    }
    if cause == MENTAL_HEALTH_CAUSE {
        disabled.push(ViewId::MhCompare);
    }

    ViewAvailability { disabled }
}
