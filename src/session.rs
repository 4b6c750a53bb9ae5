//! Dashboard session: current selection plus view recomputation.
//!
//! This provides a high-level interface over one loaded dataset. The
//! session owns the selection (cause, view, year), coerces every change
//! through the availability policy, and hands back a freshly built
//! [`ViewModel`] after each change. The dataset itself is never mutated,
//! so identical selections always produce identical models.

use log::debug;

use crate::config::DashboardConfig;
use crate::dataset::MortalityDataset;
use crate::views::{ViewAvailability, ViewId, ViewModel, build_view, resolve_available_views};

/// Note attached to the model when a state-level view falls back to the
/// national bar.
const STATE_FALLBACK_NOTE: &str =
    "State-level data is not available for this cause. Switching to the national view.";

/// One user selection: the cause, the view, and the single-year views' year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Selected cause label
    pub cause: String,
    /// Selected view, already coerced to an enabled one
    pub view: ViewId,
    /// Year shown by the bar and map views
    pub year: i32,
}

/// Stateful facade for driving the dashboard.
///
/// Construct it once with a loaded dataset, then call the `set_*` methods
/// as the user changes the selection; each returns the complete model for
/// whatever view ends up selected.
pub struct DashboardSession {
    dataset: MortalityDataset,
    config: DashboardConfig,
    selection: Selection,
}

impl DashboardSession {
    /// Start a session on the configured defaults.
    ///
    /// The default cause is validated against the loaded data and the
    /// default view against the availability policy, so a fresh session
    /// never starts on a disabled view.
    #[must_use]
    pub fn new(dataset: MortalityDataset, config: DashboardConfig) -> Self {
        let cause = dataset
            .national()
            .default_cause(&config.default_cause)
            .unwrap_or_else(|| config.default_cause.clone());
        let availability =
            resolve_available_views(&cause, dataset.states().has_data_for_cause(&cause));
        let view = availability.effective_view(config.default_view);
        let selection = Selection {
            cause,
            view,
            year: config.default_year,
        };

        Self {
            dataset,
            config,
            selection,
        }
    }

    /// The current selection
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The loaded dataset
    #[must_use]
    pub fn dataset(&self) -> &MortalityDataset {
        &self.dataset
    }

    /// Availability policy resolved for the current cause, for UI control
    /// flags
    #[must_use]
    pub fn availability(&self) -> ViewAvailability {
        resolve_available_views(
            &self.selection.cause,
            self.dataset
                .states()
                .has_data_for_cause(&self.selection.cause),
        )
    }

    /// Views disabled for the current cause
    #[must_use]
    pub fn disabled_views(&self) -> Vec<ViewId> {
        self.availability().disabled_views().to_vec()
    }

    /// Build the model for the current selection without changing it
    #[must_use]
    pub fn current_view(&self) -> ViewModel {
        build_view(
            &self.dataset,
            self.selection.view,
            &self.selection.cause,
            self.selection.year,
            &self.config.snapshot_years,
        )
    }

    /// Select a cause and recompute.
    ///
    /// A cause that disables the current view drops the selection back to
    /// the national bar; leaving a state-level view this way attaches an
    /// explanatory note to the returned model.
    pub fn set_cause(&mut self, cause: &str) -> ViewModel {
        self.selection.cause = cause.to_string();
        self.apply(self.selection.view)
    }

    /// Select a view and recompute; disabled views coerce to the bar
    pub fn set_view(&mut self, view: ViewId) -> ViewModel {
        self.apply(view)
    }

    /// Select a year and recompute
    pub fn set_year(&mut self, year: i32) -> ViewModel {
        self.selection.year = year;
        self.apply(self.selection.view)
    }

    // Helper functions

    /// Coerce `requested` through the availability policy, store the
    /// outcome, and rebuild the model.
    ///
    /// Only a lost state-level view gets the fallback note; the
    /// mental-health comparison falls back silently because its own view
    /// explains the rejection.
    fn apply(&mut self, requested: ViewId) -> ViewModel {
        let effective = self.availability().effective_view(requested);
        if effective != requested {
            debug!(
                "view '{}' is disabled for cause '{}', falling back to '{}'",
                requested.as_str(),
                self.selection.cause,
                effective.as_str()
            );
        }
        self.selection.view = effective;

        let mut model = self.current_view();
        if effective != requested && matches!(requested, ViewId::UsStateBar | ViewId::UsBubble) {
            model.note = STATE_FALLBACK_NOTE.to_string();
        }
        model
    }
}
