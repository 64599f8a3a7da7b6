use tracing::debug;

use super::criteria::FilterCriteria;
use super::engine;
use crate::models::Listing;

/// Pending and applied filter criteria.
///
/// Edits land in `pending` only. Results are always computed from
/// `applied`, which changes solely through [`SearchSession::apply`] (copy
/// pending over) and [`SearchSession::reset`] (both back to defaults).
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    pending: FilterCriteria,
    applied: FilterCriteria,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &FilterCriteria {
        &self.pending
    }

    pub fn applied(&self) -> &FilterCriteria {
        &self.applied
    }

    /// Replace the draft criteria. Results do not change until `apply`.
    pub fn set_pending(&mut self, criteria: FilterCriteria) {
        self.pending = criteria;
    }

    /// Commit the draft. Returns whether the applied criteria changed.
    pub fn apply(&mut self) -> bool {
        let changed = self.applied != self.pending;
        self.applied = self.pending.clone();
        debug!(changed, "Applied filter criteria");
        changed
    }

    pub fn reset(&mut self) {
        self.pending = FilterCriteria::default();
        self.applied = FilterCriteria::default();
        debug!("Reset filter criteria");
    }

    /// Whether the draft differs from what results are showing.
    pub fn has_unapplied_changes(&self) -> bool {
        self.pending != self.applied
    }

    /// Results for the applied criteria.
    pub fn results<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        engine::filter(listings, &self.applied)
    }
}
