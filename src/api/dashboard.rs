//! Dashboard statistics.

use std::sync::Arc;

use courier_core::{Result, TrackingSummary};
use courier_engine::Engine;

/// Aggregate statistics.
///
/// Access via `db.dashboard`.
pub struct Dashboard {
    engine: Arc<Engine>,
}

impl Dashboard {
    pub(crate) fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    /// Totals, per-status counts, fee sum and average rating.
    ///
    /// Covers every tracking and vote, regardless of owner.
    pub fn summary(&self) -> Result<TrackingSummary> {
        self.engine.tracking_summary()
    }
}
