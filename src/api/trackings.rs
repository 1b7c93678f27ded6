//! Tracking operations.
//!
//! ```ignore
//! let me = UserId::from("u1");
//! let created = db.trackings.create(&me, "Laptop", 50.0)?;
//!
//! db.trackings.update(&me, &created.id, TrackingPatch::new().status(TrackingStatus::InTransit))?;
//!
//! let page = db.trackings.list(TrackingQuery::new().status(TrackingStatus::InTransit))?;
//! ```

use std::sync::Arc;

use courier_core::{
    NewTracking, Result, Tracking, TrackingId, TrackingPage, TrackingPatch, TrackingQuery,
    TrackingStatus, UserId,
};
use courier_engine::Engine;

/// Tracking operations.
///
/// Access via `db.trackings`.
pub struct Trackings {
    engine: Arc<Engine>,
}

impl Trackings {
    pub(crate) fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    /// One page of trackings.
    ///
    /// Listing is not scoped to a user; every tracking is visible.
    pub fn list(&self, query: TrackingQuery) -> Result<TrackingPage> {
        self.engine.list_trackings(&query)
    }

    /// Every tracking, in store order.
    pub fn all(&self) -> Result<Vec<Tracking>> {
        self.engine.store().trackings()
    }

    /// Look up one tracking by id.
    pub fn get(&self, id: &TrackingId) -> Result<Option<Tracking>> {
        self.engine.store().tracking(id)
    }

    /// Distinct statuses in use, in first-seen order.
    pub fn statuses(&self) -> Result<Vec<TrackingStatus>> {
        self.engine.list_statuses()
    }

    /// Create a tracking owned by `user`.
    pub fn create(&self, user: &UserId, name: &str, service_fee: f64) -> Result<Tracking> {
        self.engine
            .create_tracking(user, NewTracking::new(name, service_fee))
    }

    /// Apply `patch` to a tracking `user` owns.
    ///
    /// Fails with `Forbidden` for other users and `Conflict` once the
    /// tracking has left `Created`.
    pub fn update(&self, user: &UserId, id: &TrackingId, patch: TrackingPatch) -> Result<Tracking> {
        self.engine.update_tracking(user, id, &patch)
    }
}
